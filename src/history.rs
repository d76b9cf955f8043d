use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{PasswordOptions, Secret};

/// How many recent passwords are kept.
pub const MAX_RECENT_PASSWORDS: usize = 5;

/// A record of one generated password.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GeneratedPassword {
    /// Milliseconds since the Unix epoch at generation time.
    pub id: String,
    pub password: Secret,
    pub timestamp: DateTime<Utc>,
    pub options: PasswordOptions,
}

impl GeneratedPassword {
    pub fn new(password: Secret, options: PasswordOptions, timestamp: DateTime<Utc>) -> Self {
        GeneratedPassword {
            id: timestamp.timestamp_millis().to_string(),
            password,
            timestamp,
            options,
        }
    }
}

/// The most recently generated passwords, newest first.
///
/// Once more than `capacity` records have been pushed, the oldest are dropped.
#[derive(Debug)]
pub struct RecentPasswords {
    entries: VecDeque<GeneratedPassword>,
    capacity: usize,
}

impl Default for RecentPasswords {
    fn default() -> Self {
        RecentPasswords::with_capacity(MAX_RECENT_PASSWORDS)
    }
}

impl RecentPasswords {
    fn with_capacity(capacity: usize) -> Self {
        RecentPasswords {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn push(&mut self, record: GeneratedPassword) {
        self.entries.push_front(record);
        self.entries.truncate(self.capacity);
    }

    pub fn newest(&self) -> Option<&GeneratedPassword> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeneratedPassword> + '_ {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<GeneratedPassword> {
        self.entries.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
