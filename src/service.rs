use chrono::Utc;
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::history::{GeneratedPassword, RecentPasswords};
use crate::password_generation::{build_alphabet, generate_random_password};
use crate::{PasswordOptions, Secret};

/// Generates passwords and remembers the last few it handed out.
///
/// One service belongs to one session; its history goes away with it.
pub struct PasswordService<R = ThreadRng> {
    rng: R,
    recent: RecentPasswords,
}

impl PasswordService<ThreadRng> {
    pub fn new() -> Self {
        PasswordService::with_rng(rand::thread_rng())
    }
}

impl Default for PasswordService<ThreadRng> {
    fn default() -> Self {
        PasswordService::new()
    }
}

impl<R: Rng> PasswordService<R> {
    pub fn with_rng(rng: R) -> Self {
        PasswordService {
            rng,
            recent: RecentPasswords::default(),
        }
    }

    /// Generate a password with the given options and record it in the recent history.
    ///
    /// The options are not validated here. With no character class selected the result is an
    /// empty password, and nothing is recorded.
    pub fn generate_password(&mut self, options: &PasswordOptions) -> Secret {
        let alphabet = build_alphabet(options);
        if alphabet.is_empty() {
            log::debug!("no character classes selected; not generating a password");
            return Secret::default();
        }

        let password = generate_random_password(&mut self.rng, &alphabet, options.length);
        log::debug!(
            "generated a {}-character password from a pool of {}",
            options.length,
            alphabet.len()
        );
        self.recent
            .push(GeneratedPassword::new(password.clone(), *options, Utc::now()));
        password
    }

    /// A copy of the recent history, newest first.
    pub fn recent_passwords(&self) -> Vec<GeneratedPassword> {
        self.recent.to_vec()
    }

    pub fn recent(&self) -> &RecentPasswords {
        &self.recent
    }

    pub fn clear_recent_passwords(&mut self) {
        log::debug!("clearing {} recent passwords", self.recent.len());
        self.recent.clear();
    }
}
