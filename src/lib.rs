//! Random password generation from selectable character classes, with a short history of
//! recent results.

use serde::{Deserialize, Serialize};

mod form;
mod history;
mod options;
pub mod password_generation;
mod service;

pub use form::PasswordForm;
pub use history::{GeneratedPassword, RecentPasswords, MAX_RECENT_PASSWORDS};
pub use options::{
    CharacterClass, OptionsError, PasswordOptions, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH,
};
pub use service::PasswordService;

/// A generated password.
///
/// The `Debug` output is opaque, so a password never ends up in a log line by accident. Use
/// [`Secret::as_str`] to get at the contents.
#[derive(Clone, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Secret(String);

opaque_debug::implement!(Secret);

impl Secret {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The length of the password, in characters.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Secret {
        Secret(s)
    }
}

impl FromIterator<char> for Secret {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Secret {
        Secret(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_debug_hides_contents() {
        let secret = Secret::from(String::from("hunter22"));
        let debugged = format!("{:?}", secret);
        assert!(!debugged.contains("hunter22"));
        assert_eq!(secret.as_str(), "hunter22");
    }

    #[test]
    fn secret_serializes_as_plain_string() {
        let secret = Secret::from(String::from("abc"));
        assert_eq!(serde_json::to_string(&secret).unwrap(), "\"abc\"");
    }
}
