use rand::rngs::ThreadRng;
use rand::Rng;

use crate::history::GeneratedPassword;
use crate::{CharacterClass, OptionsError, PasswordOptions, PasswordService, Secret};

/// The state of one password generation session.
///
/// Every change to the option values immediately re-validates them: valid options produce a new
/// password, invalid ones clear the current password and raise the error flag.
pub struct PasswordForm<R = ThreadRng> {
    options: PasswordOptions,
    service: PasswordService<R>,
    current_password: Secret,
    show_error: bool,
}

impl PasswordForm<ThreadRng> {
    pub fn new(initial: PasswordOptions) -> Self {
        PasswordForm::with_service(initial, PasswordService::new())
    }
}

impl<R: Rng> PasswordForm<R> {
    /// Start a session on the given service. If the initial options are valid, the first password
    /// is generated right away.
    pub fn with_service(initial: PasswordOptions, service: PasswordService<R>) -> Self {
        let mut form = PasswordForm {
            options: initial,
            service,
            current_password: Secret::default(),
            show_error: false,
        };
        if form.validate().is_ok() {
            form.generate();
        }
        form
    }

    pub fn options(&self) -> &PasswordOptions {
        &self.options
    }

    pub fn current_password(&self) -> &Secret {
        &self.current_password
    }

    /// Whether the last change or regeneration request was rejected.
    pub fn show_error(&self) -> bool {
        self.show_error
    }

    /// Whether the options fail the form-level "at least one class" check.
    pub fn has_validation_error(&self) -> bool {
        self.options.check_classes().is_err()
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        self.options.validate()
    }

    pub fn recent_passwords(&self) -> Vec<GeneratedPassword> {
        self.service.recent_passwords()
    }

    pub fn set_length(&mut self, length: usize) {
        self.options.length = length;
        self.on_change();
    }

    pub fn set_class(&mut self, class: CharacterClass, included: bool) {
        self.options.set_included(class, included);
        self.on_change();
    }

    pub fn toggle_class(&mut self, class: CharacterClass) {
        let included = self.options.includes(class);
        self.set_class(class, !included);
    }

    pub fn set_options(&mut self, options: PasswordOptions) {
        self.options = options;
        self.on_change();
    }

    /// Generate a fresh password with the current options.
    ///
    /// Invalid options raise the error flag and leave the current password as it is.
    pub fn regenerate(&mut self) {
        if self.validate().is_err() {
            self.show_error = true;
            return;
        }
        self.generate();
    }

    pub fn clear_recent_passwords(&mut self) {
        self.service.clear_recent_passwords();
    }

    /// End the session. The recent history does not outlive it.
    pub fn end_session(mut self) {
        self.service.clear_recent_passwords();
    }

    fn on_change(&mut self) {
        match self.validate() {
            Ok(()) => self.generate(),
            Err(err) => {
                log::debug!("options rejected: {}", err);
                self.show_error = true;
                self.current_password = Secret::default();
            }
        }
    }

    fn generate(&mut self) {
        self.current_password = self.service.generate_password(&self.options);
        self.show_error = false;
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn form(initial: PasswordOptions) -> PasswordForm<StdRng> {
        PasswordForm::with_service(
            initial,
            PasswordService::with_rng(StdRng::seed_from_u64(3)),
        )
    }

    #[test]
    fn valid_initial_options_generate_immediately() {
        let form = form(PasswordOptions::default());
        assert_eq!(form.current_password().char_count(), 12);
        assert!(!form.show_error());
        assert_eq!(form.recent_passwords().len(), 1);
    }

    #[test]
    fn invalid_initial_options_generate_nothing() {
        let form = form(PasswordOptions {
            length: 2,
            ..PasswordOptions::default()
        });
        assert!(form.current_password().is_empty());
        assert!(form.recent_passwords().is_empty());
    }

    #[test]
    fn deselecting_everything_clears_the_password() {
        let mut form = form(PasswordOptions::default());
        form.set_class(CharacterClass::Lowercase, false);
        form.set_class(CharacterClass::Uppercase, false);
        assert!(!form.current_password().is_empty());
        form.set_class(CharacterClass::Numbers, false);
        assert!(form.current_password().is_empty());
        assert!(form.show_error());
        assert!(form.has_validation_error());
        assert_eq!(form.recent_passwords().len(), 3);

        form.toggle_class(CharacterClass::Symbols);
        assert!(!form.show_error());
        assert!(!form.has_validation_error());
        assert!(form
            .current_password()
            .as_str()
            .chars()
            .all(|ch| CharacterClass::Symbols.characters().contains(ch)));
    }

    #[test]
    fn length_out_of_range_is_an_error_but_not_a_class_error() {
        let mut form = form(PasswordOptions::default());
        form.set_length(30);
        assert!(form.show_error());
        assert!(!form.has_validation_error());
        assert!(form.current_password().is_empty());
        assert_eq!(form.validate(), Err(OptionsError::LengthOutOfRange(30)));

        form.set_length(25);
        assert!(!form.show_error());
        assert_eq!(form.current_password().char_count(), 25);
    }

    #[test]
    fn regenerate_with_invalid_options_only_flags() {
        let mut form = form(PasswordOptions::default());
        form.set_options(PasswordOptions {
            include_lowercase: false,
            include_uppercase: false,
            include_numbers: false,
            ..PasswordOptions::default()
        });
        let generated = form.recent_passwords().len();
        form.regenerate();
        assert!(form.show_error());
        assert_eq!(form.recent_passwords().len(), generated);
    }

    #[test]
    fn regenerate_adds_to_history() {
        let mut form = form(PasswordOptions::default());
        form.regenerate();
        let recent = form.recent_passwords();
        assert_eq!(recent.len(), 2);
        assert_eq!(&recent[0].password, form.current_password());
        form.clear_recent_passwords();
        assert!(form.recent_passwords().is_empty());
        form.end_session();
    }
}
