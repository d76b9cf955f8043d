use std::fmt;

use serde::{Deserialize, Serialize};

pub const MIN_PASSWORD_LENGTH: usize = 4;
pub const MAX_PASSWORD_LENGTH: usize = 25;

/// The options a single password is generated with.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PasswordOptions {
    pub length: usize,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for PasswordOptions {
    fn default() -> PasswordOptions {
        PasswordOptions {
            length: 12,
            include_lowercase: true,
            include_uppercase: true,
            include_numbers: true,
            include_symbols: false,
        }
    }
}

impl PasswordOptions {
    pub fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Numbers => self.include_numbers,
            CharacterClass::Symbols => self.include_symbols,
        }
    }

    pub fn set_included(&mut self, class: CharacterClass, included: bool) {
        let flag = match class {
            CharacterClass::Lowercase => &mut self.include_lowercase,
            CharacterClass::Uppercase => &mut self.include_uppercase,
            CharacterClass::Numbers => &mut self.include_numbers,
            CharacterClass::Symbols => &mut self.include_symbols,
        };
        *flag = included;
    }

    /// The selected classes, in pool order.
    pub fn classes(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.includes(*class))
    }

    /// The form-level check: at least one character class must be selected.
    pub fn check_classes(&self) -> Result<(), OptionsError> {
        if self.classes().next().is_some() {
            Ok(())
        } else {
            Err(OptionsError::NoOptionsSelected)
        }
    }

    /// The field-level check on `length`.
    pub fn check_length(&self) -> Result<(), OptionsError> {
        if (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&self.length) {
            Ok(())
        } else {
            Err(OptionsError::LengthOutOfRange(self.length))
        }
    }

    /// Run every check on the options; the length is checked first.
    pub fn validate(&self) -> Result<(), OptionsError> {
        self.check_length()?;
        self.check_classes()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum OptionsError {
    #[error("at least one character class must be selected")]
    NoOptionsSelected,
    #[error(
        "password length must be between {min} and {max} (got {0})",
        min = MIN_PASSWORD_LENGTH,
        max = MAX_PASSWORD_LENGTH
    )]
    LengthOutOfRange(usize),
}

/// A class of characters a password can be drawn from.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    /// Every class, in the order their characters are added to the pool.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    pub fn characters(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Numbers => NUMBERS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Numbers => "numbers",
            CharacterClass::Symbols => "symbols",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
static UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
static NUMBERS: &str = "0123456789";
static SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

#[cfg(test)]
mod tests {
    use super::*;

    fn no_classes() -> PasswordOptions {
        PasswordOptions {
            length: 8,
            include_lowercase: false,
            include_uppercase: false,
            include_numbers: false,
            include_symbols: false,
        }
    }

    #[test]
    fn no_classes_is_rejected() {
        assert_eq!(
            no_classes().check_classes(),
            Err(OptionsError::NoOptionsSelected)
        );
        assert_eq!(no_classes().validate(), Err(OptionsError::NoOptionsSelected));
    }

    #[test]
    fn any_single_class_is_enough() {
        for class in CharacterClass::ALL {
            let mut options = no_classes();
            options.set_included(class, true);
            assert!(options.includes(class));
            assert_eq!(options.validate(), Ok(()), "{class} alone should be valid");
        }
    }

    #[test]
    fn length_bounds_are_inclusive() {
        let mut options = PasswordOptions::default();
        options.length = MIN_PASSWORD_LENGTH;
        assert_eq!(options.validate(), Ok(()));
        options.length = MAX_PASSWORD_LENGTH;
        assert_eq!(options.validate(), Ok(()));
        options.length = MIN_PASSWORD_LENGTH - 1;
        assert_eq!(options.validate(), Err(OptionsError::LengthOutOfRange(3)));
        options.length = MAX_PASSWORD_LENGTH + 1;
        assert_eq!(options.validate(), Err(OptionsError::LengthOutOfRange(26)));
    }

    #[test]
    fn classes_come_out_in_pool_order() {
        let options = PasswordOptions {
            include_symbols: true,
            include_uppercase: false,
            ..PasswordOptions::default()
        };
        let classes = options.classes().collect::<Vec<_>>();
        assert_eq!(
            classes,
            [
                CharacterClass::Lowercase,
                CharacterClass::Numbers,
                CharacterClass::Symbols
            ]
        );
    }

    #[test]
    fn missing_config_keys_take_defaults() {
        let options: PasswordOptions = serde_yaml::from_str("length: 20\n").unwrap();
        assert_eq!(
            options,
            PasswordOptions {
                length: 20,
                ..PasswordOptions::default()
            }
        );
    }
}
