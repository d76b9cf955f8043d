//! Utilities for generating passwords.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::PasswordOptions;

/// Build the pool of characters a password with the given options is drawn from.
///
/// Each selected class contributes its whole set, in the fixed class order (lowercase, uppercase,
/// numbers, symbols). If no class is selected, the pool is empty.
pub fn build_alphabet(options: &PasswordOptions) -> Vec<char> {
    let mut alphabet = Vec::new();
    for class in options.classes() {
        alphabet.extend(class.characters().chars());
    }
    alphabet
}

/// Generate a password by randomly sampling the given alphabet `len` times.
///
/// Every draw is independent and uniform over the alphabet: `rand`'s uniform sampler re-samples
/// rather than taking a biased modulo. An empty alphabet produces an empty password.
///
/// Nothing here requires a `CryptoRng`; the passwords are not meant to back any security claim.
pub fn generate_random_password<R>(rng: &mut R, alphabet: &[char], len: usize) -> crate::Secret
where
    R: Rng + ?Sized,
{
    if alphabet.is_empty() {
        return crate::Secret::default();
    }
    (0..len)
        .filter_map(|_| alphabet.choose(rng).copied())
        .collect()
}
