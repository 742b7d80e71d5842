//! Short code generation.

use rand::distr::Alphanumeric;
use rand::{Rng, rng};

/// Length of a freshly generated short code.
pub const CODE_LENGTH: usize = 6;

/// Generates a random code of `length` characters drawn from `[A-Za-z0-9]`.
///
/// Collision handling is the caller's job; with the 62-character alphabet a
/// 6-character code collides with probability 62^-6 per draw.
pub fn generate_code(length: usize) -> String {
    rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
