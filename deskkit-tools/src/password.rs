//! Random password generator.

use rand::Rng;

use crate::error::ToolError;

pub const DEFAULT_LENGTH: usize = 12;

/// ASCII letters, digits and punctuation (94 characters).
pub const PASSWORD_ALPHABET: &str = concat!(
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "0123456789",
    "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~",
);

pub fn parse_length(raw: &str) -> Result<usize, ToolError> {
    let n: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ToolError::LengthNotInteger(raw.to_string()))?;
    if n <= 0 {
        return Err(ToolError::InvalidLength(n));
    }
    usize::try_from(n).map_err(|_| ToolError::InvalidLength(n))
}

/// Draw `length` characters uniformly from `PASSWORD_ALPHABET`.
pub fn generate_password<R: Rng>(length: usize, rng: &mut R) -> Result<String, ToolError> {
    if length == 0 {
        return Err(ToolError::InvalidLength(0));
    }
    let alphabet = PASSWORD_ALPHABET.as_bytes();
    Ok((0..length)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())] as char)
        .collect())
}
