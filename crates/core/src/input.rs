//! Parsing of user-supplied index lists such as `"1, 2, 10"`.

use tracing::debug;

use crate::error::InputError;

/// Parses one token as a Fibonacci index.
///
/// Reads the leading run of decimal digits after surrounding whitespace and an
/// optional `+`, ignoring whatever follows, so `"2.5"` is 2 and `"12abc"` is 12.
/// A token without leading digits, a negative one or one past `u64::MAX` is
/// rejected.
pub fn parse_index(token: &str) -> Result<u64, InputError> {
    let token = token.trim();
    let unsigned = token.strip_prefix('+').unwrap_or(token);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..end]
        .parse::<u64>()
        .map_err(|_| InputError::InvalidIndex(token.to_string()))
}

/// Splits `input` on commas and keeps every token that is a valid index.
///
/// Empty and non-numeric tokens are dropped silently. Fails with
/// [`InputError::NoValidIndices`] when nothing is left.
pub fn parse_indices(input: &str) -> Result<Vec<u64>, InputError> {
    let indices: Vec<u64> = input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| match parse_index(token) {
            Ok(n) => Some(n),
            Err(e) => {
                debug!("discarding token: {e}");
                None
            }
        })
        .collect();

    if indices.is_empty() {
        return Err(InputError::NoValidIndices);
    }
    Ok(indices)
}
