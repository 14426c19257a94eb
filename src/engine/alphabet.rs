//! Byte-level helpers shared by the preparers and scanners.

/// Modulus for all rolling-hash arithmetic.
pub const HASH_MODULUS: u64 = 1_000_000_007;

/// Multiplier for the base-256 rolling hash.
pub const HASH_BASE: u64 = 256;

/// Compute `base^exp mod HASH_MODULUS` by square-and-multiply.
pub fn pow_mod(mut base: u64, mut exp: usize) -> u64 {
    let mut result = 1u64;
    base %= HASH_MODULUS;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % HASH_MODULUS;
        }
        base = base * base % HASH_MODULUS;
        exp >>= 1;
    }
    result
}

/// Extend `hash` by one byte using Horner's rule.
#[inline]
pub fn hash_push(hash: u64, byte: u8) -> u64 {
    (hash * HASH_BASE + u64::from(byte)) % HASH_MODULUS
}

/// Remove the contribution of the window's leading byte.
///
/// `high_base` must be `HASH_BASE^(m-1) mod HASH_MODULUS` for window width `m`.
#[inline]
pub fn hash_pop(hash: u64, byte: u8, high_base: u64) -> u64 {
    let outgoing = u64::from(byte) * high_base % HASH_MODULUS;
    (hash + HASH_MODULUS - outgoing) % HASH_MODULUS
}

/// Hash a whole byte string directly.
pub fn horner_hash(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0, |hash, &b| hash_push(hash, b))
}

/// Split `text` into maximal runs of ASCII alphanumeric bytes.
///
/// Every other byte is a separator; separators never appear in a token.
pub fn tokenize(text: &[u8]) -> Vec<&[u8]> {
    text.split(|b| !b.is_ascii_alphanumeric())
        .filter(|token| !token.is_empty())
        .collect()
}

fn is_trim_byte(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Strip leading and trailing spaces, tabs, carriage returns and newlines.
pub fn trim(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|&b| !is_trim_byte(b))
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|&b| !is_trim_byte(b))
        .map_or(start, |i| i + 1);
    &bytes[start..end]
}

/// ASCII upper-case copy; every other byte is left untouched.
pub fn to_upper(bytes: &[u8]) -> Vec<u8> {
    bytes.to_ascii_uppercase()
}
