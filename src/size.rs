//! Byte-size arguments such as `512`, `64KB`, `5MB` or `1GB`.

/// Binary multiples, longest suffix first.
const SUFFIXES: [(&str, usize); 3] = [("KB", 1 << 10), ("MB", 1 << 20), ("GB", 1 << 30)];

const TRIM_CHARS: [char; 4] = [' ', '\t', '\r', '\n'];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SizeError {
    #[error("empty size")]
    Empty,
    #[error("invalid size '{0}'")]
    Invalid(String),
    #[error("size '{0}' is too large")]
    Overflow(String),
}

/// Parse a size string into a byte count. Suffixes are case-insensitive.
pub fn parse_size(input: &str) -> Result<usize, SizeError> {
    let trimmed = input.trim_matches(TRIM_CHARS);
    if trimmed.is_empty() {
        return Err(SizeError::Empty);
    }
    let upper = trimmed.to_ascii_uppercase();
    let (digits, multiplier) = SUFFIXES
        .iter()
        .find_map(|&(suffix, mult)| upper.strip_suffix(suffix).map(|d| (d, mult)))
        .unwrap_or((upper.as_str(), 1));

    let value: usize = digits
        .trim_matches(TRIM_CHARS)
        .parse()
        .map_err(|_| SizeError::Invalid(input.to_string()))?;
    value
        .checked_mul(multiplier)
        .ok_or_else(|| SizeError::Overflow(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_number_is_bytes() {
        assert_eq!(parse_size("512"), Ok(512));
        assert_eq!(parse_size("0"), Ok(0));
    }

    #[test]
    fn suffixes_are_binary_multiples() {
        assert_eq!(parse_size("64KB"), Ok(64 * 1024));
        assert_eq!(parse_size("5MB"), Ok(5 * 1024 * 1024));
        assert_eq!(parse_size("1GB"), Ok(1024 * 1024 * 1024));
    }

    #[test]
    fn suffix_is_case_insensitive() {
        assert_eq!(parse_size("5mb"), Ok(5 * 1024 * 1024));
        assert_eq!(parse_size("2Kb"), Ok(2048));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_size(""), Err(SizeError::Empty));
        assert_eq!(parse_size("MB"), Err(SizeError::Invalid("MB".to_string())));
        assert_eq!(parse_size("five"), Err(SizeError::Invalid("five".to_string())));
        assert_eq!(parse_size("-5MB"), Err(SizeError::Invalid("-5MB".to_string())));
    }

    #[test]
    fn rejects_overflow() {
        let huge = format!("{}GB", usize::MAX);
        assert_eq!(parse_size(&huge), Err(SizeError::Overflow(huge.clone())));
    }
}
