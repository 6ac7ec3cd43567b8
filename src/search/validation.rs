//! Username validation predicates

use std::fmt;

/// Why a submitted username was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Nothing left after trimming
    Empty,
    /// A space remains after trimming
    ContainsSpace,
}

impl InputError {
    /// Message shown to the user
    pub fn message(&self) -> &'static str {
        match self {
            InputError::Empty => "Username cannot be empty.",
            InputError::ContainsSpace => "Username contains space.",
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Strip leading and trailing whitespace, counting the byte-order mark
/// (U+FEFF) as whitespace too.
pub fn trim_username(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Check a raw username. First failing rule wins.
pub fn validate_username(raw: &str) -> Result<(), InputError> {
    let trimmed = trim_username(raw);

    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    if trimmed.contains(' ') {
        return Err(InputError::ContainsSpace);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_blank() {
        assert_eq!(validate_username(""), Err(InputError::Empty));
        assert_eq!(validate_username("   "), Err(InputError::Empty));
        assert_eq!(validate_username("\t\n"), Err(InputError::Empty));
        assert_eq!(validate_username("\u{FEFF}"), Err(InputError::Empty));
        assert_eq!(validate_username(" \u{FEFF}\u{00A0} "), Err(InputError::Empty));
    }

    #[test]
    fn byte_order_mark_is_trimmed_around_names() {
        assert_eq!(trim_username("\u{FEFF}lk\u{FEFF}"), "lk");
        assert_eq!(validate_username("\u{FEFF}lk"), Ok(()));
        assert_eq!(
            validate_username("\u{FEFF}l k\u{FEFF}"),
            Err(InputError::ContainsSpace)
        );
    }

    #[test]
    fn rejects_inner_space() {
        assert_eq!(validate_username("l k"), Err(InputError::ContainsSpace));
        assert_eq!(validate_username("  l k  "), Err(InputError::ContainsSpace));
    }

    #[test]
    fn accepts_surrounding_whitespace() {
        assert_eq!(validate_username("lk"), Ok(()));
        assert_eq!(validate_username("  lk "), Ok(()));
    }

    #[test]
    fn only_the_space_character_counts() {
        assert_eq!(validate_username("l\tk"), Ok(()));
    }

    #[test]
    fn messages_match_display() {
        assert_eq!(InputError::Empty.to_string(), "Username cannot be empty.");
        assert_eq!(InputError::ContainsSpace.to_string(), "Username contains space.");
    }
}
