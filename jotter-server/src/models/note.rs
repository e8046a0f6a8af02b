//! Validated newtypes for note and author fields

use super::validation::ValidationError;

/// Maximum note title length
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum note body length
pub const MAX_BODY_LEN: usize = 10_000;

/// Maximum author username length
pub const MAX_USERNAME_LEN: usize = 32;

/// A validated, trimmed note title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteTitle(String);

impl NoteTitle {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }
        if trimmed.len() > MAX_TITLE_LEN {
            return Err(ValidationError::TooLong {
                field: "title",
                max: MAX_TITLE_LEN,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A validated author username: lowercase alphanumerics, `-` and `_`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "username" });
        }
        if trimmed.len() > MAX_USERNAME_LEN {
            return Err(ValidationError::TooLong {
                field: "username",
                max: MAX_USERNAME_LEN,
            });
        }
        let valid = trimmed
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
        if !valid {
            return Err(ValidationError::InvalidFormat {
                field: "username",
                reason: "only lowercase letters, digits, '-' and '_' are allowed",
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_trimmed() {
        let title = NoteTitle::new("  groceries  ").unwrap();
        assert_eq!(title.as_str(), "groceries");
    }

    #[test]
    fn empty_title_rejected() {
        assert!(matches!(
            NoteTitle::new("   "),
            Err(ValidationError::Empty { field: "title" })
        ));
    }

    #[test]
    fn overlong_title_rejected() {
        let raw = "x".repeat(MAX_TITLE_LEN + 1);
        assert!(matches!(
            NoteTitle::new(&raw),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn username_format() {
        assert!(Username::new("ada_95").is_ok());
        assert!(Username::new("Ada").is_err());
        assert!(Username::new("ada lovelace").is_err());
    }
}
