//! Field rules for accounts and messages.
//!
//! Lengths count characters, not bytes. "Blank" means empty or made only of
//! whitespace.

use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 4;
pub const MAX_TEXT_LEN: usize = 255;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("password must be at least {min} characters, got {actual}")]
    PasswordTooShort { min: usize, actual: usize },

    #[error("username must not be blank")]
    BlankUsername,

    #[error("message text must not be blank")]
    BlankText,

    #[error("message text must be at most {max} characters, got {actual}")]
    TextTooLong { max: usize, actual: usize },
}

pub fn password(password: &str) -> Result<(), ValidationError> {
    let actual = password.chars().count();
    if actual < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
            actual,
        });
    }
    Ok(())
}

pub fn username(username: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Err(ValidationError::BlankUsername);
    }
    Ok(())
}

pub fn message_text(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::BlankText);
    }
    let actual = text.chars().count();
    if actual > MAX_TEXT_LEN {
        return Err(ValidationError::TextTooLong {
            max: MAX_TEXT_LEN,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_boundary() {
        assert_eq!(
            password("abc"),
            Err(ValidationError::PasswordTooShort { min: 4, actual: 3 })
        );
        assert_eq!(password("abcd"), Ok(()));
    }

    #[test]
    fn whitespace_username_is_blank() {
        assert_eq!(username(""), Err(ValidationError::BlankUsername));
        assert_eq!(username(" \t\n"), Err(ValidationError::BlankUsername));
        assert_eq!(username(" bob "), Ok(()));
    }

    #[test]
    fn text_length_boundary() {
        assert_eq!(message_text(&"a".repeat(255)), Ok(()));
        assert_eq!(
            message_text(&"a".repeat(256)),
            Err(ValidationError::TextTooLong { max: 255, actual: 256 })
        );
    }

    #[test]
    fn text_length_counts_characters() {
        // 255 two-byte characters are 510 bytes but still within the limit.
        assert_eq!(message_text(&"é".repeat(255)), Ok(()));
    }

    #[test]
    fn blank_text_is_checked_before_length() {
        assert_eq!(message_text(&" ".repeat(300)), Err(ValidationError::BlankText));
    }
}
