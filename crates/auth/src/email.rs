//! Login email handling.
//!
//! There is no user store: any present email can obtain a token.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("email is required")]
    Missing,
}

/// A trimmed, non-blank login email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginEmail(String);

impl LoginEmail {
    pub fn parse(raw: Option<&str>) -> Result<Self, EmailError> {
        let email = raw.map(str::trim).unwrap_or_default();
        if email.is_empty() {
            return Err(EmailError::Missing);
        }
        Ok(Self(email.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_address() {
        assert_eq!(LoginEmail::parse(Some(" a@b.com ")).unwrap().as_str(), "a@b.com");
    }

    #[test]
    fn missing_or_blank_is_missing() {
        assert_eq!(LoginEmail::parse(None), Err(EmailError::Missing));
        assert_eq!(LoginEmail::parse(Some("   ")), Err(EmailError::Missing));
    }

    #[test]
    fn any_present_value_is_accepted() {
        for raw in ["johndoe", "@gmail.com", "johndoe@", "a@b@c"] {
            assert_eq!(LoginEmail::parse(Some(raw)).unwrap().as_str(), raw);
        }
    }
}
