//! API credential resolution.

use crate::error::{Error, Result};
use std::fmt;

/// The model API key. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Resolve the key through `lookup`, failing if it is missing or blank.
    pub fn from_lookup(var: &str, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        match lookup(var) {
            Some(value) if !value.trim().is_empty() => Ok(Self(value.trim().to_string())),
            _ => Err(Error::config(format!("{var} environment variable not set"))),
        }
    }

    /// The raw key, for request headers only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_names_the_variable() {
        let err = ApiKey::from_lookup("API_KEY", |_| None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: API_KEY environment variable not set"
        );
    }

    #[test]
    fn test_blank_key_is_missing() {
        assert!(ApiKey::from_lookup("API_KEY", |_| Some("   ".into())).is_err());
    }

    #[test]
    fn test_key_is_trimmed_and_redacted() {
        let key = ApiKey::from_lookup("GEMINI_KEY", |name| {
            (name == "GEMINI_KEY").then(|| " secret \n".to_string())
        })
        .unwrap();
        assert_eq!(key.expose(), "secret");
        assert_eq!(format!("{key:?}"), "ApiKey(***)");
    }
}
