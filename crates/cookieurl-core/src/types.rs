//! Data model shared by the encoder, the store and the CLI.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single name/value pair carried in the payload.
///
/// Duplicates and empty strings are allowed; dropping blank pairs is up to
/// the caller (see [`Cookie::is_blank`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cookie {
    pub name: String,
    pub value: String,
}

impl Cookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// True when either the trimmed name or the trimmed value is empty.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() || self.value.trim().is_empty()
    }
}

impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected name=value, got {0:?}")]
pub struct ParseCookieError(String);

/// Parses `name=value`, splitting on the first `=` so values may contain `=`.
impl FromStr for Cookie {
    type Err = ParseCookieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = s
            .split_once('=')
            .ok_or_else(|| ParseCookieError(s.to_string()))?;
        Ok(Cookie::new(name, value))
    }
}

/// Saved brand/tld/cookies/destination configuration, stored under a
/// user-chosen name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preset {
    pub brand: String,
    pub tld: String,
    #[serde(default)]
    pub cookies: Vec<Cookie>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

impl Preset {
    /// `brand.tld`, as shown in listings.
    pub fn host_label(&self) -> String {
        format!("{}.{}", self.brand, self.tld)
    }
}

/// One generated URL, kept newest-first in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub url: String,
    /// Unix epoch milliseconds.
    pub timestamp: i64,
    pub brand: String,
    pub tld: String,
}

/// Current time as Unix epoch milliseconds (for history timestamps).
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_parses_on_first_equals() {
        let c: Cookie = "token=abc=def".parse().unwrap();
        assert_eq!(c, Cookie::new("token", "abc=def"));

        let empty: Cookie = "flag=".parse().unwrap();
        assert_eq!(empty, Cookie::new("flag", ""));
    }

    #[test]
    fn cookie_without_equals_is_rejected() {
        assert!("novalue".parse::<Cookie>().is_err());
    }

    #[test]
    fn blank_cookies() {
        assert!(Cookie::new("", "v").is_blank());
        assert!(Cookie::new("n", "  ").is_blank());
        assert!(!Cookie::new(" n ", " v ").is_blank());
    }

    #[test]
    fn preset_json_omits_missing_destination() {
        let preset = Preset {
            brand: "acme".to_string(),
            tld: "com".to_string(),
            cookies: vec![Cookie::new("a", "b")],
            destination: None,
        };
        let json = serde_json::to_string(&preset).unwrap();
        assert_eq!(
            json,
            r#"{"brand":"acme","tld":"com","cookies":[{"name":"a","value":"b"}]}"#
        );
        let back: Preset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, preset);
    }

    #[test]
    fn now_millis_is_after_2020() {
        assert!(now_millis() > 1_577_836_800_000);
    }
}
