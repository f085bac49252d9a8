//! Validation in front of the encoder: brand required, blank cookies dropped.
//!
//! The encoder itself accepts anything with at least one cookie. Interactive
//! callers go through [`generate`] so half-filled rows and a missing brand are
//! reported as user errors instead of producing a meaningless URL.

use crate::cookie_url::{self, EncodeError};
use crate::types::{Cookie, HistoryEntry, Preset};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("please select a brand")]
    MissingBrand,
    #[error("please add at least one cookie with name and value")]
    NoCookies,
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// A successfully generated URL together with the inputs that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub url: String,
    pub brand: String,
    pub tld: String,
    /// Cookies that survived blank filtering, in input order.
    pub cookies: Vec<Cookie>,
    pub destination: Option<String>,
}

impl Generated {
    pub fn history_entry(&self, timestamp: i64) -> HistoryEntry {
        HistoryEntry {
            url: self.url.clone(),
            timestamp,
            brand: self.brand.clone(),
            tld: self.tld.clone(),
        }
    }

    /// The unencoded payload for this URL (for display/debugging).
    pub fn payload(&self) -> Result<String, EncodeError> {
        cookie_url::build_payload(&self.cookies, self.destination.as_deref())
    }
}

/// Returns `preset` with blank cookies removed and a blank destination cleared.
/// Brand and tld are passed through untouched.
pub fn normalize(preset: &Preset) -> Preset {
    Preset {
        brand: preset.brand.clone(),
        tld: preset.tld.clone(),
        cookies: preset
            .cookies
            .iter()
            .filter(|c| !c.is_blank())
            .cloned()
            .collect(),
        destination: preset
            .destination
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .map(str::to_string),
    }
}

/// Validates and encodes a preset-shaped request.
pub fn generate(preset: &Preset) -> Result<Generated, GenerateError> {
    let preset = normalize(preset);
    if preset.brand.trim().is_empty() {
        return Err(GenerateError::MissingBrand);
    }
    if preset.cookies.is_empty() {
        return Err(GenerateError::NoCookies);
    }

    let url = cookie_url::encode(
        &preset.brand,
        &preset.tld,
        &preset.cookies,
        preset.destination.as_deref(),
    )?;
    tracing::debug!(
        brand = %preset.brand,
        tld = %preset.tld,
        cookies = preset.cookies.len(),
        has_destination = preset.destination.is_some(),
        "generated cookie url"
    );

    Ok(Generated {
        url,
        brand: preset.brand,
        tld: preset.tld,
        cookies: preset.cookies,
        destination: preset.destination,
    })
}
