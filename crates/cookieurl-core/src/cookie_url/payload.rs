//! Unencoded payload: `c=n=<name>&v=<value>,...` plus an optional `|d=<base64>`.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use super::EncodeError;
use crate::types::Cookie;

/// Bytes fed to base64 for the destination.
///
/// When every char is at most U+00FF the string is taken as Latin-1, one byte
/// per char, as a browser's `btoa` does. Anything wider is encoded as UTF-8.
fn destination_bytes(dest: &str) -> Vec<u8> {
    if dest.chars().all(|c| u32::from(c) <= 0xFF) {
        dest.chars().map(|c| u32::from(c) as u8).collect()
    } else {
        dest.as_bytes().to_vec()
    }
}

/// Builds the payload string before percent-encoding.
///
/// Names and values are inserted verbatim. A name or value containing `,`,
/// `&`, `=` or `|` makes the payload ambiguous for the receiving side; callers
/// own that.
pub fn build_payload(cookies: &[Cookie], destination: Option<&str>) -> Result<String, EncodeError> {
    if cookies.is_empty() {
        return Err(EncodeError::InvalidInput(
            "at least one cookie (name and value) is required".to_string(),
        ));
    }

    let segments: Vec<String> = cookies
        .iter()
        .map(|c| format!("n={}&v={}", c.name, c.value))
        .collect();
    let mut payload = format!("c={}", segments.join(","));

    if let Some(dest) = destination.map(str::trim).filter(|d| !d.is_empty()) {
        payload.push_str("|d=");
        payload.push_str(&BASE64.encode(destination_bytes(dest)));
    }

    Ok(payload)
}
