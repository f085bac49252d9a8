//! Cookie-setting URL encoder.
//!
//! Produces `https://www.{brand}.{tld}/global/cookie/set/{payload}` where the
//! payload is `c=` followed by comma-separated `n={name}&v={value}` pairs and,
//! when a destination is given, `|d={base64(destination)}`. The whole payload
//! is percent-encoded as a single path segment.

mod error;
mod payload;

pub use error::EncodeError;
pub use payload::build_payload;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::types::Cookie;

/// Characters left unescaped in the payload: the same set a browser's
/// `encodeURIComponent` keeps (`A-Z a-z 0-9 - _ . ! ~ * ' ( )`).
const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Fixed path on the brand host that accepts the encoded payload.
const COOKIE_SET_PATH: &str = "/global/cookie/set/";

/// Encodes cookies and an optional destination into a cookie-setting URL.
///
/// `brand` and `tld` are inserted as-is into the host name. `destination` is
/// trimmed and dropped when blank. Fails only when `cookies` is empty.
///
/// # Examples
///
/// - `encode("acme", "com", &[Cookie::new("a", "b")], None)` →
///   `"https://www.acme.com/global/cookie/set/c%3Dn%3Da%26v%3Db"`
pub fn encode(
    brand: &str,
    tld: &str,
    cookies: &[Cookie],
    destination: Option<&str>,
) -> Result<String, EncodeError> {
    let payload = build_payload(cookies, destination)?;
    let encoded = utf8_percent_encode(&payload, COMPONENT_ENCODE_SET);
    Ok(format!("https://www.{brand}.{tld}{COOKIE_SET_PATH}{encoded}"))
}
