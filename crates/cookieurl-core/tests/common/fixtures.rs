//! Shared presets and a temp-dir-backed store for integration tests.

use cookieurl_core::{Cookie, Preset, Store};
use tempfile::TempDir;

/// Store living in its own temp dir; the dir is removed on drop.
pub struct TempStore {
    pub store: Store,
    _dir: TempDir,
}

pub fn temp_store() -> TempStore {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = Store::open_at(dir.path().join("state").join("store.json"));
    TempStore { store, _dir: dir }
}

pub fn uk_preset() -> Preset {
    Preset {
        brand: "acme".to_string(),
        tld: "co.uk".to_string(),
        cookies: vec![
            Cookie::new("lang", "en-GB"),
            Cookie::new("", ""),
            Cookie::new("currency", "GBP"),
        ],
        destination: Some("  https://www.acme.co.uk/sale?ref=mail  ".to_string()),
    }
}
