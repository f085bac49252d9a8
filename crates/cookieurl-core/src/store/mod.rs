//! Preset and history store (JSON file under the XDG state dir).
//!
//! The store is a plain value created at startup and handed to whoever needs
//! it; there is no global handle. Each operation reads the document, applies
//! the change and writes it back, so nothing is cached between calls.

mod document;

pub use document::{StoreDocument, HISTORY_LIMIT};

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::types::{HistoryEntry, Preset};

/// Handle to the JSON-backed preset/history store.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Default path for the store file: `~/.local/state/cookieurl/store.json`.
    pub fn default_path() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("cookieurl")?;
        Ok(xdg_dirs.get_state_home().join("cookieurl").join("store.json"))
    }

    /// Open the store at the default location. The file is created lazily on
    /// the first write.
    pub fn open_default() -> Result<Self> {
        Ok(Self::open_at(Self::default_path()?))
    }

    /// Open the store at a specific path (tests, `--store`).
    pub fn open_at(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        tracing::debug!(path = %path.display(), "opened store");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole document. A missing file reads as empty.
    pub async fn load(&self) -> Result<StoreDocument> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(StoreDocument::default())
            }
            Err(e) => {
                return Err(e).with_context(|| format!("read store: {}", self.path.display()))
            }
        };
        serde_json::from_slice(&bytes)
            .with_context(|| format!("parse store: {}", self.path.display()))
    }

    /// Write the document via a sibling temp file and rename.
    async fn save(&self, doc: &StoreDocument) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        let json = serde_json::to_vec_pretty(doc).context("serialize store")?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json)
            .await
            .with_context(|| format!("write store: {}", tmp.display()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .with_context(|| format!("replace store: {}", self.path.display()))?;
        Ok(())
    }

    async fn update(&self, apply: impl FnOnce(&mut StoreDocument)) -> Result<()> {
        let mut doc = self.load().await?;
        apply(&mut doc);
        self.save(&doc).await
    }

    pub async fn get_preset(&self, name: &str) -> Result<Option<Preset>> {
        Ok(self.load().await?.presets.remove(name))
    }

    /// Create or overwrite the preset called `name`.
    pub async fn set_preset(&self, name: &str, preset: Preset) -> Result<()> {
        self.update(|doc| {
            doc.presets.insert(name.to_string(), preset);
        })
        .await?;
        tracing::info!(name, "saved preset");
        Ok(())
    }

    /// Remove the preset called `name`. Removing an unknown name is a no-op.
    pub async fn delete_preset(&self, name: &str) -> Result<()> {
        let mut existed = false;
        self.update(|doc| existed = doc.presets.remove(name).is_some())
            .await?;
        tracing::info!(name, existed, "deleted preset");
        Ok(())
    }

    /// All presets, ordered by name.
    pub async fn list_presets(&self) -> Result<BTreeMap<String, Preset>> {
        Ok(self.load().await?.presets)
    }

    /// Prepend `entry`, keeping at most [`HISTORY_LIMIT`] entries.
    pub async fn append_history(&self, entry: HistoryEntry) -> Result<()> {
        self.update(|doc| doc.push_history(entry)).await
    }

    /// History entries, newest first.
    pub async fn list_history(&self) -> Result<Vec<HistoryEntry>> {
        Ok(self.load().await?.history)
    }

    pub async fn clear_history(&self) -> Result<()> {
        self.update(|doc| doc.history.clear()).await?;
        tracing::info!("cleared history");
        Ok(())
    }
}
