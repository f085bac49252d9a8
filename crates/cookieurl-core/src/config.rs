use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/cookieurl/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookieUrlConfig {
    /// TLD used when neither the command line nor a preset names one.
    #[serde(default = "default_tld")]
    pub default_tld: String,
    /// Known brands. Empty means any brand is accepted without a warning.
    #[serde(default)]
    pub brands: Vec<String>,
    /// Known TLDs. Empty means any TLD is accepted without a warning.
    #[serde(default = "default_tlds")]
    pub tlds: Vec<String>,
    /// Program and arguments that read the text to copy from stdin.
    #[serde(default = "default_clipboard_command")]
    pub clipboard_command: Vec<String>,
    /// Program and arguments that open a URL (the URL is appended last).
    #[serde(default = "default_browser_command")]
    pub browser_command: Vec<String>,
}

fn default_tld() -> String {
    "com".to_string()
}

fn default_tlds() -> Vec<String> {
    vec![default_tld()]
}

fn default_clipboard_command() -> Vec<String> {
    vec!["wl-copy".to_string()]
}

fn default_browser_command() -> Vec<String> {
    vec!["xdg-open".to_string()]
}

impl Default for CookieUrlConfig {
    fn default() -> Self {
        Self {
            default_tld: default_tld(),
            brands: Vec::new(),
            tlds: default_tlds(),
            clipboard_command: default_clipboard_command(),
            browser_command: default_browser_command(),
        }
    }
}

impl CookieUrlConfig {
    pub fn is_known_brand(&self, brand: &str) -> bool {
        self.brands.is_empty() || self.brands.iter().any(|b| b == brand)
    }

    pub fn is_known_tld(&self, tld: &str) -> bool {
        self.tlds.is_empty() || self.tlds.iter().any(|t| t == tld)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("cookieurl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CookieUrlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CookieUrlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: CookieUrlConfig = toml::from_str(&data)?;
    Ok(cfg)
}
