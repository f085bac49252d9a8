//! Preset commands: save, list, show, delete.

use anyhow::{ensure, Context, Result};
use cookieurl_core::config::CookieUrlConfig;
use cookieurl_core::generator::normalize;
use cookieurl_core::Store;

use super::generate::warn_if_unknown;
use crate::cli::UrlArgs;

/// `cookieurl save-preset <name>` – blank cookies are dropped before saving.
pub async fn run_save_preset(
    store: &Store,
    cfg: &CookieUrlConfig,
    name: &str,
    url: UrlArgs,
) -> Result<()> {
    ensure!(!name.trim().is_empty(), "preset name must not be empty");
    let preset = normalize(&url.merge_into(None, &cfg.default_tld));
    warn_if_unknown(cfg, &preset);
    store.set_preset(name, preset).await?;
    println!("Saved preset {name:?}");
    Ok(())
}

/// `cookieurl presets` – list saved presets.
pub async fn run_presets(store: &Store) -> Result<()> {
    let presets = store.list_presets().await?;
    if presets.is_empty() {
        println!("No saved presets.");
        return Ok(());
    }
    println!("{:<20} {:<24} {:<8} {}", "NAME", "HOST", "COOKIES", "DESTINATION");
    for (name, p) in presets {
        println!(
            "{:<20} {:<24} {:<8} {}",
            name,
            p.host_label(),
            p.cookies.len(),
            p.destination.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

/// `cookieurl show-preset <name>` – print one preset as JSON.
pub async fn run_show_preset(store: &Store, name: &str) -> Result<()> {
    let preset = store
        .get_preset(name)
        .await?
        .with_context(|| format!("no preset named {name:?}"))?;
    println!("{}", serde_json::to_string_pretty(&preset)?);
    Ok(())
}

/// `cookieurl delete-preset <name>`.
pub async fn run_delete_preset(store: &Store, name: &str) -> Result<()> {
    store.delete_preset(name).await?;
    println!("Deleted preset {name:?}");
    Ok(())
}
