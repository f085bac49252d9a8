//! `cookieurl generate` – build a URL from flags and/or a preset.

use anyhow::{Context, Result};
use cookieurl_core::config::CookieUrlConfig;
use cookieurl_core::types::now_millis;
use cookieurl_core::{generate, Preset, Store};

use crate::cli::{desktop, GenerateArgs, UrlArgs};

impl UrlArgs {
    /// Overlay these flags on `base`. Any `--cookie` replaces the base list;
    /// a missing TLD falls back to `default_tld`.
    pub fn merge_into(self, base: Option<Preset>, default_tld: &str) -> Preset {
        let base = base.unwrap_or_default();
        let tld = self
            .tld
            .or_else(|| Some(base.tld).filter(|t| !t.trim().is_empty()))
            .unwrap_or_else(|| default_tld.to_string());
        Preset {
            brand: self.brand.unwrap_or(base.brand),
            tld,
            cookies: if self.cookies.is_empty() {
                base.cookies
            } else {
                self.cookies
            },
            destination: self.destination.or(base.destination),
        }
    }
}

/// Log (but accept) a brand or TLD outside the configured lists.
pub(super) fn warn_if_unknown(cfg: &CookieUrlConfig, preset: &Preset) {
    if !cfg.is_known_brand(preset.brand.trim()) {
        tracing::warn!(brand = %preset.brand, "brand is not in the configured list");
    }
    if !cfg.is_known_tld(preset.tld.trim()) {
        tracing::warn!(tld = %preset.tld, "tld is not in the configured list");
    }
}

pub async fn run_generate(store: &Store, cfg: &CookieUrlConfig, args: GenerateArgs) -> Result<()> {
    let base = match &args.preset {
        Some(name) => Some(
            store
                .get_preset(name)
                .await?
                .with_context(|| format!("no preset named {name:?}"))?,
        ),
        None => None,
    };
    let request = args.url.merge_into(base, &cfg.default_tld);
    warn_if_unknown(cfg, &request);

    let generated = generate(&request)?;
    if args.show_payload {
        eprintln!("payload: {}", generated.payload()?);
    }
    println!("{}", generated.url);

    if !args.no_history {
        store
            .append_history(generated.history_entry(now_millis()))
            .await?;
    }
    if args.copy {
        desktop::copy_to_clipboard(&cfg.clipboard_command, &generated.url)?;
        eprintln!("Copied to clipboard");
    }
    if args.open {
        desktop::open_in_browser(&cfg.browser_command, &generated.url)?;
    }
    Ok(())
}
