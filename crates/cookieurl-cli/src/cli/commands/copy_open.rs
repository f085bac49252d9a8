//! `cookieurl copy <url>` / `cookieurl open <url>`.

use anyhow::Result;
use cookieurl_core::config::CookieUrlConfig;

use crate::cli::desktop;

pub fn run_copy(cfg: &CookieUrlConfig, url: &str) -> Result<()> {
    desktop::copy_to_clipboard(&cfg.clipboard_command, url)?;
    println!("Copied to clipboard");
    Ok(())
}

pub fn run_open(cfg: &CookieUrlConfig, url: &str) -> Result<()> {
    desktop::open_in_browser(&cfg.browser_command, url)
}
