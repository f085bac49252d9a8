//! CLI for building cookie-setting URLs.

mod commands;
mod desktop;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use cookieurl_core::config::{self, CookieUrlConfig};
use cookieurl_core::{Cookie, Store};
use std::path::PathBuf;

use commands::{
    run_clear_history, run_completions, run_copy, run_delete_preset, run_generate, run_history,
    run_manpage, run_open, run_presets, run_save_preset, run_show_preset,
};

/// Top-level CLI for cookieurl.
#[derive(Debug, Parser)]
#[command(name = "cookieurl")]
#[command(about = "Build cookie-setting URLs for a brand and TLD", long_about = None)]
pub struct Cli {
    /// Use this store file instead of ~/.local/state/cookieurl/store.json.
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Brand, TLD, cookies and destination as given on the command line.
#[derive(Debug, Clone, Default, Args)]
pub struct UrlArgs {
    /// Brand, the middle label of www.<brand>.<tld>.
    #[arg(long)]
    pub brand: Option<String>,

    /// Top-level domain (defaults to the preset's, then to `default_tld` from config).
    #[arg(long)]
    pub tld: Option<String>,

    /// Cookie as NAME=VALUE; repeat for more. Replaces the preset's cookies.
    #[arg(long = "cookie", value_name = "NAME=VALUE")]
    pub cookies: Vec<Cookie>,

    /// URL to land on after the cookies are set.
    #[arg(long)]
    pub destination: Option<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Start from a saved preset; other flags override its fields.
    #[arg(long)]
    pub preset: Option<String>,

    #[command(flatten)]
    pub url: UrlArgs,

    /// Copy the URL to the clipboard.
    #[arg(long)]
    pub copy: bool,

    /// Open the URL in the browser.
    #[arg(long)]
    pub open: bool,

    /// Do not record the URL in history.
    #[arg(long)]
    pub no_history: bool,

    /// Also print the unencoded payload (to stderr).
    #[arg(long)]
    pub show_payload: bool,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Generate a cookie-setting URL and print it.
    Generate(GenerateArgs),

    /// Save (or overwrite) a named preset.
    SavePreset {
        /// Preset name.
        name: String,

        #[command(flatten)]
        url: UrlArgs,
    },

    /// List saved presets.
    Presets,

    /// Print a preset as JSON.
    ShowPreset {
        /// Preset name.
        name: String,
    },

    /// Delete a preset by name.
    DeletePreset {
        /// Preset name.
        name: String,
    },

    /// Show recently generated URLs, newest first.
    History {
        /// Show at most N entries.
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Forget all generated URLs.
    ClearHistory,

    /// Copy a URL to the clipboard.
    Copy {
        url: String,
    },

    /// Open a URL in the browser.
    Open {
        url: String,
    },

    /// Print shell completions.
    Completions {
        shell: clap_complete::Shell,
    },

    /// Print the man page (roff).
    Manpage,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            // These only need the command definition.
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Manpage => run_manpage(),
            command => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                let store = match cli.store {
                    Some(path) => Store::open_at(path),
                    None => Store::open_default()?,
                };
                command.run(&store, &cfg).await
            }
        }
    }

    async fn run(self, store: &Store, cfg: &CookieUrlConfig) -> Result<()> {
        match self {
            CliCommand::Generate(args) => run_generate(store, cfg, args).await?,
            CliCommand::SavePreset { name, url } => run_save_preset(store, cfg, &name, url).await?,
            CliCommand::Presets => run_presets(store).await?,
            CliCommand::ShowPreset { name } => run_show_preset(store, &name).await?,
            CliCommand::DeletePreset { name } => run_delete_preset(store, &name).await?,
            CliCommand::History { limit } => run_history(store, limit).await?,
            CliCommand::ClearHistory => run_clear_history(store).await?,
            CliCommand::Copy { url } => run_copy(cfg, &url)?,
            CliCommand::Open { url } => run_open(cfg, &url)?,
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Manpage => run_manpage()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
