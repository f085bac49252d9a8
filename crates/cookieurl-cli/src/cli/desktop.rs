//! Clipboard and browser actions via configured external commands.

use anyhow::{ensure, Context, Result};
use std::io::Write;
use std::process::{Command, Stdio};

fn split_command(command: &[String], what: &str) -> Result<(String, Vec<String>)> {
    let (program, args) = command
        .split_first()
        .with_context(|| format!("{what} command is empty; set it in config.toml"))?;
    Ok((program.clone(), args.to_vec()))
}

/// Pipe `text` into the clipboard command's stdin.
pub fn copy_to_clipboard(command: &[String], text: &str) -> Result<()> {
    let (program, args) = split_command(command, "clipboard")?;
    let mut child = Command::new(&program)
        .args(&args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .spawn()
        .with_context(|| format!("spawn clipboard command: {program}"))?;
    {
        let mut stdin = child.stdin.take().context("clipboard command stdin")?;
        stdin
            .write_all(text.as_bytes())
            .with_context(|| format!("write to clipboard command: {program}"))?;
    }
    let status = child
        .wait()
        .with_context(|| format!("wait for clipboard command: {program}"))?;
    ensure!(status.success(), "clipboard command {program} failed: {status}");
    tracing::debug!(program = %program, "copied url to clipboard");
    Ok(())
}

/// Run the browser command with `url` appended as the last argument.
pub fn open_in_browser(command: &[String], url: &str) -> Result<()> {
    let (program, args) = split_command(command, "browser")?;
    let status = Command::new(&program)
        .args(&args)
        .arg(url)
        .status()
        .with_context(|| format!("run browser command: {program}"))?;
    ensure!(status.success(), "browser command {program} failed: {status}");
    tracing::debug!(program = %program, "opened url in browser");
    Ok(())
}
