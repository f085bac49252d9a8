//! `cookieurl history` / `cookieurl clear-history`.

use anyhow::Result;
use chrono::{DateTime, Local, Utc};
use cookieurl_core::Store;

/// Local date/time for an epoch-millis timestamp, or `-` when out of range.
fn format_timestamp(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub async fn run_history(store: &Store, limit: Option<usize>) -> Result<()> {
    let history = store.list_history().await?;
    if history.is_empty() {
        println!("No URLs generated yet.");
        return Ok(());
    }
    let shown = limit.unwrap_or(history.len());
    for entry in history.into_iter().take(shown) {
        println!(
            "{}  {}.{}\n  {}",
            format_timestamp(entry.timestamp),
            entry.brand,
            entry.tld,
            entry.url
        );
    }
    Ok(())
}

pub async fn run_clear_history(store: &Store) -> Result<()> {
    store.clear_history().await?;
    println!("History cleared");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_timestamp_has_date_and_time() {
        let s = format_timestamp(1_700_000_000_000);
        assert_eq!(s.len(), "2023-11-14 22:13:20".len());
        assert!(s.starts_with("2023-11-1"));
    }

    #[test]
    fn format_timestamp_out_of_range() {
        assert_eq!(format_timestamp(i64::MAX), "-");
    }
}
