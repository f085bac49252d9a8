//! Tests for `generate` and `save-preset` argument parsing.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use cookieurl_core::Cookie;

#[test]
fn cli_parse_generate_minimal() {
    match parse(&["cookieurl", "generate", "--brand", "acme", "--cookie", "a=b"]) {
        CliCommand::Generate(args) => {
            assert_eq!(args.url.brand.as_deref(), Some("acme"));
            assert!(args.url.tld.is_none());
            assert_eq!(args.url.cookies, vec![Cookie::new("a", "b")]);
            assert!(args.url.destination.is_none());
            assert!(args.preset.is_none());
            assert!(!args.copy && !args.open && !args.no_history && !args.show_payload);
        }
        _ => panic!("expected Generate"),
    }
}

#[test]
fn cli_parse_generate_repeated_cookies_keep_order() {
    match parse(&[
        "cookieurl",
        "generate",
        "--brand",
        "x",
        "--tld",
        "io",
        "--cookie",
        "a=1",
        "--cookie",
        "b=2=3",
        "--destination",
        " https://dest.example ",
    ]) {
        CliCommand::Generate(args) => {
            assert_eq!(args.url.tld.as_deref(), Some("io"));
            assert_eq!(
                args.url.cookies,
                vec![Cookie::new("a", "1"), Cookie::new("b", "2=3")]
            );
            assert_eq!(args.url.destination.as_deref(), Some(" https://dest.example "));
        }
        _ => panic!("expected Generate"),
    }
}

#[test]
fn cli_parse_generate_from_preset_with_flags() {
    match parse(&[
        "cookieurl",
        "generate",
        "--preset",
        "uk",
        "--copy",
        "--open",
        "--no-history",
        "--show-payload",
    ]) {
        CliCommand::Generate(args) => {
            assert_eq!(args.preset.as_deref(), Some("uk"));
            assert!(args.copy);
            assert!(args.open);
            assert!(args.no_history);
            assert!(args.show_payload);
            assert!(args.url.cookies.is_empty());
        }
        _ => panic!("expected Generate"),
    }
}

#[test]
fn cli_parse_generate_rejects_cookie_without_equals() {
    assert!(Cli::try_parse_from(["cookieurl", "generate", "--cookie", "novalue"]).is_err());
}

#[test]
fn cli_parse_save_preset() {
    match parse(&[
        "cookieurl",
        "save-preset",
        "uk sale",
        "--brand",
        "acme",
        "--tld",
        "co.uk",
        "--cookie",
        "lang=en",
    ]) {
        CliCommand::SavePreset { name, url } => {
            assert_eq!(name, "uk sale");
            assert_eq!(url.brand.as_deref(), Some("acme"));
            assert_eq!(url.tld.as_deref(), Some("co.uk"));
            assert_eq!(url.cookies, vec![Cookie::new("lang", "en")]);
        }
        _ => panic!("expected SavePreset"),
    }
}

#[test]
fn cli_parse_global_store_path() {
    let cli = Cli::try_parse_from(["cookieurl", "presets", "--store", "/tmp/s.json"]).unwrap();
    assert_eq!(cli.store.as_deref(), Some(std::path::Path::new("/tmp/s.json")));
    assert!(matches!(cli.command, CliCommand::Presets));
}
