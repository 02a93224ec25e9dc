//! Tests for CLI parsing, URL file input and JSON Lines output.

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use steam_products::export::{open_output, write_jsonl};
use steam_products::{read_urls, Config, LogFormat, LogLevel, Product};
use tempfile::{NamedTempFile, TempDir};

/// Helper function to write lines to a temporary file
fn write_lines_to_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write line");
    }
    file.flush().expect("Failed to flush file");
    file
}

#[test]
fn test_cli_full_options() {
    let config = Config::try_parse_from([
        "steam_products",
        "urls.txt",
        "--output",
        "products.jsonl",
        "--interval",
        "3",
        "--offset",
        "1",
        "--workers",
        "4",
        "--timeout",
        "20",
        "--date-format",
        "%Y/%m/%d",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ])
    .expect("Should parse all options");

    assert_eq!(config.file, Some(PathBuf::from("urls.txt")));
    assert_eq!(config.output, Some(PathBuf::from("products.jsonl")));
    assert_eq!(config.interval_secs, 3);
    assert_eq!(config.offset_secs, 1);
    assert_eq!(config.workers, 4);
    assert_eq!(config.timeout_seconds, 20);
    assert_eq!(config.extra_date_formats, vec!["%Y/%m/%d"]);
    // LogLevel and LogFormat don't implement PartialEq, so compare via conversion
    assert_eq!(
        log::LevelFilter::from(config.log_level.clone()),
        log::LevelFilter::from(LogLevel::Debug)
    );
    assert!(matches!(config.log_format, LogFormat::Json));
}

#[test]
fn test_cli_file_and_search_pages_conflict() {
    let result =
        Config::try_parse_from(["steam_products", "urls.txt", "--search-pages", "2"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_rejects_unknown_log_level() {
    let result = Config::try_parse_from(["steam_products", "urls.txt", "--log-level", "loud"]);
    assert!(result.is_err());
}

#[tokio::test]
async fn test_read_urls_from_file() {
    let file = write_lines_to_file(&[
        "# Steam wishlist",
        "https://store.steampowered.com/app/812140/Assassins_Creed_Odyssey/",
        "",
        "   https://store.steampowered.com/app/570/Dota_2/   ",
        "# https://store.steampowered.com/app/10/",
    ]);

    let urls = read_urls(file.path()).await.unwrap();
    assert_eq!(
        urls,
        vec![
            "https://store.steampowered.com/app/812140/Assassins_Creed_Odyssey/",
            "https://store.steampowered.com/app/570/Dota_2/"
        ]
    );
}

#[test]
fn test_write_jsonl_to_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("products.jsonl");

    let products = vec![
        Product {
            id: 812140,
            app_name: "Assassin's Creed® Odyssey".to_string(),
            genres: vec!["Action".to_string(), "RPG".to_string()],
            ..Default::default()
        },
        Product {
            id: 570,
            app_name: "Dota 2".to_string(),
            ..Default::default()
        },
    ];

    let writer = open_output(Some(output_path.as_path())).unwrap();
    assert_eq!(write_jsonl(&products, writer).unwrap(), 2);

    let content = std::fs::read_to_string(&output_path).unwrap();
    let records: Vec<Product> = content
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(records, products);
}

#[test]
fn test_open_output_in_missing_directory_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("missing").join("products.jsonl");
    assert!(open_output(Some(output_path.as_path())).is_err());
}
