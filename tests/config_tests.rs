//! Tests for the type-safe configuration builder and environment overrides

use kodegen_tools_tablescrape::config::env::{ENV_HEADLESS, ENV_NAVIGATION, ENV_OUTPUT};
use kodegen_tools_tablescrape::{NavigationMode, ScrapeConfig, TableScrapeError};
use std::collections::HashMap;
use std::path::Path;

#[test]
fn test_builder_requires_start_url() {
    // This should not compile if uncommented - start_url is required
    // let config = ScrapeConfig::builder().build();

    let config = ScrapeConfig::builder()
        .start_url("https://example.com/stats")
        .build()
        .unwrap();

    assert_eq!(config.start_url(), "https://example.com/stats");
}

#[test]
fn test_builder_optional_fields_have_defaults() {
    let config = ScrapeConfig::builder()
        .start_url("https://example.com")
        .build()
        .unwrap();

    assert_eq!(config.output_path(), Path::new("output_tables.xlsx"));
    assert_eq!(config.navigation_mode(), NavigationMode::Confirm);
    assert!(!config.headless());
    assert_eq!(config.page_load_timeout_secs(), 30);
    assert_eq!(config.render_wait_secs(), 10);
    assert!(config.include_index());
    assert_eq!(config.sheet_prefix(), "sheet");
    assert!(config.chrome_data_dir().is_none());
}

#[test]
fn test_builder_with_all_optional_fields() {
    let config = ScrapeConfig::builder()
        .output_path("out/report.xlsx")
        .navigation_mode(NavigationMode::Auto)
        .start_url("http://localhost:8080/t")
        .headless(true)
        .page_load_timeout_secs(5)
        .render_wait_secs(0)
        .include_index(false)
        .sheet_prefix("table")
        .chrome_data_dir(Some("/tmp/profile".into()))
        .build()
        .unwrap();

    assert_eq!(config.output_path(), Path::new("out/report.xlsx"));
    assert_eq!(config.navigation_mode(), NavigationMode::Auto);
    assert!(config.headless());
    assert_eq!(config.page_load_timeout_secs(), 5);
    assert_eq!(config.render_wait_secs(), 0);
    assert!(!config.include_index());
    assert_eq!(config.sheet_prefix(), "table");
    assert_eq!(
        config.chrome_data_dir().map(|p| p.as_path()),
        Some(Path::new("/tmp/profile"))
    );
}

#[test]
fn test_url_without_scheme_is_normalized() {
    let config = ScrapeConfig::builder()
        .start_url("  en.wikipedia.org/wiki/List_of_countries ")
        .build()
        .unwrap();

    assert_eq!(
        config.start_url(),
        "https://en.wikipedia.org/wiki/List_of_countries"
    );
}

#[test]
fn test_invalid_urls_are_rejected() {
    for url in ["", "   ", "ftp://example.com/data", "file:///etc/passwd"] {
        let err = ScrapeConfig::builder().start_url(url).build().unwrap_err();
        assert!(
            matches!(err, TableScrapeError::InvalidUrl(_)),
            "{url:?} gave {err:?}"
        );
        assert!(err.is_input_error());
    }
}

#[test]
fn test_invalid_options_are_rejected() {
    let zero_timeout = ScrapeConfig::builder()
        .start_url("https://example.com")
        .page_load_timeout_secs(0)
        .build();
    assert!(matches!(zero_timeout, Err(TableScrapeError::Config(_))));

    let empty_output = ScrapeConfig::builder()
        .start_url("https://example.com")
        .output_path("")
        .build();
    assert!(matches!(empty_output, Err(TableScrapeError::Config(_))));

    for prefix in ["", "a/b", "data[1]", "this prefix is far too long"] {
        let result = ScrapeConfig::builder()
            .start_url("https://example.com")
            .sheet_prefix(prefix)
            .build();
        assert!(
            matches!(result, Err(TableScrapeError::Config(_))),
            "prefix {prefix:?} was accepted"
        );
    }
}

#[test]
fn test_navigation_mode_parsing() {
    assert_eq!("auto".parse::<NavigationMode>().unwrap(), NavigationMode::Auto);
    assert_eq!(" Confirm ".parse::<NavigationMode>().unwrap(), NavigationMode::Confirm);
    assert_eq!("manual".parse::<NavigationMode>().unwrap(), NavigationMode::Confirm);
    assert!("sometimes".parse::<NavigationMode>().is_err());
}

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_env_overrides() {
    let config = ScrapeConfig::from_lookup(
        "example.com",
        lookup(&[
            (ENV_NAVIGATION, "auto"),
            (ENV_OUTPUT, " tables.xlsx "),
            (ENV_HEADLESS, "yes"),
        ]),
    )
    .unwrap();

    assert_eq!(config.start_url(), "https://example.com");
    assert_eq!(config.navigation_mode(), NavigationMode::Auto);
    assert_eq!(config.output_path(), Path::new("tables.xlsx"));
    assert!(config.headless());
}

#[test]
fn test_env_blank_values_keep_defaults() {
    let config = ScrapeConfig::from_lookup(
        "https://example.com",
        lookup(&[(ENV_NAVIGATION, ""), (ENV_OUTPUT, "  "), (ENV_HEADLESS, "")]),
    )
    .unwrap();

    assert_eq!(config.navigation_mode(), NavigationMode::Confirm);
    assert_eq!(config.output_path(), Path::new("output_tables.xlsx"));
    assert!(!config.headless());
}

#[test]
fn test_env_bad_values_are_errors() {
    let bad_flag =
        ScrapeConfig::from_lookup("https://example.com", lookup(&[(ENV_HEADLESS, "maybe")]));
    assert!(matches!(bad_flag, Err(TableScrapeError::Config(_))));

    let bad_mode =
        ScrapeConfig::from_lookup("https://example.com", lookup(&[(ENV_NAVIGATION, "fast")]));
    assert!(matches!(bad_mode, Err(TableScrapeError::Config(_))));
}

#[test]
fn test_config_serializes() {
    let config = ScrapeConfig::builder()
        .start_url("https://example.com")
        .navigation_mode(NavigationMode::Auto)
        .build()
        .unwrap();

    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["navigation_mode"], "auto");
    assert_eq!(json["start_url"], "https://example.com");

    let back: ScrapeConfig = serde_json::from_value(json).unwrap();
    assert_eq!(back.navigation_mode(), NavigationMode::Auto);
}
