use std::io::Write;

use gainerbot::error::{ConfigError, Error};
use gainerbot::infrastructure::config::settings::Config;

fn write_temp_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn load_reads_file_from_disk() {
    let file = write_temp_config(
        r#"
[exchange]
quote_assets = ["USDT"]
top_n = 3

[telegram]
menu_command = "gainers"
"#,
    );

    let config = Config::load(file.path()).unwrap();

    assert_eq!(config.exchange.quote_assets, vec!["USDT"]);
    assert_eq!(config.exchange.top_n, 3);
    assert_eq!(config.telegram.menu_command, "gainers");
}

#[test]
fn load_or_default_falls_back_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let config = Config::load_or_default(&path).unwrap();

    assert_eq!(config.exchange.top_n, 10);
    assert_eq!(config.telegram.menu_command, "binance");
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::load(dir.path().join("absent.toml"));

    assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
}

#[test]
fn config_rejects_empty_quote_assets() {
    let file = write_temp_config("[exchange]\nquote_assets = []\n");

    match Config::load(file.path()) {
        Err(Error::Config(ConfigError::MissingField {
            field: "quote_assets",
        })) => {}
        Err(err) => panic!("Expected missing quote_assets error, got {err}"),
        Ok(config) => panic!(
            "Expected empty quote assets to be rejected, got {:?}",
            config.exchange.quote_assets
        ),
    }
}

#[test]
fn config_rejects_zero_in_flight() {
    let file = write_temp_config("[exchange]\nmax_in_flight = 0\n");

    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "max_in_flight",
            ..
        }))
    ));
}

#[test]
fn config_rejects_menu_command_shadowing_start() {
    let file = write_temp_config("[telegram]\nmenu_command = \"start\"\n");

    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "menu_command",
            ..
        }))
    ));
}
