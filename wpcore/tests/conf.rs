use std::path::PathBuf;

use wpcore::{CalcError, CalculatorConfig, magic::CONFIG_FILE_NAME};
use wpformal::locale::Locale;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("wpcore-{}-{name}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn defaults_match_input_limits() {
    let config = CalculatorConfig::default();
    assert_eq!(config.locale, Locale::English);
    assert_eq!(config.max_postcondition_len, 500);
    assert_eq!(config.max_program_len, 2000);
    assert_eq!(config.render_width, None);
}

#[test]
fn save_then_load() {
    let dir = scratch_dir("roundtrip");
    let path = dir.join("nested").join(CONFIG_FILE_NAME);

    let config = CalculatorConfig {
        locale: Locale::Russian,
        max_depth: 8,
        render_width: Some(100),
        ..Default::default()
    };
    config.save_to_toml(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("locale = \"ru\""));

    assert_eq!(CalculatorConfig::load_from_toml(&path).unwrap(), config);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_keys_take_defaults() {
    let dir = scratch_dir("partial");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(CONFIG_FILE_NAME);
    std::fs::write(&path, "locale = \"ru\"\n").unwrap();

    let config = CalculatorConfig::load_from_toml(&path).unwrap();
    assert_eq!(config.locale, Locale::Russian);
    assert_eq!(config.max_program_len, 2000);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_file_means_defaults() {
    let path = scratch_dir("missing").join(CONFIG_FILE_NAME);
    assert_eq!(
        CalculatorConfig::load_or_default(&path).unwrap(),
        CalculatorConfig::default()
    );
    assert!(matches!(
        CalculatorConfig::load_from_toml(&path),
        Err(CalcError::IoError(_))
    ));
}

#[test]
fn malformed_file_is_reported() {
    let dir = scratch_dir("malformed");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(CONFIG_FILE_NAME);
    std::fs::write(&path, "locale = \"fr\"\n").unwrap();

    let err = CalculatorConfig::load_or_default(&path).unwrap_err();
    assert!(matches!(err, CalcError::ConfigParseError { .. }));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn default_path_ends_in_config_file() {
    let path = CalculatorConfig::default_path();
    if std::env::var_os(wpcore::magic::ENV_CONFIG_PATH).is_none() {
        assert!(path.ends_with(PathBuf::from("wpcalc").join(CONFIG_FILE_NAME)));
    }
}
