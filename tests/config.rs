use prospector::config::Config;
use prospector::constants::{DEFAULT_BASE_URL, DEFAULT_LEAD_COUNT};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.backend.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.ui.default_tab, "product");
    assert_eq!(config.ui.icon_theme, "ascii");
    assert_eq!(config.leads.default_count, DEFAULT_LEAD_COUNT);
    assert_eq!(config.leads.export_format, "csv");
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Base URL without a scheme should fail
    config.backend.base_url = "localhost:8080".to_string();
    assert!(config.validate().is_err());

    // Reset and test an unknown tab name
    config.backend.base_url = DEFAULT_BASE_URL.to_string();
    config.ui.default_tab = "inbox".to_string();
    assert!(config.validate().is_err());

    // Reset and test an out-of-range lead count
    config.ui.default_tab = "leads".to_string();
    config.leads.default_count = 500;
    assert!(config.validate().is_err());

    // Reset and test an unknown export format
    config.leads.default_count = 10;
    config.leads.export_format = "xlsx".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("default_tab = \"product\""));
    assert!(toml_str.contains(&format!("base_url = \"{DEFAULT_BASE_URL}\"")));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[backend]
base_url = "http://10.0.0.5:9000"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.backend.base_url, "http://10.0.0.5:9000");
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.ui.default_tab, "product");
    assert_eq!(config.ui.icon_theme, "ascii");
    assert_eq!(config.leads.default_count, DEFAULT_LEAD_COUNT);
    assert_eq!(config.leads.export_format, "csv");
}

#[test]
fn test_empty_config_deserialization() {
    // Empty TOML uses all defaults
    let empty_toml = "";
    let config: Config = toml::from_str(empty_toml).unwrap();
    let default_config = Config::default();

    assert_eq!(config.backend.base_url, default_config.backend.base_url);
    assert_eq!(config.ui.default_tab, default_config.ui.default_tab);
    assert_eq!(config.leads.default_count, default_config.leads.default_count);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    // Create a temporary path that doesn't exist
    let temp_dir = std::env::temp_dir().join("prospector_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    // Ensure the directory doesn't exist initially
    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    // Generate config should create the directory structure
    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());

    // Verify the directory was created
    assert!(temp_dir.exists());
    assert!(config_path.parent().unwrap().exists());
    assert!(config_path.exists());

    // Verify the file contains expected content
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# Prospector Configuration File"));
    assert!(content.contains("default_tab = \"product\""));

    // Clean up
    let _ = fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_loading_rejects_invalid_file() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("prospector_test_bad_config");
    let _ = fs::remove_dir_all(&temp_dir);
    fs::create_dir_all(&temp_dir).unwrap();

    let config_path = temp_dir.join("config.toml");
    fs::write(&config_path, "[leads]\ndefault_count = 0\n").unwrap();

    assert!(Config::load_from_file(&config_path).is_err());

    let _ = fs::remove_dir_all(&temp_dir);
}
