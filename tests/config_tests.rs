mod common;

use std::fs;
use tempfile::TempDir;
use torrust_memstore::config::enums::collision_policy::CollisionPolicy;
use torrust_memstore::config::enums::configuration_error::ConfigurationError;
use torrust_memstore::config::structs::configuration::Configuration;

#[test]
fn test_config_default_values() {
    let config = common::create_test_config();
    assert_eq!(config.store.peers_capacity, 128);
    assert_eq!(config.store.torrents_capacity, 128);
    assert!(config.store.growth_enabled);
    assert_eq!(config.store.collision_policy, CollisionPolicy::chained);
}

#[test]
fn test_config_toml_loading() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let config_content = r#"
log_level = "warn"
log_console_interval = 10

[store]
peers_capacity = 256
torrents_capacity = 64
growth_enabled = true
max_capacity = 1024
collision_policy = "reference"
"#;

    fs::write(&config_path, config_content).unwrap();
    let config = Configuration::load_file(&config_path).unwrap();
    assert_eq!(config.log_level, "warn");
    assert_eq!(config.log_console_interval, Some(10));
    assert_eq!(config.store.peers_capacity, 256);
    assert_eq!(config.store.torrents_capacity, 64);
    assert_eq!(config.store.max_capacity, Some(1024));
    assert_eq!(config.store.collision_policy, CollisionPolicy::reference);
}

#[test]
fn test_config_corrupt_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "log_level = [").unwrap();
    assert!(matches!(Configuration::load_file(&config_path), Err(ConfigurationError::ParseError(_))));
}

#[test]
fn test_config_save_and_reload() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("saved.toml");
    let mut config = Configuration::init();
    config.store.growth_enabled = false;
    Configuration::save_file(&config_path, toml::to_string(&config).unwrap()).unwrap();
    assert_eq!(Configuration::load_file(&config_path).unwrap(), config);
}

#[test]
fn test_load_from_file_missing_without_create() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("absent.toml");
    assert!(matches!(Configuration::load_from_file(&config_path, false), Err(ConfigurationError::IOError(_))));
    assert!(!config_path.exists(), "Nothing should be written without create");
}

#[test]
fn test_load_from_file_creates_default() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let config = Configuration::load_from_file(&config_path, true).unwrap();
    assert_eq!(config, Configuration::init());
    assert!(config_path.exists(), "Default config should be written");
    assert_eq!(Configuration::load_file(&config_path).unwrap(), config);
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let mut config = Configuration::init();
    config.store.peers_capacity = 0;
    Configuration::save_file(&config_path, toml::to_string(&config).unwrap()).unwrap();
    assert!(matches!(
        Configuration::load_from_file(&config_path, true),
        Err(ConfigurationError::ValidationError(_))
    ));
}
