use std::fs::File;
use std::io::Write;
use std::path::Path;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::store_config::StoreConfig;

pub const LOG_LEVELS: [&str; 6] = ["off", "trace", "debug", "info", "warn", "error"];

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: Some(60),
            store: StoreConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => Ok(cfg),
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file<P: AsRef<Path>>(path: P, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    /// Loads and validates `path`.
    ///
    /// When the file is missing or unreadable and `create` is set, a default
    /// configuration is written there and returned instead.
    pub fn load_from_file<P: AsRef<Path>>(path: P, create: bool) -> Result<Configuration, ConfigurationError> {
        let path = path.as_ref();
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path.display());
                    return Err(error);
                }
                eprintln!("Creating config file..");

                let config = Configuration::init();
                let config_toml = toml::to_string(&config).map_err(ConfigurationError::SerializeError)?;
                Configuration::save_file(path, config_toml)?;
                config
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigurationError::ValidationError(format!("unknown log level \"{}\"", self.log_level)));
        }
        let store = &self.store;
        for (name, capacity) in [("peers_capacity", store.peers_capacity), ("torrents_capacity", store.torrents_capacity)] {
            if capacity == 0 {
                return Err(ConfigurationError::ValidationError(format!("[STORE] {name} must be greater than zero")));
            }
            if store.max_capacity.is_some_and(|max| max < capacity) {
                return Err(ConfigurationError::ValidationError(format!("[STORE] max_capacity is below {name} ({capacity})")));
            }
        }
        Ok(())
    }
}
