use serde::{Deserialize, Serialize};
use crate::config::structs::store_config::StoreConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: Option<u64>,
    #[serde(default)]
    pub store: StoreConfig,
}
