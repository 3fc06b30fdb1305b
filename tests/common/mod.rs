#![allow(dead_code)]
use rand::RngExt;
use std::sync::Arc;
use torrust_memstore::config::structs::configuration::Configuration;
use torrust_memstore::tracker::structs::info_hash::InfoHash;
use torrust_memstore::tracker::structs::peer_id::PeerId;
use torrust_memstore::tracker::structs::tracker_store::TrackerStore;

pub type TestStore = Arc<TrackerStore>;
pub type TestConfig = Arc<Configuration>;

pub fn create_test_config() -> TestConfig {
    Arc::new(Configuration::init())
}

pub fn create_test_store() -> TestStore {
    create_test_store_with(|_| {})
}

pub fn create_test_store_with(configure: impl FnOnce(&mut Configuration)) -> TestStore {
    let mut config = Configuration::init();
    configure(&mut config);
    Arc::new(TrackerStore::new(Arc::new(config)).unwrap())
}

pub fn random_info_hash() -> InfoHash {
    let mut rng = rand::rng();
    InfoHash(rng.random())
}

pub fn random_peer_id() -> PeerId {
    let mut rng = rand::rng();
    PeerId(rng.random())
}
