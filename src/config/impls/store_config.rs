use crate::arena::enums::growth_policy::GrowthPolicy;
use crate::config::enums::collision_policy::CollisionPolicy;
use crate::config::structs::store_config::StoreConfig;

pub const DEFAULT_CAPACITY: usize = 128;

impl StoreConfig {
    pub fn growth_policy(&self) -> GrowthPolicy {
        match self.growth_enabled {
            true => GrowthPolicy::Doubling { max_capacity: self.max_capacity },
            false => GrowthPolicy::Fixed,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            peers_capacity: DEFAULT_CAPACITY,
            torrents_capacity: DEFAULT_CAPACITY,
            growth_enabled: true,
            max_capacity: None,
            collision_policy: CollisionPolicy::default(),
        }
    }
}
