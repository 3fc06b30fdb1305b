use std::fmt::Debug;

pub trait KeyHasher: Debug + Send + Sync {
    fn hash_key(&self, key: &[u8]) -> u64;
}
