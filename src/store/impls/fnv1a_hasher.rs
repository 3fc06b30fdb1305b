use crate::store::structs::fnv1a_hasher::Fnv1aHasher;
use crate::store::traits::key_hasher::KeyHasher;

pub const FNV_OFFSET: u64 = 14695981039346656037;
pub const FNV_PRIME: u64 = 1099511628211;

impl KeyHasher for Fnv1aHasher {
    #[inline]
    fn hash_key(&self, key: &[u8]) -> u64 {
        key.iter().fold(FNV_OFFSET, |hash, &byte| (hash ^ byte as u64).wrapping_mul(FNV_PRIME))
    }
}
