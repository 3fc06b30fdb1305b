/// 64-bit FNV-1a over every key byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fnv1aHasher;
