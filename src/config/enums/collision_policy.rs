use serde::{Deserialize, Serialize};

/// How a keyed store treats two distinct keys that produce the same sort key.
#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum CollisionPolicy {
    /// Sort key is the bucket number; keys are never compared byte by byte.
    reference,
    /// Sort key is the full 64-bit hash; colliding keys share an overflow chain.
    #[default]
    chained,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_policy_default() {
        assert_eq!(CollisionPolicy::default(), CollisionPolicy::chained);
    }

    #[test]
    fn test_collision_policy_serialization() {
        assert_eq!(serde_json::to_string(&CollisionPolicy::reference).unwrap(), "\"reference\"");
        assert_eq!(serde_json::to_string(&CollisionPolicy::chained).unwrap(), "\"chained\"");
    }

    #[test]
    fn test_collision_policy_deserialization() {
        let policy: CollisionPolicy = serde_json::from_str("\"reference\"").unwrap();
        assert_eq!(policy, CollisionPolicy::reference);
        let policy: CollisionPolicy = serde_json::from_str("\"chained\"").unwrap();
        assert_eq!(policy, CollisionPolicy::chained);
        assert!(serde_json::from_str::<CollisionPolicy>("\"linear\"").is_err());
    }

    #[test]
    fn test_collision_policy_debug() {
        assert_eq!(format!("{:?}", CollisionPolicy::reference), "reference");
    }
}
