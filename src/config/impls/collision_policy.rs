use crate::config::enums::collision_policy::CollisionPolicy;

impl CollisionPolicy {
    pub fn is_reference(&self) -> bool {
        matches!(self, CollisionPolicy::reference)
    }

    pub fn is_chained(&self) -> bool {
        matches!(self, CollisionPolicy::chained)
    }
}
