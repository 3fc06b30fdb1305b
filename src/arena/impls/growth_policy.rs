use crate::arena::enums::growth_policy::GrowthPolicy;
use crate::arena::impls::arena::MAX_SLOTS;

impl GrowthPolicy {
    /// Capacity to grow to from `current`, or `None` when no growth is allowed.
    pub fn next_capacity(&self, current: usize) -> Option<usize> {
        match self {
            GrowthPolicy::Fixed => None,
            GrowthPolicy::Doubling { max_capacity } => {
                let limit = max_capacity.unwrap_or(MAX_SLOTS).min(MAX_SLOTS);
                let target = current.saturating_mul(2).max(1).min(limit);
                (target > current).then_some(target)
            }
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, GrowthPolicy::Fixed)
    }
}
