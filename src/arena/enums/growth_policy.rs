use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
pub enum GrowthPolicy {
    /// Never grow; an empty free stack means `ResourceExhausted`.
    Fixed,
    /// Double the capacity, never beyond `max_capacity` when set.
    Doubling { max_capacity: Option<usize> },
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        GrowthPolicy::Doubling { max_capacity: None }
    }
}
