use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnnounceEvent {
    #[default]
    Started = 0,
    Completed = 1,
    Stopped = 2,
}
