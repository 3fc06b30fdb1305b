use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;
use crate::tracker::enums::announce_event::AnnounceEvent;

impl fmt::Display for AnnounceEvent {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(match self {
            AnnounceEvent::Started => "started",
            AnnounceEvent::Completed => "completed",
            AnnounceEvent::Stopped => "stopped",
        })
    }
}

impl FromStr for AnnounceEvent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "started" => Ok(AnnounceEvent::Started),
            "completed" => Ok(AnnounceEvent::Completed),
            "stopped" => Ok(AnnounceEvent::Stopped),
            _ => Err(format!("unknown announce event: {s}")),
        }
    }
}
