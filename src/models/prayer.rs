use serde::{Deserialize, Serialize};

/// A single entry of the prayer-time strip.
///
/// Times are fixed display strings and `active` is stored data — nothing
/// here is derived from the wall clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerTime {
    pub name: String,
    pub time: String,
    pub active: bool,
}

impl PrayerTime {
    pub fn new(name: &str, time: &str, active: bool) -> Self {
        Self {
            name: name.to_string(),
            time: time.to_string(),
            active,
        }
    }
}
