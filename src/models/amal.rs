use serde::{Deserialize, Serialize};

/// A daily deed on the amal checklist.
///
/// `completed` is the only mutable field; `id` is the stable identity used
/// for toggling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmalItem {
    pub id: String,
    pub title: String,
    pub completed: bool,
    /// Time-of-day label, e.g. "After Fajr".
    pub time: String,
}

impl AmalItem {
    pub fn new(id: &str, title: &str, completed: bool, time: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            completed,
            time: time.to_string(),
        }
    }
}
