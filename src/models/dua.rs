use serde::{Deserialize, Serialize};

/// A dua library category tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuaCategory {
    pub id: String,
    pub name: String,
    pub icon: String,
}

impl DuaCategory {
    pub fn new(id: &str, name: &str, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
        }
    }
}
