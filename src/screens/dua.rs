use crate::content;
use crate::models::DuaCategory;

/// Dua library. Purely presentational: the lists are static and no key
/// mutates anything here.
pub struct DuaScreen {
    pub categories: Vec<DuaCategory>,
    pub saved: Vec<String>,
}

impl DuaScreen {
    pub fn new() -> Self {
        Self {
            categories: content::dua_categories(),
            saved: content::saved_duas(),
        }
    }
}
