use serde::{Deserialize, Serialize};

/// A hadith card: arabic text, translation and citation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hadith {
    pub id: i64,
    pub collection: String,
    pub arabic: String,
    pub translation: String,
    pub reference: String,
}

impl Hadith {
    pub fn new(id: i64, collection: &str, arabic: &str, translation: &str, reference: &str) -> Self {
        Self {
            id,
            collection: collection.to_string(),
            arabic: arabic.to_string(),
            translation: translation.to_string(),
            reference: reference.to_string(),
        }
    }
}
