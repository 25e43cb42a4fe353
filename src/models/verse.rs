use serde::{Deserialize, Serialize};

/// Verse of the day, as returned by the Gemini structured-output call.
///
/// Ephemeral: fetched once per Home-screen mount and never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub arabic: String,
    pub translation: String,
    pub reference: String,
}
