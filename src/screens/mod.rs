//! Per-screen state machines, kept free of terminal and network types so
//! each can be driven directly in tests. The widgets in `tui::widgets` are
//! thin read-only adapters over these.

pub mod amal;
pub mod dhikr;
pub mod dua;
pub mod hadith;
pub mod home;

pub use amal::AmalScreen;
pub use dhikr::DhikrScreen;
pub use dua::DuaScreen;
pub use hadith::{ExplainRequest, HadithScreen};
pub use home::{HomeScreen, Sky, VerseState};
