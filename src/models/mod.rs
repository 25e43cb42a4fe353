pub mod amal;
pub mod dua;
pub mod hadith;
pub mod prayer;
pub mod screen;
pub mod verse;

pub use amal::AmalItem;
pub use dua::DuaCategory;
pub use hadith::Hadith;
pub use prayer::PrayerTime;
pub use screen::ScreenId;
pub use verse::Verse;
