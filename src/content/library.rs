//! Compiled-in reference content. Read-only; screens copy what they mutate.

use crate::models::{AmalItem, DuaCategory, Hadith, PrayerTime};

/// Today's prayer strip. The `active` flag marks the highlighted entry.
pub fn prayer_times() -> Vec<PrayerTime> {
    vec![
        PrayerTime::new("Fajr", "05:12 AM", false),
        PrayerTime::new("Sunrise", "06:34 AM", false),
        PrayerTime::new("Dhuhr", "12:15 PM", true),
        PrayerTime::new("Asr", "03:45 PM", false),
        PrayerTime::new("Maghrib", "06:10 PM", false),
        PrayerTime::new("Isha", "07:32 PM", false),
    ]
}

pub fn hadiths() -> Vec<Hadith> {
    vec![
        Hadith::new(
            1,
            "Sahih Bukhari",
            "إِنَّمَا الأَعْمَالُ بِالنِّيَّاتِ",
            "Actions are judged by intentions.",
            "Vol. 1, Book 1, Hadith 1",
        ),
        Hadith::new(
            2,
            "Sahih Muslim",
            "الطُّهُورُ شَطْرُ الإِيمَانِ",
            "Purity is half of faith.",
            "Book 2, Hadith 432",
        ),
    ]
}

/// Seed state of the daily amal checklist.
pub fn amal_seed() -> Vec<AmalItem> {
    vec![
        AmalItem::new("1", "Morning Azkar", false, "After Fajr"),
        AmalItem::new("2", "Surah Al-Mulk", false, "Before Sleep"),
        AmalItem::new("3", "Miswak before prayer", true, "Daily"),
        AmalItem::new("4", "Tahajjud Prayer", false, "Third of Night"),
    ]
}

pub fn dua_categories() -> Vec<DuaCategory> {
    vec![
        DuaCategory::new("morning", "Morning", "☀"),
        DuaCategory::new("evening", "Evening", "☾"),
        DuaCategory::new("travel", "Travel", "✈"),
        DuaCategory::new("protection", "Protection", "🛡"),
        DuaCategory::new("gratitude", "Gratitude", "🤲"),
        DuaCategory::new("healing", "Healing", "☘"),
    ]
}

pub fn saved_duas() -> Vec<String> {
    vec![
        "Morning Azkar".to_string(),
        "Before Eating".to_string(),
        "Entering Mosque".to_string(),
    ]
}

/// The phrase counted on the tasbih screen: (arabic-transliterated, meaning).
pub fn tasbih_phrase() -> (&'static str, &'static str) {
    ("SubhanAllah", "Glory be to Allah")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_prayer_entry_is_active() {
        let active = prayer_times().iter().filter(|p| p.active).count();
        assert_eq!(active, 1);
    }

    #[test]
    fn amal_seed_ids_are_unique() {
        let items = amal_seed();
        for (i, a) in items.iter().enumerate() {
            for b in &items[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
