use crate::content;
use crate::models::{PrayerTime, Verse};

/// Verse card lifecycle. `Unavailable` is terminal for this mount — there
/// is no automatic retry; a fresh mount issues a fresh request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerseState {
    Loading,
    Loaded(Verse),
    Unavailable,
}

/// Sky band behind the prayer panel, a pure function of the mount hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sky {
    Dawn,
    Day,
    Sunset,
    Night,
}

impl Sky {
    pub fn for_hour(hour: u32) -> Sky {
        match hour {
            5..=6 => Sky::Dawn,
            7..=16 => Sky::Day,
            17..=18 => Sky::Sunset,
            _ => Sky::Night,
        }
    }
}

pub struct HomeScreen {
    pub verse: VerseState,
    /// Wall-clock hour captured once at mount; not live-updating.
    pub hour: u32,
    pub prayer_times: Vec<PrayerTime>,
}

impl HomeScreen {
    /// The caller (the shell) is responsible for issuing the verse request
    /// that matches this mount.
    pub fn new(hour: u32) -> Self {
        Self {
            verse: VerseState::Loading,
            hour,
            prayer_times: content::prayer_times(),
        }
    }

    pub fn sky(&self) -> Sky {
        Sky::for_hour(self.hour)
    }

    /// The entry flagged active in the static strip, if any.
    pub fn active_prayer(&self) -> Option<&PrayerTime> {
        self.prayer_times.iter().find(|p| p.active)
    }

    pub fn on_verse(&mut self, verse: Option<Verse>) {
        self.verse = match verse {
            Some(v) => VerseState::Loaded(v),
            None => VerseState::Unavailable,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verse() -> Verse {
        Verse {
            arabic: "فَإِنَّ مَعَ الْعُسْرِ يُسْرًا".to_string(),
            translation: "Indeed, with hardship comes ease.".to_string(),
            reference: "Quran 94:5".to_string(),
        }
    }

    #[test]
    fn starts_loading() {
        assert_eq!(HomeScreen::new(9).verse, VerseState::Loading);
    }

    #[test]
    fn successful_fetch_lands() {
        let mut home = HomeScreen::new(9);
        home.on_verse(Some(verse()));
        assert_eq!(home.verse, VerseState::Loaded(verse()));
    }

    #[test]
    fn failed_fetch_shows_placeholder_forever() {
        let mut home = HomeScreen::new(9);
        home.on_verse(None);
        assert_eq!(home.verse, VerseState::Unavailable);
    }

    #[test]
    fn sky_band_boundaries() {
        assert_eq!(Sky::for_hour(4), Sky::Night);
        assert_eq!(Sky::for_hour(5), Sky::Dawn);
        assert_eq!(Sky::for_hour(6), Sky::Dawn);
        assert_eq!(Sky::for_hour(7), Sky::Day);
        assert_eq!(Sky::for_hour(16), Sky::Day);
        assert_eq!(Sky::for_hour(17), Sky::Sunset);
        assert_eq!(Sky::for_hour(18), Sky::Sunset);
        assert_eq!(Sky::for_hour(19), Sky::Night);
        assert_eq!(Sky::for_hour(23), Sky::Night);
        assert_eq!(Sky::for_hour(0), Sky::Night);
    }

    #[test]
    fn active_prayer_comes_from_static_flag() {
        let home = HomeScreen::new(9);
        assert_eq!(home.active_prayer().map(|p| p.name.as_str()), Some("Dhuhr"));
    }
}
