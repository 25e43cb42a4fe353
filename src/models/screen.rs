use std::str::FromStr;

/// The five top-level screens. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Home,
    Dua,
    Dhikr,
    Hadith,
    Amal,
}

impl ScreenId {
    /// Navbar order (matches the number keys 1-5).
    pub fn all() -> Vec<ScreenId> {
        vec![
            ScreenId::Home,
            ScreenId::Dua,
            ScreenId::Dhikr,
            ScreenId::Hadith,
            ScreenId::Amal,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScreenId::Home => "Home",
            ScreenId::Dua => "Dua",
            ScreenId::Dhikr => "Dhikr",
            ScreenId::Hadith => "Hadith",
            ScreenId::Amal => "Amal",
        }
    }

    /// Next screen in navbar order, wrapping at the end.
    pub fn next(&self) -> ScreenId {
        match self {
            ScreenId::Home => ScreenId::Dua,
            ScreenId::Dua => ScreenId::Dhikr,
            ScreenId::Dhikr => ScreenId::Hadith,
            ScreenId::Hadith => ScreenId::Amal,
            ScreenId::Amal => ScreenId::Home,
        }
    }

    /// Previous screen in navbar order, wrapping at the start.
    pub fn prev(&self) -> ScreenId {
        match self {
            ScreenId::Home => ScreenId::Amal,
            ScreenId::Dua => ScreenId::Home,
            ScreenId::Dhikr => ScreenId::Dua,
            ScreenId::Hadith => ScreenId::Dhikr,
            ScreenId::Amal => ScreenId::Hadith,
        }
    }
}

impl std::fmt::Display for ScreenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ScreenId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "home" => Ok(ScreenId::Home),
            "dua" => Ok(ScreenId::Dua),
            "dhikr" => Ok(ScreenId::Dhikr),
            "hadith" => Ok(ScreenId::Hadith),
            "amal" => Ok(ScreenId::Amal),
            _ => Err(anyhow::anyhow!("Unknown screen: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_prev_cycle_through_all_five() {
        let mut id = ScreenId::Home;
        for _ in 0..5 {
            id = id.next();
        }
        assert_eq!(id, ScreenId::Home);

        for _ in 0..5 {
            id = id.prev();
        }
        assert_eq!(id, ScreenId::Home);
    }

    #[test]
    fn prev_undoes_next() {
        for id in ScreenId::all() {
            assert_eq!(id.next().prev(), id);
        }
    }
}
