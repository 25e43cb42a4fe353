use anyhow::Result;

use crate::ai::GeminiClient;
use crate::config::AppConfig;
use crate::content;
use crate::utils::format::pad_display;

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const EMERALD: &str = "\x1b[38;2;52;211;153m";
const SOFT: &str = "\x1b[38;2;167;243;208m";

// ─── Times ───────────────────────────────────────────────────────────────────

pub fn handle_times() -> Result<()> {
    println!();
    println_colored!(EMERALD, "  Prayer Times — today");
    println!();

    for prayer in content::prayer_times() {
        let name = pad_display(&prayer.name, 10);
        if prayer.active {
            println_colored!(BOLD, "  {}  {}   ← now", name, prayer.time);
        } else {
            println_colored!(DIM, "  {}  {}", name, prayer.time);
        }
    }
    println!();
    Ok(())
}

// ─── Hadith ──────────────────────────────────────────────────────────────────

pub fn handle_hadith() -> Result<()> {
    println!();
    for hadith in content::hadiths() {
        println_colored!(EMERALD, "  {}", hadith.collection);
        println_colored!(SOFT, "  {}", hadith.arabic);
        println_colored!(BOLD, "  {}", hadith.translation);
        println_colored!(DIM, "  {}", hadith.reference);
        println!();
    }
    Ok(())
}

// ─── Dua ─────────────────────────────────────────────────────────────────────

pub fn handle_dua() -> Result<()> {
    println!();
    println_colored!(EMERALD, "  Dua Library");
    println!();
    for category in content::dua_categories() {
        println_colored!(BOLD, "  {}  {}", category.icon, category.name);
    }
    println!();
    println_colored!(EMERALD, "  Saved");
    for name in content::saved_duas() {
        println_colored!(DIM, "  {}", name);
    }
    println!();
    Ok(())
}

// ─── Amal ────────────────────────────────────────────────────────────────────

pub fn handle_amal() -> Result<()> {
    let items = content::amal_seed();
    let done = items.iter().filter(|a| a.completed).count();

    println!();
    println_colored!(EMERALD, "  Daily Amal — {}/{} done", done, items.len());
    println!();
    for item in &items {
        let title = pad_display(&item.title, 28);
        if item.completed {
            println_colored!(DIM, "  ● {} {}", title, item.time);
        } else {
            println_colored!(BOLD, "  ○ {} {}", title, item.time);
        }
    }
    println!();
    Ok(())
}

// ─── Verse ───────────────────────────────────────────────────────────────────

pub fn handle_verse(config: &AppConfig) -> Result<()> {
    let client = GeminiClient::new(
        config.ai.resolved_api_key(),
        config.ai.model.clone(),
        config.ai.base_url.clone(),
    );
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    println!();
    match rt.block_on(client.verse_of_the_day()) {
        Some(verse) => {
            println_colored!(SOFT, "  {}", verse.arabic);
            println_colored!(BOLD, "  \"{}\"", verse.translation);
            println_colored!(EMERALD, "  {}", verse.reference);
        }
        None => {
            println_colored!(
                DIM,
                "  The verse could not be fetched. Check GEMINI_API_KEY and connectivity."
            );
        }
    }
    println!();
    Ok(())
}
