use ratatui::style::{Color, Modifier, Style};

pub const BG: Color = Color::Rgb(2, 44, 34);
pub const SURFACE: Color = Color::Rgb(6, 58, 45);
pub const BORDER: Color = Color::Rgb(17, 84, 63);
pub const BORDER_FOCUS: Color = Color::Rgb(52, 211, 153);
pub const TEXT: Color = Color::Rgb(226, 238, 232);
pub const TEXT_DIM: Color = Color::Rgb(130, 156, 144);
pub const EMERALD: Color = Color::Rgb(52, 211, 153);
pub const EMERALD_SOFT: Color = Color::Rgb(167, 243, 208);
pub const GOLD: Color = Color::Rgb(234, 179, 8);
pub const RED: Color = Color::Rgb(190, 84, 66);

// Sky bands behind the home prayer panel
pub const SKY_DAWN: Color = Color::Rgb(120, 70, 28);
pub const SKY_DAY: Color = Color::Rgb(4, 120, 87);
pub const SKY_SUNSET: Color = Color::Rgb(109, 40, 89);
pub const SKY_NIGHT: Color = Color::Rgb(12, 20, 33);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn emerald() -> Style {
    Style::default().fg(EMERALD)
}

pub fn soft() -> Style {
    Style::default().fg(EMERALD_SOFT)
}

pub fn gold() -> Style {
    Style::default().fg(GOLD)
}

pub fn red() -> Style {
    Style::default().fg(RED)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}
