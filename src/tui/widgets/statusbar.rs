use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::ScreenId;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, active: ScreenId) {
    let mut hints: Vec<(&str, &str)> = match active {
        ScreenId::Dhikr => vec![("[space]", " count  "), ("[r]", " reset  "), ("[g]", " goal  ")],
        ScreenId::Hadith => vec![("[↑↓]", " browse  "), ("[e]", " explain  ")],
        ScreenId::Amal => vec![("[↑↓]", " move  "), ("[space]", " toggle  ")],
        ScreenId::Home | ScreenId::Dua => vec![],
    };
    hints.extend([("[tab]", " next  "), ("[?]", " help  "), ("[Esc]", " quit")]);

    let mut spans = Vec::new();
    for (key, label) in &hints {
        spans.push(Span::styled(*key, theme::emerald()));
        spans.push(Span::styled(*label, theme::dim()));
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
