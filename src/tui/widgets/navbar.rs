use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::ScreenId;
use crate::tui::theme;

/// Bottom navigation bar. Stateless: reads only the active screen id.
pub fn render(frame: &mut Frame, area: Rect, active: ScreenId) {
    let mut spans = Vec::new();
    for (i, id) in ScreenId::all().into_iter().enumerate() {
        let key = format!(" [{}] ", i + 1);
        let label = format!("{}  ", id.label());
        if id == active {
            spans.push(Span::styled(key, theme::emerald().add_modifier(Modifier::BOLD)));
            spans.push(Span::styled(
                label,
                theme::emerald().add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(key, theme::dim()));
            spans.push(Span::styled(label, theme::dim()));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(ratatui::style::Style::default().fg(theme::BORDER))
        .style(theme::surface());

    let paragraph = Paragraph::new(Line::from(spans))
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
