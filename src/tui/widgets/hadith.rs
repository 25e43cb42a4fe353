use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::models::Hadith;
use crate::screens::HadithScreen;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, screen: &HadithScreen) {
    let mut constraints: Vec<Constraint> = screen
        .hadiths
        .iter()
        .map(|_| Constraint::Length(7))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, hadith) in screen.hadiths.iter().enumerate() {
        render_card(frame, chunks[i], hadith, i == screen.cursor);
    }
}

fn render_card(frame: &mut Frame, area: Rect, hadith: &Hadith, focused: bool) {
    let border_style = if focused {
        theme::emerald()
    } else {
        Style::default().fg(theme::BORDER)
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", hadith.collection),
            theme::emerald().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .style(theme::surface());

    let explain_style = if focused {
        theme::emerald().add_modifier(Modifier::BOLD)
    } else {
        theme::dim()
    };

    let text = vec![
        Line::from(Span::styled(
            format!("{}  ", hadith.arabic),
            theme::soft(),
        ))
        .alignment(Alignment::Right),
        Line::from(Span::styled(format!("  {}", hadith.translation), theme::bold())),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("  {}", hadith.reference.to_uppercase()), theme::dim()),
            Span::styled("   [e] EXPLAIN", explain_style),
        ]),
    ];

    frame.render_widget(Paragraph::new(text).block(block), area);
}

/// Modal sharh sheet. Only meaningful while a hadith is selected; every
/// key dismisses it, so nothing under it is reachable until then.
pub fn render_overlay(frame: &mut Frame, screen: &HadithScreen) {
    let Some(hadith) = &screen.selected else {
        return;
    };

    let area = frame.area();
    let popup_area = Rect {
        x: area.width / 6,
        y: area.height / 4,
        width: area.width * 2 / 3,
        height: (area.height / 2).min(14),
    };

    frame.render_widget(Clear, popup_area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", hadith.collection.to_uppercase()),
            theme::dim(),
        )),
        Line::from(""),
    ];

    if screen.loading {
        lines.push(Line::from(Span::styled(format!("  {}", "░".repeat(40)), theme::dim())));
        lines.push(Line::from(Span::styled(format!("  {}", "░".repeat(36)), theme::dim())));
        lines.push(Line::from(Span::styled(format!("  {}", "░".repeat(38)), theme::dim())));
    } else if let Some(explanation) = &screen.explanation {
        lines.push(Line::from(Span::styled(
            format!("  {}", explanation),
            Style::default().fg(theme::TEXT),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  [any key] close", theme::dim())));

    let block = Block::default()
        .title(Span::styled(
            " Sharh (Explanation) ",
            theme::emerald().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::emerald())
        .style(theme::surface());

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, popup_area);
}
