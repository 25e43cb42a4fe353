use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::screens::AmalScreen;
use crate::tui::theme;
use crate::utils::format::{completion_percent, pad_display, progress_bar};

pub fn render(frame: &mut Frame, area: Rect, screen: &AmalScreen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // heading + progress
            Constraint::Min(4),    // checklist
            Constraint::Length(4), // next-goal card
        ])
        .split(area);

    render_heading(frame, chunks[0], screen);
    render_checklist(frame, chunks[1], screen);
    render_goal_card(frame, chunks[2]);
}

fn render_heading(frame: &mut Frame, area: Rect, screen: &AmalScreen) {
    let done = screen.completed_count();
    let total = screen.items.len();
    let percent = completion_percent(done, total);

    let text = vec![
        Line::from(vec![
            Span::styled("  Daily Amal", theme::bold().add_modifier(Modifier::BOLD)),
            Span::styled("  ·  Sunnah Acts & Trackers", theme::dim()),
        ]),
        Line::from(vec![
            Span::styled(
                format!("  {} ", progress_bar(done as u32, total as u32, 12)),
                theme::emerald(),
            ),
            Span::styled(
                format!("{}/{} done today ({}%)", done, total, percent),
                theme::dim(),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(text), area);
}

fn render_checklist(frame: &mut Frame, area: Rect, screen: &AmalScreen) {
    let block = Block::default()
        .title(Span::styled(" Today ", theme::emerald()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::BORDER))
        .style(theme::surface());

    let items: Vec<ListItem> = screen
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let focused = i == screen.cursor;

            let icon = if item.completed {
                Span::styled("● ", theme::emerald())
            } else {
                Span::styled("○ ", theme::dim())
            };

            let mut title_style = if focused {
                theme::emerald().add_modifier(Modifier::BOLD)
            } else {
                theme::bold()
            };
            if item.completed {
                title_style = title_style.add_modifier(Modifier::CROSSED_OUT);
            }

            let line = Line::from(vec![
                Span::raw("  "),
                icon,
                Span::styled(pad_display(&item.title, 28), title_style),
                Span::styled(item.time.to_uppercase(), theme::dim()),
            ]);

            ListItem::new(line)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn render_goal_card(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(Span::styled(" Next Goal ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::gold())
        .style(theme::surface());

    let text = vec![Line::from(vec![
        Span::styled("  ℹ  ", theme::gold()),
        Span::styled(
            "Complete 3 more acts to unlock the 'Faithful' badge.",
            theme::dim(),
        ),
    ])];

    frame.render_widget(Paragraph::new(text).block(block), area);
}
