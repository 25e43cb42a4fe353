use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::screens::home::{HomeScreen, Sky, VerseState};
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, home: &HomeScreen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // sky panel + prayer strip
            Constraint::Length(8), // verse of the day
            Constraint::Length(5), // progress mini-cards
        ])
        .split(area);

    render_sky_panel(frame, chunks[0], home);
    render_verse_card(frame, chunks[1], home);
    render_progress_row(frame, chunks[2]);
}

fn sky_color(sky: Sky) -> ratatui::style::Color {
    match sky {
        Sky::Dawn => theme::SKY_DAWN,
        Sky::Day => theme::SKY_DAY,
        Sky::Sunset => theme::SKY_SUNSET,
        Sky::Night => theme::SKY_NIGHT,
    }
}

fn render_sky_panel(frame: &mut Frame, area: Rect, home: &HomeScreen) {
    let bg = sky_color(home.sky());
    let on_sky = Style::default().fg(theme::EMERALD_SOFT).bg(bg);
    let dim_on_sky = Style::default().fg(theme::TEXT_DIM).bg(bg);

    let (next_name, next_time) = home
        .active_prayer()
        .map(|p| (p.name.clone(), p.time.clone()))
        .unwrap_or_else(|| ("—".to_string(), "--:--".to_string()));

    let mut strip = Vec::new();
    for p in &home.prayer_times {
        let label = format!(" {} {} ", p.name.to_uppercase(), p.time);
        if p.active {
            strip.push(Span::styled(
                label,
                on_sky.add_modifier(Modifier::BOLD | Modifier::REVERSED),
            ));
        } else {
            strip.push(Span::styled(label, dim_on_sky));
        }
        strip.push(Span::styled(" ", dim_on_sky));
    }

    let text = vec![
        Line::from(Span::styled("  Next Prayer", dim_on_sky)),
        Line::from(Span::styled(
            format!("  {}", next_name),
            on_sky.add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(format!("  {}", next_time), on_sky),
            Span::styled("  ·  In 02:45:12", dim_on_sky),
        ]),
        Line::from(""),
        Line::from(strip),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::BORDER))
        .style(Style::default().fg(theme::TEXT).bg(bg));

    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn render_verse_card(frame: &mut Frame, area: Rect, home: &HomeScreen) {
    let block = Block::default()
        .title(Span::styled(" Verse of the Day ", theme::emerald()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::BORDER))
        .style(theme::surface());

    let text: Vec<Line> = match &home.verse {
        // A verse that never arrives keeps the shimmer up indefinitely
        VerseState::Loading | VerseState::Unavailable => vec![
            Line::from(""),
            Line::from(Span::styled("░".repeat(34), theme::dim())),
            Line::from(Span::styled("░".repeat(28), theme::dim())),
            Line::from(Span::styled("░".repeat(31), theme::dim())),
        ],
        VerseState::Loaded(verse) => vec![
            Line::from(""),
            Line::from(Span::styled(
                verse.arabic.clone(),
                theme::soft().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("\"{}\"", verse.translation),
                Style::default()
                    .fg(theme::TEXT)
                    .add_modifier(Modifier::ITALIC),
            )),
            Line::from(Span::styled(
                verse.reference.clone(),
                theme::emerald().add_modifier(Modifier::BOLD),
            )),
        ],
    };

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_progress_row(frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_mini_card(frame, columns[0], "75%", "Daily Amal", "Keep it up!");
    render_mini_card(frame, columns[1], "12", "Sunnah Acts", "Completed");
}

fn render_mini_card(frame: &mut Frame, area: Rect, figure: &str, label: &str, note: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::BORDER))
        .style(theme::surface());

    let text = vec![
        Line::from(vec![
            Span::styled(format!("  {}  ", figure), theme::emerald().add_modifier(Modifier::BOLD)),
            Span::styled(label, theme::dim()),
        ]),
        Line::from(Span::styled(format!("  {}", note), theme::bold())),
    ];

    frame.render_widget(Paragraph::new(text).block(block), area);
}
