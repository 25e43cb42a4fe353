use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
    Frame,
};
use tui_big_text::{BigText, PixelSize};

use crate::content;
use crate::screens::DhikrScreen;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, screen: &DhikrScreen) {
    let block = Block::default()
        .title(Span::styled(" Tasbih ", theme::emerald()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::BORDER))
        .style(theme::surface());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // phrase
            Constraint::Length(5), // big count
            Constraint::Length(1), // tap hint
            Constraint::Length(2), // progress gauge
            Constraint::Min(0),
        ])
        .split(inner);

    let (phrase, meaning) = content::tasbih_phrase();
    let phrase_text = vec![
        Line::from(Span::styled(phrase, theme::bold())),
        Line::from(Span::styled(meaning, theme::emerald())),
    ];
    frame.render_widget(
        Paragraph::new(phrase_text).alignment(Alignment::Center),
        chunks[0],
    );

    render_count(frame, chunks[1], screen.count);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "TAP TO COUNT",
            theme::dim(),
        )))
        .alignment(Alignment::Center),
        chunks[2],
    );

    // count can sit above the goal right after a preset switch
    let ratio = (screen.count as f64 / screen.goal as f64).min(1.0);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme::EMERALD).bg(theme::BORDER))
        .ratio(ratio)
        .label(Span::styled(
            format!("{} / {}", screen.count, screen.goal),
            theme::bold(),
        ));
    let gauge_area = centered_band(chunks[3], 3);
    frame.render_widget(gauge, gauge_area);
}

/// Big quadrant digits, centered by hand (4 columns per glyph).
fn render_count(frame: &mut Frame, area: Rect, count: u32) {
    let text = count.to_string();
    let width = (text.len() as u16) * 4;
    let x = area.x + area.width.saturating_sub(width) / 2;
    let target = Rect {
        x,
        y: area.y,
        width: width.min(area.width),
        height: area.height.min(4),
    };

    let big = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(theme::emerald().add_modifier(Modifier::BOLD))
        .lines(vec![Line::from(text)])
        .build();

    frame.render_widget(big, target);
}

/// Shrink a band horizontally by `margin` columns on each side.
fn centered_band(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin.min(area.width / 2),
        y: area.y,
        width: area.width.saturating_sub(margin * 2),
        height: area.height,
    }
}
