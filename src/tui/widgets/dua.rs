use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::models::DuaCategory;
use crate::screens::DuaScreen;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, screen: &DuaScreen) {
    let rows = screen.categories.len().div_ceil(2);
    let mut constraints: Vec<Constraint> = (0..rows).map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Length(screen.saved.len() as u16 + 2));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (row, pair) in screen.categories.chunks(2).enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[row]);
        for (col, category) in pair.iter().enumerate() {
            render_category(frame, columns[col], category);
        }
    }

    render_saved(frame, chunks[rows], screen);
}

fn render_category(frame: &mut Frame, area: Rect, category: &DuaCategory) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::BORDER))
        .style(theme::surface());

    let line = Line::from(vec![
        Span::styled(format!("{}  ", category.icon), theme::soft()),
        Span::styled(
            category.name.to_uppercase(),
            theme::bold().add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(
        Paragraph::new(line).block(block).alignment(Alignment::Center),
        area,
    );
}

fn render_saved(frame: &mut Frame, area: Rect, screen: &DuaScreen) {
    let block = Block::default()
        .title(Span::styled(" Saved Duas ", theme::emerald()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::BORDER))
        .style(theme::surface());

    let items: Vec<ListItem> = screen
        .saved
        .iter()
        .map(|name| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("  {:<24}", name), theme::bold()),
                Span::styled("[SAVED]", theme::emerald()),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
