//! Shop overlay: sell the bucket for its catalog value.

use crate::game_state::GameState;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, state: &GameState) {
    let modal = super::centered_modal(area, 40, 18);
    frame.render_widget(Clear, modal);

    let block = Block::default()
        .title(" Fish Market ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let mut lines = Vec::new();
    let total: u64 = state.inventory.iter().map(|f| f.species.price).sum();

    if state.inventory.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Nothing to sell",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        for fish in &state.inventory {
            let (r, g, b) = fish.species.color;
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<14}", fish.species.name),
                    Style::default().fg(Color::Rgb(r, g, b)),
                ),
                Span::styled(
                    format!("{:>6}", format!("${}", fish.species.price)),
                    Style::default().fg(Color::Yellow),
                ),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("Total: "),
            Span::styled(
                format!("${}", total),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[S] sell all   [B] or [Esc] close",
        Style::default().fg(Color::DarkGray),
    )));

    let body = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(body, inner);
}
