//! Inventory overlay: the fish currently in the bucket.

use crate::game_state::GameState;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, state: &GameState) {
    let modal = super::centered_modal(area, 40, 16);
    frame.render_widget(Clear, modal);

    let block = Block::default()
        .title(" Inventory ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let mut lines = Vec::new();
    if state.inventory.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Empty",
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
                    format!("{:>6.1}kg", fish.species.weight_kg),
                    Style::default().fg(Color::White),
                ),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[I] or [Esc] to close",
        Style::default().fg(Color::DarkGray),
    )));

    let body = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(body, inner);
}
