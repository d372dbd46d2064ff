//! First-person viewport rendering.
//!
//! Draws the sky, the water plane, and the bobber projected through the
//! player's camera, plus the power bar, notification line, and HUD.

use crate::constants::MAX_CHARGE;
use crate::fishing::FishingState;
use crate::game_state::GameState;
use crate::math::Vec3;
use crate::player::Player;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Horizontal field of view as tan(half-angle), roughly 84 degrees total.
const FOV_TAN_X: f64 = 0.9;

/// Vertical field of view, narrower since terminal cells are tall.
const FOV_TAN_Y: f64 = 0.7;

/// Anything closer than this in front of the camera is not drawn.
const NEAR_PLANE: f64 = 0.1;

pub fn render(frame: &mut Frame, area: Rect, state: &GameState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(3)])
        .split(area);

    draw_viewport(frame, chunks[0], state);
    draw_status(frame, chunks[1], state);
}

/// Projects a world point into viewport cells. Returns None behind the
/// camera or outside the view frustum.
fn project(player: &Player, point: Vec3, area: Rect) -> Option<(u16, u16)> {
    if area.width < 2 || area.height < 2 {
        return None;
    }

    let rel = point.sub(player.position);
    let forward = player.forward();
    let right = player.right();
    let up = right.cross(forward);

    let depth = rel.dot(forward);
    if depth <= NEAR_PLANE {
        return None;
    }

    let ndc_x = rel.dot(right) / depth / FOV_TAN_X;
    let ndc_y = rel.dot(up) / depth / FOV_TAN_Y;
    if !(-1.0..=1.0).contains(&ndc_x) || !(-1.0..=1.0).contains(&ndc_y) {
        return None;
    }

    let col = ((ndc_x + 1.0) / 2.0 * (area.width - 1) as f64).round() as u16;
    let row = ((1.0 - ndc_y) / 2.0 * (area.height - 1) as f64).round() as u16;
    Some((area.x + col, area.y + row))
}

/// Viewport row of the horizon: where a level ray leaves the camera.
fn horizon_row(player: &Player, area: Rect) -> u16 {
    let ndc_y = ((-player.pitch).tan() / FOV_TAN_Y).clamp(-1.0, 1.0);
    ((1.0 - ndc_y) / 2.0 * (area.height.saturating_sub(1)) as f64).round() as u16
}

fn draw_viewport(frame: &mut Frame, area: Rect, state: &GameState) {
    let block = Block::default().borders(Borders::ALL).title(" Dockside ");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let horizon = horizon_row(&state.player, inner);

    // Sky above the horizon, rippling water below it.
    let mut lines = Vec::with_capacity(inner.height as usize);
    for row in 0..inner.height {
        if row < horizon {
            lines.push(Line::from(""));
        } else {
            let offset = (row as usize) % 4;
            let mut water = String::with_capacity(inner.width as usize);
            for col in 0..inner.width as usize {
                if (col + offset * 2) % 7 == 0 {
                    water.push('~');
                } else {
                    water.push(' ');
                }
            }
            lines.push(Line::from(Span::styled(
                water,
                Style::default().fg(Color::Blue),
            )));
        }
    }
    frame.render_widget(Paragraph::new(lines), inner);

    // The bobber, projected into view.
    if let Some(bobber) = state.session.bobber {
        if let Some((col, row)) = project(&state.player, bobber.position, inner) {
            let (glyph, style) = if bobber.biting {
                (
                    "(O)",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("O", Style::default().fg(Color::Red))
            };
            let width = (glyph.len() as u16).min(inner.right().saturating_sub(col));
            if width > 0 {
                let cell = Rect::new(col, row, width, 1);
                frame.render_widget(Paragraph::new(Span::styled(glyph, style)), cell);
            }
        }
    }

    // Notification line, centered near the top.
    if let Some(notification) = &state.notification {
        let banner = Rect::new(inner.x, inner.y + 1, inner.width, 1);
        let text = Paragraph::new(Span::styled(
            notification.text.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(text, banner);
    }

    // Power bar while charging, green to red across the range.
    if state.session.state == FishingState::Charging && inner.height >= 3 {
        let charge = state.session.charge;
        let bar = Rect::new(
            inner.x + 2,
            inner.bottom() - 2,
            inner.width.saturating_sub(4),
            1,
        );
        let red = (charge * 2.55).min(255.0) as u8;
        let green = (255.0 - charge * 2.55 + 100.0).clamp(0.0, 255.0) as u8;
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Rgb(red, green, 0)))
            .ratio((charge / MAX_CHARGE).clamp(0.0, 1.0))
            .label(format!("Power {:.0}%", charge));
        frame.render_widget(gauge, bar);
    }
}

fn draw_status(frame: &mut Frame, area: Rect, state: &GameState) {
    let hint = match state.session.state {
        FishingState::Idle => "[Space] hold to charge a cast",
        FishingState::Charging => "release [Space] to cast",
        FishingState::Casting => "line away...",
        FishingState::Waiting => "wait for it...",
        FishingState::Biting => "[Space] REEL IN!",
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" Fish: {} ", state.inventory.len()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("| "),
        Span::styled(
            format!("${} ", state.money),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("| "),
        Span::styled(hint, Style::default().fg(Color::White)),
        Span::styled(
            "  [I]nventory [B]uy/Sell [Q]uit  WASD move, arrows look",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let status = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_point_ahead_is_centered() {
        let player = Player {
            position: Vec3::new(0.0, 2.5, 5.0),
            yaw: 0.0,
            pitch: 0.0,
        };
        let area = Rect::new(0, 0, 81, 41);
        let (col, row) = project(&player, Vec3::new(0.0, 2.5, -5.0), area).unwrap();
        assert_eq!(col, 40);
        assert_eq!(row, 20);
    }

    #[test]
    fn test_project_point_behind_is_culled() {
        let player = Player {
            position: Vec3::new(0.0, 2.5, 5.0),
            yaw: 0.0,
            pitch: 0.0,
        };
        let area = Rect::new(0, 0, 80, 40);
        assert!(project(&player, Vec3::new(0.0, 2.5, 50.0), area).is_none());
    }

    #[test]
    fn test_project_water_point_lands_below_horizon() {
        let player = Player {
            position: Vec3::new(0.0, 2.5, 5.0),
            yaw: 0.0,
            pitch: 0.0,
        };
        let area = Rect::new(0, 0, 81, 41);
        let horizon = horizon_row(&player, area);
        let (_, row) = project(&player, Vec3::new(0.0, 0.0, -5.0), area).unwrap();
        assert!(row > horizon);
    }

    #[test]
    fn test_horizon_moves_with_pitch() {
        let area = Rect::new(0, 0, 80, 40);
        let level = Player {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
        };
        let down = Player {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: -0.5,
        };
        // Looking down raises the horizon on screen.
        assert!(horizon_row(&down, area) < horizon_row(&level, area));
    }
}
