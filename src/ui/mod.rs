//! Terminal rendering. Tightly coupled to ratatui; the engine never sees
//! any of this.

pub mod fishing_scene;
pub mod inventory_scene;
pub mod shop_scene;

use crate::game_state::GameState;
use crate::input::Overlay;
use ratatui::Frame;

/// Draws the whole screen: the first-person scene, then any open overlay.
pub fn draw_ui(frame: &mut Frame, state: &GameState, overlay: Overlay) {
    let area = frame.size();
    fishing_scene::render(frame, area, state);

    match overlay {
        Overlay::Inventory => inventory_scene::render(frame, area, state),
        Overlay::Shop => shop_scene::render(frame, area, state),
        Overlay::None => {}
    }
}

/// Centers a fixed-size modal inside `area`, clamped to fit.
pub(crate) fn centered_modal(
    area: ratatui::layout::Rect,
    width: u16,
    height: u16,
) -> ratatui::layout::Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    ratatui::layout::Rect::new(x, y, width, height)
}
