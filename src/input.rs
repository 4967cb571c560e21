//! Input plumbing: normalized events, click targets, and pixel → cell math.
//!
//! Nothing here knows about the economy. The farm screen registers targets
//! while it renders; the mouse handler in `main.rs` hit-tests against them.

use ratzilla::ratatui::layout::Rect;

/// Keyboard and pointer input, normalized.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key(char),
    /// A click on a registered target, identified by its action ID
    /// (see `farm::actions`).
    Click(u16),
}

/// A rectangular hit region (terminal cells) bound to an action.
#[derive(Debug, Clone)]
pub struct ClickTarget {
    pub rect: Rect,
    pub action_id: u16,
}

/// Click targets from the last frame plus the terminal size they were laid out for.
pub struct ClickState {
    pub targets: Vec<ClickTarget>,
    pub terminal_cols: u16,
    pub terminal_rows: u16,
}

impl ClickState {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            terminal_cols: 0,
            terminal_rows: 0,
        }
    }

    /// Start a new frame at the given terminal size.
    pub fn reset(&mut self, cols: u16, rows: u16) {
        self.terminal_cols = cols;
        self.terminal_rows = rows;
        self.targets.clear();
    }

    pub fn add_click_target(&mut self, rect: Rect, action_id: u16) {
        self.targets.push(ClickTarget { rect, action_id });
    }

    /// Register a full-width target on `row`, if the row lies inside `area`.
    pub fn add_row_target(&mut self, area: Rect, row: u16, action_id: u16) {
        if row >= area.y && row < area.y + area.height {
            self.add_click_target(Rect::new(area.x, row, area.width, 1), action_id);
        }
    }

    /// Action under the given cell. Later targets sit on top of earlier ones.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<u16> {
        self.targets.iter().rev().find_map(|t| {
            let r = &t.rect;
            let inside = col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height;
            inside.then_some(t.action_id)
        })
    }

    /// Translate a click at pixel coordinates (relative to the grid's top-left
    /// corner) into an action, given the grid's pixel size.
    pub fn resolve_pixel(&self, x: f64, y: f64, grid_width: f64, grid_height: f64) -> Option<u16> {
        let col = pixel_x_to_col(x, grid_width, self.terminal_cols)?;
        let row = pixel_y_to_row(y, grid_height, self.terminal_rows)?;
        self.hit_test(col, row)
    }
}

/// Below this width the shop collapses into a single column.
pub fn is_narrow_layout(width: u16) -> bool {
    width < 60
}

/// Convert a pixel Y coordinate to a terminal row index.
///
/// Returns `None` if the click is outside the grid or inputs are invalid.
pub fn pixel_y_to_row(click_y: f64, grid_height: f64, terminal_rows: u16) -> Option<u16> {
    if grid_height <= 0.0 || terminal_rows == 0 || click_y < 0.0 {
        return None;
    }
    let cell_height = grid_height / terminal_rows as f64;
    let row = (click_y / cell_height) as u16;
    (row < terminal_rows).then_some(row)
}

/// Convert a pixel X coordinate to a terminal column index.
pub fn pixel_x_to_col(click_x: f64, grid_width: f64, terminal_cols: u16) -> Option<u16> {
    if grid_width <= 0.0 || terminal_cols == 0 || click_x < 0.0 {
        return None;
    }
    let cell_width = grid_width / terminal_cols as f64;
    let col = (click_x / cell_width) as u16;
    (col < terminal_cols).then_some(col)
}
