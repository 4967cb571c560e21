//! Clickable list builder shared by the farm panels.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::text::Line;

use crate::input::ClickState;

/// Pairs rendered [`Line`]s with click actions.
///
/// Annotate lines as clickable while building the panel, then call
/// [`register_targets`](ClickableList::register_targets) once with the
/// panel's area; each action lands on whatever row its line ended up on.
///
/// ```ignore
/// let mut cl = ClickableList::new();
/// cl.push(Line::from("Upgrades"));
/// cl.push_clickable(Line::from("[A] Sorting Tray  Buy — 10"), BUY_UPGRADE_BASE);
/// cl.register_targets(area, &mut cs, 1, 1);
/// f.render_widget(Paragraph::new(cl.into_lines()).block(block), area);
/// ```
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    /// `(line_index, action_id)` pairs.
    actions: Vec<(u16, u16)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    pub fn push_clickable(&mut self, line: Line<'a>, action_id: u16) {
        self.actions.push((self.lines.len() as u16, action_id));
        self.lines.push(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register a row target for every clickable line that is visible.
    ///
    /// `top_offset`/`bottom_offset` are the rows taken by borders or padding.
    /// Each logical line is assumed to occupy one row (no wrapping).
    pub fn register_targets(&self, area: Rect, cs: &mut ClickState, top_offset: u16, bottom_offset: u16) {
        let content_y = area.y + top_offset;
        let content_end = area.y + area.height.saturating_sub(bottom_offset);
        for &(line_idx, action_id) in &self.actions {
            let row = content_y + line_idx;
            if row < content_end {
                cs.add_row_target(area, row, action_id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clickable_lines_map_to_rows() {
        let mut cl = ClickableList::new();
        cl.push(Line::from("header"));
        cl.push_clickable(Line::from("tray"), 100);
        cl.push_clickable(Line::from("coil"), 101);
        cl.push(Line::from("footer"));
        assert_eq!(cl.len(), 4);

        let area = Rect::new(0, 5, 80, 10);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1);

        // header is row 6; tray row 7; coil row 8
        assert_eq!(cs.targets.len(), 2);
        assert_eq!(cs.hit_test(10, 6), None);
        assert_eq!(cs.hit_test(10, 7), Some(100));
        assert_eq!(cs.hit_test(10, 8), Some(101));
        assert_eq!(cs.hit_test(10, 9), None);
    }

    #[test]
    fn rows_past_bottom_border_are_dropped() {
        let mut cl = ClickableList::new();
        for i in 0..10 {
            cl.push_clickable(Line::from(format!("item {i}")), 100 + i);
        }
        // 3 content rows between the borders
        let area = Rect::new(0, 0, 40, 5);
        let mut cs = ClickState::new();
        cl.register_targets(area, &mut cs, 1, 1);

        assert_eq!(cs.targets.len(), 3);
        assert_eq!(cs.hit_test(1, 3), Some(102));
        assert_eq!(cs.hit_test(1, 4), None);
    }

    #[test]
    fn empty_list_registers_nothing() {
        let cl = ClickableList::new();
        assert!(cl.is_empty());
        let mut cs = ClickState::new();
        cl.register_targets(Rect::new(0, 0, 10, 10), &mut cs, 0, 0);
        assert!(cs.targets.is_empty());
    }

    #[test]
    fn into_lines_keeps_everything() {
        let mut cl = ClickableList::new();
        cl.push(Line::from("a"));
        cl.push_clickable(Line::from("b"), 1);
        assert_eq!(cl.into_lines().len(), 2);
    }
}
