//! Paperclip Farm rendering: header, produce button, counters, and the shop.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::format::format_amount;
use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::ClickableList;

use super::actions::{upgrade_key, BUY_UPGRADE_BASE, PRODUCE};
use super::state::{Snapshot, UpgradeView};

const TITLE: &str = "Paperclip Farm — Infinite Office Supplies";
const FLAVOR: &str =
    "Click to bend wire into paperclips, then invest in upgrades to automate production.";

pub fn render(snap: &Snapshot, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let narrow = is_narrow_layout(area.width);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // title + flavor
            Constraint::Length(3), // produce button
            Constraint::Length(3), // counters
            Constraint::Min(5),    // shop
            Constraint::Length(3), // help
        ])
        .split(area);

    render_header(f, chunks[0]);
    render_produce_button(f, chunks[1], click_state);
    render_counters(snap, f, chunks[2]);
    render_shop(snap, f, chunks[3], narrow, click_state);
    render_help(snap, f, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(FLAVOR, Style::default().fg(Color::Gray))),
    ];
    let header = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(header, area);
}

fn render_produce_button(f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let label = Line::from(vec![
        Span::styled(
            "[Space] ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Punch out paperclips",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ]);
    let button = Paragraph::new(label)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .alignment(Alignment::Center);
    f.render_widget(button, area);

    click_state.borrow_mut().add_click_target(area, PRODUCE);
}

fn render_counters(snap: &Snapshot, f: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            format!("{} paperclips", format_amount(snap.resource)),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  •  ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{} clips/sec", format_amount(snap.rate)),
            Style::default().fg(Color::Green),
        ),
    ]);
    let counters = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );
    f.render_widget(counters, area);
}

/// Buy affordance text: enabled when affordable, dimmed "Need" otherwise.
pub fn buy_label(u: &UpgradeView) -> (String, Style) {
    if u.affordable {
        (
            format!("Buy — {}", format_amount(u.current_cost)),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )
    } else {
        (
            format!("Need {}", format_amount(u.current_cost)),
            Style::default().fg(Color::DarkGray),
        )
    }
}

/// "Owned: N  •  +X c/s  (each: Y c/s)"
pub fn owned_line(u: &UpgradeView) -> String {
    format!(
        "Owned: {}  •  +{} c/s  (each: {} c/s)",
        u.owned,
        format_amount(u.contribution()),
        format_amount(u.rate)
    )
}

fn render_shop(
    snap: &Snapshot,
    f: &mut Frame,
    area: Rect,
    narrow: bool,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cl = ClickableList::new();
    cl.push(Line::from(Span::styled(
        "Buy to increase clips/sec",
        Style::default().fg(Color::Gray),
    )));

    for (i, u) in snap.upgrades.iter().enumerate() {
        let action = BUY_UPGRADE_BASE + i as u16;
        let key = upgrade_key(i)
            .map(|k| format!("[{}] ", k.to_ascii_uppercase()))
            .unwrap_or_else(|| "    ".into());
        let (buy_text, buy_style) = buy_label(u);
        let name_style = if u.affordable {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        cl.push_clickable(
            Line::from(vec![
                Span::styled(
                    key,
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
                Span::styled(u.name.clone(), name_style),
                Span::raw("  "),
                Span::styled(buy_text, buy_style),
            ]),
            action,
        );
        if !narrow {
            cl.push_clickable(
                Line::from(Span::styled(
                    format!("    {}", u.description),
                    Style::default().fg(Color::DarkGray),
                )),
                action,
            );
        }
        cl.push_clickable(
            Line::from(Span::styled(
                format!("    {}", owned_line(u)),
                Style::default().fg(Color::Magenta),
            )),
            action,
        );
    }

    {
        let mut cs = click_state.borrow_mut();
        cl.register_targets(area, &mut cs, 1, 1);
    }

    let shop = Paragraph::new(cl.into_lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(" Upgrades "),
    );
    f.render_widget(shop, area);
}

fn render_help(snap: &Snapshot, f: &mut Frame, area: Rect) {
    let last_key = upgrade_key(snap.upgrades.len().saturating_sub(1))
        .unwrap_or('z')
        .to_ascii_uppercase();
    let help = Paragraph::new(Line::from(Span::styled(
        format!("[Space] punch out a clip   [A-{}] buy upgrade", last_key),
        Style::default().fg(Color::DarkGray),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::farm::state::FarmState;
    use ratzilla::ratatui::backend::TestBackend;
    use ratzilla::ratatui::Terminal;

    /// Draw one frame at `cols`x`rows` and return the registered targets.
    fn targets_after_render(cols: u16, rows: u16) -> ClickState {
        let snap = FarmState::new().snapshot();
        let click_state = Rc::new(RefCell::new(ClickState::new()));
        let mut terminal = Terminal::new(TestBackend::new(cols, rows)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                click_state.borrow_mut().reset(area.width, area.height);
                render(&snap, f, area, &click_state);
            })
            .unwrap();
        click_state.replace(ClickState::new())
    }

    fn view(affordable: bool, owned: u32) -> UpgradeView {
        let mut state = FarmState::new();
        state.upgrades[0].owned = owned;
        let mut v = state.snapshot().upgrades[0].clone();
        v.affordable = affordable;
        v
    }

    #[test]
    fn buy_label_when_affordable() {
        let (text, _) = buy_label(&view(true, 0));
        assert_eq!(text, "Buy — 10");
    }

    #[test]
    fn buy_label_when_short() {
        let (text, style) = buy_label(&view(false, 0));
        assert_eq!(text, "Need 10");
        assert_eq!(style.fg, Some(Color::DarkGray));
    }

    #[test]
    fn owned_line_shows_contribution() {
        assert_eq!(
            owned_line(&view(false, 3)),
            "Owned: 3  •  +0.30 c/s  (each: 0.10 c/s)"
        );
        assert_eq!(owned_line(&view(false, 0)), "Owned: 0  •  +0 c/s  (each: 0.10 c/s)");
    }

    #[test]
    fn produce_button_is_the_only_produce_target() {
        let cs = targets_after_render(80, 40);
        // header 0..4, button 4..7
        assert_eq!(cs.hit_test(40, 5), Some(PRODUCE));
        let produce_targets = cs.targets.iter().filter(|t| t.action_id == PRODUCE).count();
        assert_eq!(produce_targets, 1);
    }

    #[test]
    fn help_bar_is_not_clickable() {
        let cs = targets_after_render(80, 40);
        for row in 37..40 {
            assert_eq!(cs.hit_test(40, row), None, "row {row}");
        }
    }

    #[test]
    fn shop_rows_buy_their_upgrade() {
        let cs = targets_after_render(80, 40);
        // shop starts at row 10; border, caption, then 3 rows per entry
        assert_eq!(cs.hit_test(5, 12), Some(BUY_UPGRADE_BASE));
        assert_eq!(cs.hit_test(5, 15), Some(BUY_UPGRADE_BASE + 1));
    }
}
