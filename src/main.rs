use std::{cell::RefCell, io, rc::Rc};

use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};

use paperclip_farm::farm::FarmGame;
use paperclip_farm::input::{ClickState, InputEvent};
use paperclip_farm::logging;

/// Milliseconds from `performance.now()`, or `None` outside a browser.
fn performance_now() -> Option<f64> {
    web_sys::window()?.performance().map(|p| p.now())
}

/// Resolve a mouse position against the grid container's bounding rect.
fn dom_pixel_to_action(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<u16> {
    let document = web_sys::window()?.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let action = cs.resolve_pixel(
        mouse_x as f64 - rect.left(),
        mouse_y as f64 - rect.top(),
        rect.width(),
        rect.height(),
    );
    log::trace!("click at ({mouse_x}, {mouse_y}) -> {action:?}");
    action
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    if let Err(e) = logging::init(level) {
        web_sys::console::warn_1(&format!("logger already installed: {e}").into());
    }

    let game = Rc::new(RefCell::new(FarmGame::new()));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    // Mouse/touch click handler
    terminal.on_mouse_event({
        let game = game.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }
            let action = dom_pixel_to_action(mouse_event.x, mouse_event.y, &click_state.borrow());
            if let Some(id) = action {
                game.borrow_mut().handle_input(&InputEvent::Click(id));
            }
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let game = game.clone();
        move |key_event| {
            let event = match key_event.code {
                KeyCode::Char(c) => InputEvent::Key(c),
                KeyCode::Enter => InputEvent::Key('\n'),
                _ => return,
            };
            game.borrow_mut().handle_input(&event);
        }
    });

    log::info!("paperclip farm started");

    terminal.draw_web({
        let click_state = click_state.clone();
        move |f| {
            let area = f.area();
            let mut gs = game.borrow_mut();
            if let Some(now) = performance_now() {
                gs.frame(now);
            }

            click_state.borrow_mut().reset(area.width, area.height);
            gs.render(f, area, &click_state);
        }
    });

    Ok(())
}
