use macroquad::prelude::*;
use tracing::warn;

use crate::application::Session;
use crate::domain::{Algorithm, Result, RulePreset, Tool};
use crate::rendering::screen_to_cell;

/// Apply the active tool under the mouse. Draw and erase follow a held
/// button; stamps fire once per click.
pub fn handle_mouse_edit(session: &mut Session) {
    let (mx, my) = mouse_position();
    let Some((x, y)) = screen_to_cell(&session.grid, mx, my) else {
        return;
    };

    let fire = match session.config.tool {
        Tool::Stamp => is_mouse_button_pressed(MouseButton::Left),
        Tool::Draw | Tool::Erase => is_mouse_button_down(MouseButton::Left),
    };
    if fire {
        report(session.apply_tool(x, y));
    }
}

/// Process keyboard input
pub fn process_keyboard_input(session: &mut Session) {
    if is_key_pressed(KeyCode::Space) {
        session.toggle_running();
    }
    if is_key_pressed(KeyCode::N) {
        report(session.step().map(|_| ()));
    }
    if is_key_pressed(KeyCode::C) {
        report(session.clear());
    }
    if is_key_pressed(KeyCode::R) {
        report(session.randomize(&mut ::rand::rng()));
    }
    if is_key_pressed(KeyCode::Up) {
        session.adjust_speed(1.0);
    }
    if is_key_pressed(KeyCode::Down) {
        session.adjust_speed(-1.0);
    }

    let rules = [
        (KeyCode::Key1, RulePreset::Conway),
        (KeyCode::Key2, RulePreset::HighLife),
        (KeyCode::Key3, RulePreset::Seeds),
    ];
    for (key, rule) in rules {
        if is_key_pressed(key) {
            session.set_rule(rule);
        }
    }

    let tools = [
        (KeyCode::D, Tool::Draw),
        (KeyCode::E, Tool::Erase),
        (KeyCode::S, Tool::Stamp),
    ];
    for (key, tool) in tools {
        if is_key_pressed(key) {
            session.set_tool(tool);
        }
    }

    if is_key_pressed(KeyCode::W) {
        session.set_wrap_edges(!session.config.wrap_edges);
    }
    if is_key_pressed(KeyCode::P) {
        session.set_pattern(session.config.pattern.next());
    }
    if is_key_pressed(KeyCode::RightBracket) {
        report(session.set_brush_size(session.config.brush_size + 2));
    }
    if is_key_pressed(KeyCode::LeftBracket) && session.config.brush_size > 1 {
        report(session.set_brush_size(session.config.brush_size - 2));
    }
    if is_key_pressed(KeyCode::A) {
        session.config.algorithm = match session.config.algorithm {
            Algorithm::Serial => Algorithm::Parallel,
            Algorithm::Parallel => Algorithm::Serial,
        };
    }
}

fn report(result: Result<()>) {
    if let Err(err) = result {
        warn!(%err, "edit rejected");
    }
}
