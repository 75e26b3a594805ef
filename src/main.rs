use macroquad::prelude::*;
use tracing::{info, warn};

use heat_life::{Session, SimulationConfig, input, rendering};

const GRID_COLS: usize = 120;
const GRID_ROWS: usize = 80;

fn window_conf() -> Conf {
    Conf {
        window_title: "Heat Life".to_owned(),
        window_width: 1200,
        window_height: 870,
        window_resizable: true,
        ..Default::default()
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();

    let mut session = match Session::new(GRID_COLS, GRID_ROWS, SimulationConfig::default()) {
        Ok(session) => session,
        Err(err) => {
            warn!(%err, "invalid startup configuration");
            return;
        }
    };
    if let Err(err) = session.randomize(&mut ::rand::rng()) {
        warn!(%err, "initial randomize failed");
    }
    info!(cols = GRID_COLS, rows = GRID_ROWS, "starting viewer");

    loop {
        input::process_keyboard_input(&mut session);
        input::handle_mouse_edit(&mut session);

        if let Err(err) = session.tick(get_frame_time()) {
            warn!(%err, "step failed");
            session.is_running = false;
        }

        clear_background(Color::from_rgba(15, 15, 15, 255));
        rendering::draw_grid(&session.grid, &session.heat);
        rendering::draw_hud(&session);

        next_frame().await;
    }
}
