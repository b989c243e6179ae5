//! Road Dodger entry point
//!
//! Window setup and the frame driver: poll input, advance the simulation,
//! render on the fixed timestep, and cap the loop near 60 Hz.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use macroquad::input::prevent_quit;
use macroquad::window::{next_frame, Conf};

use road_dodger::consts::*;
use road_dodger::input;
use road_dodger::render::{draw_frame, draw_game_over, Road, ScreenCanvas};
use road_dodger::sim::{tick, GamePhase, GameState};

fn window_conf() -> Conf {
    Conf {
        window_title: "Road Dodger".to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    // Route window-close requests through the quit flag so the loop exits
    // cleanly instead of the process being torn down mid-frame
    prevent_quit();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    log::info!("starting, seed {seed}");

    let mut state = GameState::new(seed);
    let mut road = Road::new();
    let mut canvas = ScreenCanvas::new();

    let timestep = Duration::from_millis(TIMESTEP_MS);
    let frame_delay = Duration::from_millis(FRAME_DELAY_MS);
    let mut last_render = Instant::now();

    loop {
        let frame_start = Instant::now();

        let input = input::poll();
        if input.quit_requested {
            log::info!("quit requested");
            break;
        }

        // Movement, obstacle advance/cull, collision and spawn cadence all
        // run at the raw loop rate
        tick(&mut state, &input.tick);

        // Rendering is gated by the wall-clock timestep
        if frame_start.duration_since(last_render) >= timestep {
            last_render = frame_start;
            draw_frame(&mut canvas, &state, &mut road);
        }

        if state.phase == GamePhase::GameOver {
            break;
        }

        // Blocking delay capping the loop near 60 Hz; this also bounds the
        // spawn cadence and input latency
        let elapsed = frame_start.elapsed();
        if elapsed < frame_delay {
            std::thread::sleep(frame_delay - elapsed);
        }
        next_frame().await;
    }

    if state.phase == GamePhase::GameOver {
        draw_game_over(&mut canvas);
        next_frame().await;
        std::thread::sleep(Duration::from_millis(GAME_OVER_HOLD_MS));
    }

    log::info!("shutting down after {} frames", state.frame_counter);
}
