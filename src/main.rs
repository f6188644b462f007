//! Cave Hopper entry point
//!
//! Loads assets, then runs input -> tick -> render until the window is closed.

use macroquad::prelude::*;

use cave_hopper::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use cave_hopper::platform::{FixedStep, HostInput, wall_clock_seed};
use cave_hopper::renderer::Presenter;
use cave_hopper::sim::{GameEvent, GameState, tick};

fn window_conf() -> Conf {
    Conf {
        window_title: "Cave Hopper".to_owned(),
        window_width: SCREEN_WIDTH,
        window_height: SCREEN_HEIGHT,
        window_resizable: false,
        fullscreen: false,
        ..Default::default()
    }
}

fn log_event(event: GameEvent) {
    match event {
        GameEvent::CoinCollected { coins } => log::debug!("Coin collected ({coins} this run)"),
        GameEvent::LifeLost { lives_left } => log::info!("Hit a brick, {lives_left} lives left"),
        GameEvent::GameOver {
            final_score,
            high_score,
        } => log::info!("Game over with score {final_score} (high score {high_score})"),
        GameEvent::InvincibilityEnded => log::debug!("Invincibility ended"),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Cave Hopper starting...");

    let presenter = match Presenter::load().await {
        Ok(presenter) => presenter,
        Err(e) => {
            log::error!("Failed to initialize game: {e:#}");
            std::process::exit(1);
        }
    };

    // Window close becomes a flag we check once per frame
    prevent_quit();

    let seed = wall_clock_seed();
    let mut clock = FixedStep::new();
    let mut state = GameState::new(seed, clock.now_ms());
    log::info!("Game initialized with seed: {}", seed);

    loop {
        let input = HostInput::sample();
        if input.quit_requested {
            break;
        }

        let tick_input = input.tick_input();
        for now_ms in clock.frame(get_frame_time()) {
            for event in tick(&mut state, &tick_input, now_ms) {
                log_event(event);
            }
        }

        presenter.render(&state, clock.now_ms());
        next_frame().await;
    }

    log::info!(
        "Shutting down after {} ticks (high score {})",
        state.time_ticks,
        state.run.high_score.max(state.run.score)
    );
}
