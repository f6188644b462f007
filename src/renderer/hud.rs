//! Status line shown across the top of the screen

use crate::sim::GameState;

/// Point size of the status line
pub const HUD_FONT_SIZE: u16 = 24;

/// Format the status line for `now_ms`
pub fn hud_line(state: &GameState, now_ms: u32) -> String {
    let run = &state.run;
    format!(
        "Time: {}  Coins: {}  Lives: {}  Score: {}  Highscore: {}",
        run.elapsed_seconds(now_ms),
        run.coins,
        run.lives,
        run.score,
        run.high_score
    )
}

/// Left edge that centers a line of `text_width` pixels on a `screen_width` screen
pub fn centered_x(screen_width: i32, text_width: f32) -> f32 {
    ((screen_width as f32 - text_width) / 2.0).floor()
}
