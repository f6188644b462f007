//! Platform abstraction layer
//!
//! Handles the host side of the loop:
//! - Fixed-step pacing and the logical millisecond clock
//! - Input sampling (jump key, quit request)
//! - Wall-clock seeding

use std::time::{SystemTime, UNIX_EPOCH};

use macroquad::input::{KeyCode, is_key_down, is_quit_requested};

use crate::consts::{MAX_SUBSTEPS, TICK_MS};
use crate::sim::TickInput;

/// Longest frame the accumulator will absorb (seconds)
const MAX_FRAME_DT: f32 = 0.1;

/// Converts variable frame times into whole logical ticks
///
/// The clock handed to the simulation only moves in `TICK_MS` steps, so
/// timers stay in lockstep with physics no matter how fast frames arrive.
#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    /// Unspent frame time in microseconds
    accumulator_us: u64,
    now_ms: u32,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Logical time of the last tick handed out
    pub fn now_ms(&self) -> u32 {
        self.now_ms
    }

    /// Feed one frame's elapsed time and get back the timestamps of the
    /// ticks that should run this frame, oldest first
    pub fn frame(&mut self, dt: f32) -> Vec<u32> {
        let tick_us = TICK_MS as u64 * 1000;
        let dt_us = (f64::from(dt.clamp(0.0, MAX_FRAME_DT)) * 1_000_000.0).round() as u64;
        self.accumulator_us += dt_us;

        let mut ticks = Vec::new();
        while self.accumulator_us >= tick_us && (ticks.len() as u32) < MAX_SUBSTEPS {
            self.accumulator_us -= tick_us;
            self.now_ms = self.now_ms.wrapping_add(TICK_MS);
            ticks.push(self.now_ms);
        }
        ticks
    }
}

/// What the host saw on the input devices this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostInput {
    pub jump_held: bool,
    pub quit_requested: bool,
}

impl HostInput {
    /// Poll the window system (Space = jump, window close = quit)
    pub fn sample() -> Self {
        Self {
            jump_held: is_key_down(KeyCode::Space),
            quit_requested: is_quit_requested(),
        }
    }

    pub fn tick_input(&self) -> TickInput {
        TickInput {
            jump: self.jump_held,
        }
    }
}

/// Seed for the run RNG, taken from the wall clock (not reproducible)
pub fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
