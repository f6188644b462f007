//! Golden trace recording
//!
//! Runs a fresh game through a scripted input sequence and captures the
//! state after every tick. Two recordings with the same seed and inputs
//! serialize to identical JSON, which makes traces usable as regression
//! fixtures.

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::state::{GameEvent, GameState};
use super::tick::{TickInput, tick};

/// Snapshot of the observable state after one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickRecord {
    pub tick: u64,
    pub now_ms: u32,
    pub jump: bool,
    pub player: Rect,
    pub velocity: f32,
    pub invincible: bool,
    pub obstacles: Vec<Rect>,
    pub coin: Rect,
    pub score: u32,
    pub coins: u32,
    pub lives: u8,
    pub high_score: u32,
    pub events: Vec<GameEvent>,
}

impl TickRecord {
    fn capture(state: &GameState, input: &TickInput, now_ms: u32, events: Vec<GameEvent>) -> Self {
        Self {
            tick: state.time_ticks,
            now_ms,
            jump: input.jump,
            player: state.player.rect,
            velocity: state.player.velocity,
            invincible: state.player.is_invincible(),
            obstacles: state.obstacles.clone(),
            coin: state.coin,
            score: state.run.score,
            coins: state.run.coins,
            lives: state.run.lives,
            high_score: state.run.high_score,
            events,
        }
    }
}

/// A full recording
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub seed: u64,
    pub records: Vec<TickRecord>,
}

impl Trace {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// First tick at which two traces disagree
    pub fn first_divergence(&self, other: &Trace) -> Option<usize> {
        let common = self.records.len().min(other.records.len());
        (0..common)
            .find(|&i| self.records[i] != other.records[i])
            .or_else(|| (self.records.len() != other.records.len()).then_some(common))
    }
}

/// Record a run from `seed` driven by `(jump, now_ms)` pairs. The clock
/// starts at zero.
pub fn record(seed: u64, inputs: &[(bool, u32)]) -> Trace {
    let mut state = GameState::new(seed, 0);
    let records = inputs
        .iter()
        .map(|&(jump, now_ms)| {
            let input = TickInput { jump };
            let events = tick(&mut state, &input, now_ms);
            TickRecord::capture(&state, &input, now_ms, events)
        })
        .collect();

    Trace { seed, records }
}
