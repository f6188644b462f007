//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed logical tick only
//! - Seeded RNG only
//! - Stable iteration order (obstacle pool index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;
pub mod trace;

pub use collision::Rect;
pub use state::{GameEvent, GameState, Player, RunState, Skin};
pub use tick::{TickInput, tick};
pub use trace::{TickRecord, Trace, record};
