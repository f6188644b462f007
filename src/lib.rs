//! Cave Hopper - a side-scrolling cave arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, scrolling, collisions, scoring)
//! - `renderer`: Draw list construction and the macroquad presenter
//! - `platform`: Host clock, input sampling and fixed-step pacing

pub mod platform;
pub mod renderer;
pub mod sim;

pub use sim::{GameEvent, GameState, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Logical tick length in milliseconds (physics constants are tuned per tick)
    pub const TICK_MS: u32 = 10;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Screen dimensions
    pub const SCREEN_WIDTH: i32 = 640;
    pub const SCREEN_HEIGHT: i32 = 480;

    /// Tile edge for floor/roof strips and every sprite
    pub const TILE_SIZE: i32 = 32;
    /// Top of the playfield (bottom edge of the roof strip)
    pub const CEILING_Y: i32 = 64;
    /// Bottom of the playfield (top edge of the floor strip)
    pub const FLOOR_Y: i32 = 448;
    /// Roof strip is drawn one tile above the ceiling line
    pub const ROOF_STRIP_Y: i32 = CEILING_Y - TILE_SIZE;

    /// Player defaults
    pub const PLAYER_SIZE: i32 = 32;
    pub const PLAYER_SPAWN_X: i32 = 320;
    pub const PLAYER_SPAWN_Y: i32 = FLOOR_Y - PLAYER_SIZE;

    /// Velocity added per tick while jump is released
    pub const GRAVITY: f32 = 0.5;
    /// Velocity pinned every tick while jump is held
    pub const JUMP_STRENGTH: i32 = -7;
    /// Rail rebound; the roof uses half of it, the floor all of it (negated)
    pub const BOUNCE_STRENGTH: i32 = 10;

    /// Obstacles
    pub const OBSTACLE_COUNT: usize = 5;
    pub const OBSTACLE_WIDTH: i32 = 32;
    pub const OBSTACLE_SPACING: i32 = 300;
    /// Leftward scroll per tick, shared by obstacles and the coin
    pub const SCROLL_SPEED: i32 = 4;
    pub const MIN_OBSTACLE_HEIGHT: i32 = 64;
    /// Exclusive upper bound
    pub const MAX_OBSTACLE_HEIGHT: i32 = 160;

    /// Coin
    pub const COIN_SIZE: i32 = 32;
    pub const MIN_COIN_Y: i32 = 64;
    /// Exclusive upper bound
    pub const MAX_COIN_Y: i32 = 416;
    pub const COIN_VALUE: u32 = 10;

    /// Run rules
    pub const STARTING_LIVES: u8 = 3;
    pub const INVINCIBILITY_MS: u32 = 3000;
}
