//! Game state and core simulation types
//!
//! Everything the tick touches lives here, including the RNG, so a state
//! plus an input sequence fully determines the rest of the run.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// Which player texture the presenter should use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Skin {
    Normal,
    Invincible,
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player grabbed the coin
    CoinCollected { coins: u32 },
    /// Player hit a brick and has lives left
    LifeLost { lives_left: u8 },
    /// Last life lost; the run was reset in the same tick
    GameOver { final_score: u32, high_score: u32 },
    /// Post-hit grace period ran out
    InvincibilityEnded,
}

/// The player sprite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Vertical velocity in pixels per tick (positive is down)
    pub velocity: f32,
    /// Jump input seen on the last tick
    pub jumping: bool,
    /// Timestamp (ms) at which the current invincibility window began
    pub invincible_since: Option<u32>,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            rect: spawn_rect(),
            velocity: 0.0,
            jumping: false,
            invincible_since: None,
        }
    }
}

impl Player {
    pub fn is_invincible(&self) -> bool {
        self.invincible_since.is_some()
    }

    pub fn skin(&self) -> Skin {
        if self.is_invincible() {
            Skin::Invincible
        } else {
            Skin::Normal
        }
    }

    /// Put the player back on the floor at the spawn column
    pub fn respawn(&mut self) {
        self.rect = spawn_rect();
    }
}

fn spawn_rect() -> Rect {
    Rect::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y, PLAYER_SIZE, PLAYER_SIZE)
}

/// Score bookkeeping for the current life cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunState {
    /// Derived every tick from elapsed seconds and coins
    pub score: u32,
    /// Coins collected since the last reset
    pub coins: u32,
    pub lives: u8,
    /// Timestamp (ms) the current run started
    pub start_ms: u32,
    /// Best score seen this session
    pub high_score: u32,
}

impl RunState {
    pub fn new(now_ms: u32) -> Self {
        Self {
            score: 0,
            coins: 0,
            lives: STARTING_LIVES,
            start_ms: now_ms,
            high_score: 0,
        }
    }

    /// Whole seconds since the run started
    pub fn elapsed_seconds(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.start_ms) / 1000
    }

    /// Score as a pure function of elapsed time and coins
    pub fn score_at(&self, now_ms: u32) -> u32 {
        self.elapsed_seconds(now_ms) + self.coins * COIN_VALUE
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Shared random source for every recycle and reset
    pub rng: Pcg32,
    pub player: Player,
    /// Fixed pool, recycled in place
    pub obstacles: Vec<Rect>,
    pub coin: Rect,
    pub run: RunState,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game state with the given seed, starting the clock at `now_ms`
    pub fn new(seed: u64, now_ms: u32) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Player::default(),
            obstacles: Vec::with_capacity(OBSTACLE_COUNT),
            coin: Rect::new(0, 0, COIN_SIZE, COIN_SIZE),
            run: RunState::new(now_ms),
            time_ticks: 0,
        };

        for i in 0..OBSTACLE_COUNT {
            let x = SCREEN_WIDTH + i as i32 * OBSTACLE_SPACING;
            let obstacle = state.random_obstacle(x);
            state.obstacles.push(obstacle);
        }
        state.place_coin_offscreen();

        state
    }

    /// Brick at column `x` with a random height, hanging from the roof or
    /// standing on the floor
    fn random_obstacle(&mut self, x: i32) -> Rect {
        let h = self.rng.random_range(MIN_OBSTACLE_HEIGHT..MAX_OBSTACLE_HEIGHT);
        let on_top: bool = self.rng.random();
        let y = if on_top { CEILING_Y } else { FLOOR_Y - h };
        Rect::new(x, y, OBSTACLE_WIDTH, h)
    }

    fn random_coin_y(&mut self) -> i32 {
        self.rng.random_range(MIN_COIN_Y..MAX_COIN_Y)
    }

    /// Send obstacle `index` back to the right edge
    pub fn recycle_obstacle(&mut self, index: usize) {
        self.obstacles[index] = self.random_obstacle(SCREEN_WIDTH);
    }

    /// Send the coin back to the right edge at a fresh height
    pub fn recycle_coin(&mut self) {
        self.coin.pos.x = SCREEN_WIDTH;
        self.coin.pos.y = self.random_coin_y();
    }

    /// Coin somewhere beyond the right edge, used at start and after game over
    fn place_coin_offscreen(&mut self) {
        self.coin.pos.x = SCREEN_WIDTH + self.rng.random_range(0..SCREEN_WIDTH - COIN_SIZE);
        self.coin.pos.y = self.random_coin_y();
    }

    /// Full restart after the last life is lost. The high score survives.
    pub fn reset_run(&mut self, now_ms: u32) {
        self.run.high_score = self.run.high_score.max(self.run.score);
        self.run.lives = STARTING_LIVES;
        self.run.score = 0;
        self.run.coins = 0;
        self.run.start_ms = now_ms;
        self.player.respawn();

        for i in 0..self.obstacles.len() {
            let x = SCREEN_WIDTH + self.rng.random_range(0..SCREEN_WIDTH);
            self.obstacles[i] = self.random_obstacle(x);
        }
        self.place_coin_offscreen();
    }
}
