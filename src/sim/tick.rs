//! Fixed timestep simulation tick
//!
//! One call advances the cave by one logical tick. Physics constants are
//! per tick, not per second; timers (score, invincibility) use the caller's
//! millisecond clock.

use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Jump key is held down
    pub jump: bool,
}

/// Advance the game state by one tick at time `now_ms`
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: u32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    step_player(state, input);
    step_obstacles(state, now_ms, &mut events);
    step_coin(state, &mut events);

    // Check if invincibility period is over
    if let Some(since) = state.player.invincible_since {
        if now_ms.wrapping_sub(since) >= INVINCIBILITY_MS {
            state.player.invincible_since = None;
            events.push(GameEvent::InvincibilityEnded);
        }
    }

    state.run.score = state.run.score_at(now_ms);
    events
}

impl GameState {
    /// Run one tick with the jump key state sampled by the host
    pub fn advance(&mut self, jump_held: bool, now_ms: u32) -> Vec<GameEvent> {
        tick(self, &TickInput { jump: jump_held }, now_ms)
    }
}

/// Gravity or jump, then clamp to the roof and floor rails
fn step_player(state: &mut GameState, input: &TickInput) {
    let player = &mut state.player;
    player.jumping = input.jump;

    // Holding jump pins the velocity every tick instead of adding a single kick
    if input.jump {
        player.velocity = JUMP_STRENGTH as f32;
    } else {
        player.velocity += GRAVITY;
    }
    player.rect.pos.y += player.velocity as i32;

    if player.rect.y() <= CEILING_Y {
        player.rect.pos.y = CEILING_Y;
        player.velocity = (BOUNCE_STRENGTH / 2) as f32;
    }
    let floor_limit = FLOOR_Y - player.rect.h();
    if player.rect.y() >= floor_limit {
        player.rect.pos.y = floor_limit;
        player.velocity = -BOUNCE_STRENGTH as f32;
    }
}

/// Scroll, recycle and collide each brick in pool order
fn step_obstacles(state: &mut GameState, now_ms: u32, events: &mut Vec<GameEvent>) {
    // Indexed: a game over rewrites the whole pool mid-walk
    for i in 0..state.obstacles.len() {
        state.obstacles[i].pos.x -= SCROLL_SPEED;
        if state.obstacles[i].is_off_left() {
            state.recycle_obstacle(i);
        }

        if state.player.is_invincible() || !state.player.rect.intersects(&state.obstacles[i]) {
            continue;
        }

        state.run.lives = state.run.lives.saturating_sub(1);
        if state.run.lives == 0 {
            let final_score = state.run.score;
            state.reset_run(now_ms);
            events.push(GameEvent::GameOver {
                final_score,
                high_score: state.run.high_score,
            });
        } else {
            state.player.invincible_since = Some(now_ms);
            state.player.respawn();
            events.push(GameEvent::LifeLost {
                lives_left: state.run.lives,
            });
        }
    }
}

fn step_coin(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.coin.pos.x -= SCROLL_SPEED;
    if state.coin.is_off_left() {
        state.recycle_coin();
    }

    if !state.player.is_invincible() && state.player.rect.intersects(&state.coin) {
        state.run.coins += 1;
        state.recycle_coin();
        events.push(GameEvent::CoinCollected {
            coins: state.run.coins,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collision::Rect;
    use crate::sim::state::Skin;
    use proptest::prelude::*;

    /// State with every brick and the coin parked far off to the right
    fn quiet_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed, 0);
        for (i, obstacle) in state.obstacles.iter_mut().enumerate() {
            obstacle.pos.x = 10_000 + i as i32 * 300;
        }
        state.coin.pos.x = 20_000;
        state
    }

    /// Put a brick right where the player will be after this tick's scroll
    fn brick_on_player(state: &mut GameState, index: usize) {
        let player = state.player.rect;
        state.obstacles[index] = Rect::new(player.x() + SCROLL_SPEED, CEILING_Y, 32, 400);
    }

    #[test]
    fn test_gravity_accumulates() {
        let mut state = quiet_state(1);
        state.player.rect.pos.y = 200;
        state.player.velocity = 0.0;

        state.advance(false, 10);
        assert_eq!(state.player.velocity, 0.5);
        assert_eq!(state.player.rect.y(), 200);

        state.advance(false, 20);
        assert_eq!(state.player.velocity, 1.0);
        assert_eq!(state.player.rect.y(), 201);
    }

    #[test]
    fn test_jump_pins_velocity() {
        let mut state = quiet_state(1);
        state.player.rect.pos.y = 300;

        for n in 1..=5 {
            state.advance(true, n * 10);
            assert_eq!(state.player.velocity, -7.0);
            assert!(state.player.jumping);
        }
        assert_eq!(state.player.rect.y(), 300 - 35);
    }

    #[test]
    fn test_roof_rail_bounce() {
        let mut state = quiet_state(1);
        state.player.rect.pos.y = 68;

        state.advance(true, 10);
        assert_eq!(state.player.rect.y(), CEILING_Y);
        assert_eq!(state.player.velocity, 5.0);
    }

    #[test]
    fn test_floor_rail_bounce() {
        let mut state = quiet_state(1);
        state.player.rect.pos.y = 410;
        state.player.velocity = 9.0;

        state.advance(false, 10);
        assert_eq!(state.player.rect.y(), FLOOR_Y - PLAYER_SIZE);
        assert_eq!(state.player.velocity, -10.0);
    }

    #[test]
    fn test_obstacles_scroll() {
        let mut state = GameState::new(5, 0);
        let before: Vec<i32> = state.obstacles.iter().map(|o| o.x()).collect();
        state.advance(false, 10);
        for (old_x, obstacle) in before.iter().zip(&state.obstacles) {
            assert_eq!(obstacle.x(), old_x - SCROLL_SPEED);
        }
    }

    #[test]
    fn test_obstacle_recycles_past_left_edge() {
        let mut state = quiet_state(9);
        state.obstacles[3] = Rect::new(-30, CEILING_Y, 32, 100);

        state.advance(false, 10);
        let recycled = state.obstacles[3];
        assert_eq!(recycled.x(), SCREEN_WIDTH);
        assert!((64..160).contains(&recycled.h()));
        assert!(recycled.y() == 64 || recycled.y() == 448 - recycled.h());
    }

    #[test]
    fn test_hit_grants_invincibility() {
        let mut state = quiet_state(2);
        state.player.rect.pos.y = 200;
        brick_on_player(&mut state, 0);
        let obstacles_before = state.obstacles.clone();

        let events = state.advance(false, 1_000);

        assert_eq!(state.run.lives, 2);
        assert_eq!(state.player.invincible_since, Some(1_000));
        assert_eq!(state.player.skin(), Skin::Invincible);
        assert_eq!(state.player.rect, Rect::new(320, 416, 32, 32));
        assert_eq!(events, vec![GameEvent::LifeLost { lives_left: 2 }]);
        // Only the player moves back; bricks just keep scrolling
        for (before, after) in obstacles_before.iter().zip(&state.obstacles) {
            assert_eq!(after.x(), before.x() - SCROLL_SPEED);
            assert_eq!(after.h(), before.h());
        }
    }

    #[test]
    fn test_last_life_resets_run() {
        let mut state = quiet_state(4);
        state.run.lives = 1;
        state.run.coins = 2;
        state.run.score = 27;
        state.run.high_score = 15;
        state.player.rect.pos.y = 200;
        brick_on_player(&mut state, 1);

        let events = state.advance(false, 7_000);

        assert_eq!(state.run.lives, 3);
        assert_eq!(state.run.score, 0);
        assert_eq!(state.run.coins, 0);
        assert_eq!(state.run.start_ms, 7_000);
        assert_eq!(state.run.high_score, 27);
        assert_eq!(state.player.rect.pos.x, 320);
        assert_eq!(state.player.rect.pos.y, 416);
        assert!(!state.player.is_invincible());
        assert_eq!(
            events,
            vec![GameEvent::GameOver {
                final_score: 27,
                high_score: 27
            }]
        );
        // Every brick is back beyond the right edge (later ones scrolled once more)
        for obstacle in &state.obstacles {
            assert!(obstacle.x() >= SCREEN_WIDTH - SCROLL_SPEED);
        }
    }

    #[test]
    fn test_last_life_keeps_higher_best() {
        let mut state = quiet_state(4);
        state.run.lives = 1;
        state.run.score = 3;
        state.run.high_score = 50;
        state.player.rect.pos.y = 200;
        brick_on_player(&mut state, 0);

        state.advance(false, 7_000);
        assert_eq!(state.run.high_score, 50);
        assert_eq!(state.run.lives, 3);
    }

    #[test]
    fn test_invincibility_window() {
        let mut state = quiet_state(8);
        state.player.rect.pos.y = 200;
        brick_on_player(&mut state, 0);
        let t0 = 5_000;
        state.advance(false, t0);
        assert!(state.player.is_invincible());

        // Keep a brick and the coin glued to the player for the whole window
        for now in [t0 + 10, t0 + 1_500, t0 + 2_999] {
            brick_on_player(&mut state, 0);
            let player = state.player.rect;
            state.coin = Rect::new(player.x() + SCROLL_SPEED, player.y(), 32, 32);
            let events = state.advance(false, now);
            assert!(state.player.is_invincible(), "still invincible at {now}");
            assert!(events.is_empty());
        }
        assert_eq!(state.run.lives, 2);
        assert_eq!(state.run.coins, 0);

        state.obstacles[0].pos.x = 10_000;
        state.coin.pos.x = 20_000;
        let events = state.advance(false, t0 + 3_000);
        assert!(!state.player.is_invincible());
        assert_eq!(state.player.skin(), Skin::Normal);
        assert_eq!(events, vec![GameEvent::InvincibilityEnded]);
    }

    #[test]
    fn test_coin_pickup() {
        let mut state = quiet_state(6);
        state.player.rect.pos.y = 200;
        let player = state.player.rect;
        state.coin = Rect::new(player.x() + SCROLL_SPEED + 10, player.y() + 5, 32, 32);

        let events = state.advance(false, 10);

        assert_eq!(state.run.coins, 1);
        assert_eq!(state.coin.x(), SCREEN_WIDTH);
        assert!((MIN_COIN_Y..MAX_COIN_Y).contains(&state.coin.y()));
        assert_eq!(events, vec![GameEvent::CoinCollected { coins: 1 }]);
        assert_eq!(state.run.score, 10);

        // Recycled coin is far away, so no double count
        state.advance(false, 20);
        assert_eq!(state.run.coins, 1);
    }

    #[test]
    fn test_coin_recycles_past_left_edge() {
        let mut state = quiet_state(6);
        state.coin.pos.x = -29;
        state.advance(false, 10);
        assert_eq!(state.coin.x(), SCREEN_WIDTH);
        assert!((MIN_COIN_Y..MAX_COIN_Y).contains(&state.coin.y()));
    }

    #[test]
    fn test_score_tracks_clock_and_coins() {
        let mut state = quiet_state(3);
        state.advance(false, 999);
        assert_eq!(state.run.score, 0);
        state.advance(false, 4_200);
        assert_eq!(state.run.score, 4);
        state.run.coins = 2;
        state.advance(false, 4_210);
        assert_eq!(state.run.score, 24);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999, 0);
        let mut state2 = GameState::new(99999, 0);

        for n in 1..2_000u32 {
            let jump = (n / 37) % 2 == 0;
            let e1 = state1.advance(jump, n * TICK_MS);
            let e2 = state2.advance(jump, n * TICK_MS);
            assert_eq!(e1, e2);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.player.rect, state2.player.rect);
        assert_eq!(state1.obstacles, state2.obstacles);
        assert_eq!(state1.coin, state2.coin);
        assert_eq!(state1.run.score, state2.run.score);
    }

    proptest! {
        #[test]
        fn player_stays_between_rails(
            seed in any::<u64>(),
            inputs in proptest::collection::vec(any::<bool>(), 1..400),
        ) {
            let mut state = GameState::new(seed, 0);
            for (n, jump) in inputs.into_iter().enumerate() {
                state.advance(jump, (n as u32 + 1) * TICK_MS);
                let y = state.player.rect.y();
                prop_assert!(y >= CEILING_Y);
                prop_assert!(y <= FLOOR_Y - PLAYER_SIZE);
            }
        }

        #[test]
        fn score_is_elapsed_plus_coins(
            seed in any::<u64>(),
            ticks in 1u32..600,
        ) {
            let mut state = GameState::new(seed, 0);
            for n in 1..=ticks {
                let now = n * TICK_MS;
                state.advance(n % 3 == 0, now);
                let expected = now.wrapping_sub(state.run.start_ms) / 1000 + state.run.coins * 10;
                prop_assert_eq!(state.run.score, expected);
            }
        }

        #[test]
        fn offscreen_obstacle_always_recycles(
            seed in any::<u64>(),
            index in 0usize..OBSTACLE_COUNT,
            x in -200i32..-SCROLL_SPEED - 31,
        ) {
            let mut state = quiet_state(seed);
            state.obstacles[index].pos.x = x;
            state.advance(false, TICK_MS);
            let obstacle = state.obstacles[index];
            prop_assert_eq!(obstacle.x(), SCREEN_WIDTH);
            prop_assert!((MIN_OBSTACLE_HEIGHT..MAX_OBSTACLE_HEIGHT).contains(&obstacle.h()));
        }
    }
}
