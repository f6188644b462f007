//! Draw list construction
//!
//! Turns a game state into an ordered list of textured rectangles. Layer
//! order is back to front: floor and roof strips, bricks, coin, player.

use crate::consts::{FLOOR_Y, ROOF_STRIP_Y, SCREEN_WIDTH, TILE_SIZE};
use crate::sim::{GameState, Rect, Skin};

/// Which texture a sprite is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Floor,
    Roof,
    Obstacle,
    Coin,
    Player(Skin),
}

/// One textured rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub rect: Rect,
}

/// Tile a horizontal strip across the whole screen width (one extra tile
/// past the right edge is fine, it gets clipped)
fn strip(kind: SpriteKind, y: i32) -> impl Iterator<Item = Sprite> {
    (0..=SCREEN_WIDTH)
        .step_by(TILE_SIZE as usize)
        .map(move |x| Sprite {
            kind,
            rect: Rect::new(x, y, TILE_SIZE, TILE_SIZE),
        })
}

/// Build the sprites for one frame
pub fn draw_list(state: &GameState) -> Vec<Sprite> {
    let mut sprites: Vec<Sprite> = strip(SpriteKind::Floor, FLOOR_Y)
        .chain(strip(SpriteKind::Roof, ROOF_STRIP_Y))
        .collect();

    sprites.extend(state.obstacles.iter().map(|&rect| Sprite {
        kind: SpriteKind::Obstacle,
        rect,
    }));
    sprites.push(Sprite {
        kind: SpriteKind::Coin,
        rect: state.coin,
    });
    sprites.push(Sprite {
        kind: SpriteKind::Player(state.player.skin()),
        rect: state.player.rect,
    });

    sprites
}
