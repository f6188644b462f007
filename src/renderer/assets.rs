//! Texture and font loading
//!
//! Asset paths are compiled in. Every image is required; the font is not,
//! since the game is playable without the status line.

use anyhow::{Result, anyhow};
use macroquad::text::{Font, load_ttf_font};
use macroquad::texture::{FilterMode, Texture2D, load_texture};

use super::sprites::SpriteKind;
use crate::sim::Skin;

pub const FLOOR_PATH: &str = "assets/floor.png";
pub const ROOF_PATH: &str = "assets/roof.png";
pub const PLAYER_PATH: &str = "assets/player.png";
pub const INVINCIBLE_PATH: &str = "assets/invincible.png";
pub const OBSTACLE_PATH: &str = "assets/brick.png";
pub const COIN_PATH: &str = "assets/coin.png";

#[cfg(target_os = "macos")]
pub const FONT_PATH: &str = "/System/Library/Fonts/Supplemental/Arial.ttf";
#[cfg(target_os = "windows")]
pub const FONT_PATH: &str = "C:\\Windows\\Fonts\\arial.ttf";
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub const FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

/// Every texture the presenter draws with
pub struct Textures {
    pub floor: Texture2D,
    pub roof: Texture2D,
    pub player: Texture2D,
    pub invincible: Texture2D,
    pub obstacle: Texture2D,
    pub coin: Texture2D,
}

impl Textures {
    /// Load all images, failing on the first one that cannot be read
    pub async fn load() -> Result<Self> {
        Ok(Self {
            floor: load_tile(FLOOR_PATH).await?,
            roof: load_tile(ROOF_PATH).await?,
            player: load_tile(PLAYER_PATH).await?,
            invincible: load_tile(INVINCIBLE_PATH).await?,
            obstacle: load_tile(OBSTACLE_PATH).await?,
            coin: load_tile(COIN_PATH).await?,
        })
    }

    pub fn for_sprite(&self, kind: SpriteKind) -> &Texture2D {
        match kind {
            SpriteKind::Floor => &self.floor,
            SpriteKind::Roof => &self.roof,
            SpriteKind::Obstacle => &self.obstacle,
            SpriteKind::Coin => &self.coin,
            SpriteKind::Player(Skin::Normal) => &self.player,
            SpriteKind::Player(Skin::Invincible) => &self.invincible,
        }
    }
}

async fn load_tile(path: &str) -> Result<Texture2D> {
    let texture = load_texture(path)
        .await
        .map_err(|e| anyhow!("failed to load texture {path}: {e}"))?;
    // Pixel art: keep edges crisp when stretched over tall bricks
    texture.set_filter(FilterMode::Nearest);
    log::debug!("Loaded texture {path}");
    Ok(texture)
}

/// Load the status line font; `None` means the overlay is skipped
pub async fn load_font() -> Option<Font> {
    match load_ttf_font(FONT_PATH).await {
        Ok(font) => {
            log::info!("Loaded font {FONT_PATH}");
            Some(font)
        }
        Err(e) => {
            log::warn!("Failed to load font {FONT_PATH}: {e}, status line disabled");
            None
        }
    }
}
