//! macroquad rendering
//!
//! The presenter reads the game state and never mutates it. Sprite layout
//! and the status line are built by pure functions in `sprites` and `hud`;
//! this module only maps them onto textures and draw calls.

pub mod assets;
pub mod hud;
pub mod sprites;

use anyhow::Result;
use macroquad::color::{BLACK, WHITE};
use macroquad::math::vec2;
use macroquad::text::{Font, TextParams, draw_text_ex, measure_text};
use macroquad::texture::{DrawTextureParams, draw_texture_ex};
use macroquad::window::clear_background;

pub use assets::Textures;
pub use sprites::{Sprite, SpriteKind, draw_list};

use crate::consts::SCREEN_WIDTH;
use crate::sim::GameState;
use hud::{HUD_FONT_SIZE, centered_x, hud_line};

/// Draws game states to the window
pub struct Presenter {
    textures: Textures,
    font: Option<Font>,
}

impl Presenter {
    /// Load all assets. Missing images are fatal, a missing font is not.
    pub async fn load() -> Result<Self> {
        let textures = Textures::load().await?;
        let font = assets::load_font().await;
        Ok(Self { textures, font })
    }

    /// Draw one frame; the host presents it with `next_frame`
    pub fn render(&self, state: &GameState, now_ms: u32) {
        clear_background(BLACK);

        for sprite in draw_list(state) {
            let rect = sprite.rect;
            draw_texture_ex(
                self.textures.for_sprite(sprite.kind),
                rect.x() as f32,
                rect.y() as f32,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(rect.w() as f32, rect.h() as f32)),
                    ..Default::default()
                },
            );
        }

        if let Some(font) = &self.font {
            self.draw_status(font, state, now_ms);
        }
    }

    fn draw_status(&self, font: &Font, state: &GameState, now_ms: u32) {
        let line = hud_line(state, now_ms);
        let dims = measure_text(&line, Some(font), HUD_FONT_SIZE, 1.0);
        // Text is positioned by baseline; offset_y puts the top at y = 0
        draw_text_ex(
            &line,
            centered_x(SCREEN_WIDTH, dims.width),
            dims.offset_y,
            TextParams {
                font: Some(font),
                font_size: HUD_FONT_SIZE,
                color: WHITE,
                ..Default::default()
            },
        );
    }
}
