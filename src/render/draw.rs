//! Macroquad batch-drawing backend.
//!
//! The only module (besides the loader) that touches a rendering type. It
//! consumes the engine's batches: tile rects become `draw_texture_ex` calls
//! with the animation phase folded into the source rect, shadow rects become
//! half-transparent black fills.

use macroquad::prelude::*;

use crate::anim::AnimPhase;
use crate::batch::{DrawRect, RectSource};
use crate::engine::TilemapEngine;
use crate::tileset::{TileAtlas, TilesetBinding};

/// Shadow quadrant fill.
pub const SHADOW_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.5);

/// A loaded Macroquad texture usable as a tileset slot.
pub struct TextureAtlas {
    tex: Texture2D,
}

impl TextureAtlas {
    /// Wrap a texture, forcing nearest filtering (pixel-art tiles).
    pub fn new(tex: Texture2D) -> TextureAtlas {
        tex.set_filter(FilterMode::Nearest);
        TextureAtlas { tex }
    }

    /// The wrapped texture.
    pub fn texture(&self) -> &Texture2D {
        &self.tex
    }
}

impl TileAtlas for TextureAtlas {
    // Textures arrive via `load_texture`, which resolves only once decoded.
    fn is_ready(&self) -> bool {
        true
    }
}

/// Draw one batch at the given scroll origin and animation phase.
pub fn draw_batch(
    rects: &[DrawRect],
    binding: &TilesetBinding<TextureAtlas>,
    origin: (f32, f32),
    phase: AnimPhase,
) {
    for rect in rects {
        let dx = rect.dst_x - origin.0;
        let dy = rect.dst_y - origin.1;
        match rect.source {
            RectSource::Shadow => {
                draw_rectangle(dx, dy, rect.width, rect.height, SHADOW_COLOR);
            }
            RectSource::Tiles(set) => {
                if let Some(atlas) = binding.slot(set) {
                    let (sx, sy) = rect.src_at(phase);
                    draw_texture_ex(
                        atlas.texture(),
                        dx,
                        dy,
                        WHITE,
                        DrawTextureParams {
                            dest_size: Some(vec2(rect.width, rect.height)),
                            source: Some(Rect::new(sx, sy, rect.width, rect.height)),
                            ..Default::default()
                        },
                    );
                }
            }
        }
    }
}

/// Draw the engine's lower batch (beneath characters).
pub fn draw_lower(engine: &TilemapEngine<TextureAtlas>) {
    draw_batch(engine.lower(), engine.tileset(), engine.origin(), engine.phase());
}

/// Draw the engine's upper batch (above characters).
pub fn draw_upper(engine: &TilemapEngine<TextureAtlas>) {
    draw_batch(engine.upper(), engine.tileset(), engine.origin(), engine.phase());
}
