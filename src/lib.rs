#![warn(missing_docs)]

//! Layered autotile map compositor & renderer for Macroquad.
//!
//! Turns a grid of numeric tile ids plus up to nine tileset images into two
//! ordered draw-rectangle batches (`lower` and `upper`) once per display
//! frame. Characters are meant to be drawn between the two batches. Repaints
//! happen only when the visible tile window moves or the map/tileset changes;
//! water and waterfall animation is resolved at draw time from a frame
//! counter, so an animating map never forces a repaint.
//!
//! The core engine has no rendering dependency: it only decides what rectangle
//! of which source atlas goes where. The [`render`] backend and the JSON map
//! loader are the only Macroquad-facing pieces.

mod anim;
mod autotile;
mod batch;
mod engine;
mod error;
mod grid;
mod loader {
    pub mod json_loader;
}
mod render {
    pub mod draw;
}
mod tile;
mod tileset;
mod viewport;

pub use anim::AnimPhase;
pub use autotile::{Quadrants, ShapeTable, FLOOR_TABLE, WALL_TABLE, WATERFALL_TABLE};
pub use batch::{DrawBatch, DrawRect, LayerCompositor, RectSource};
pub use engine::{TilemapConfig, TilemapEngine};
pub use error::MapError;
pub use grid::{TileGrid, LAYER_COUNT, SHADOW_LAYER};
pub use loader::json_loader::{decode_map_file, decode_map_str, load, MapFile};
pub use render::draw::{draw_batch, draw_lower, draw_upper, TextureAtlas};
pub use tile::{
    AutotileFamily, TileClass, TileId, SHAPES_PER_KIND, TILE_ID_A1, TILE_ID_A2, TILE_ID_A3,
    TILE_ID_A4, TILE_ID_A5, TILE_ID_MAX,
};
pub use tileset::{TileAtlas, TilesetBinding, MAX_SLOTS};
pub use viewport::ViewportScroller;
