//! Draw-rectangle batches.
//!
//! The compositor is the seam between the engine and whatever actually
//! rasterizes: the engine appends plain rectangles, the backend consumes them.
//! Rectangles are never patched after the fact; any change repaints the whole
//! visible window.

use crate::anim::AnimPhase;

/// What a rectangle samples from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RectSource {
    /// A tileset slot (0..=8).
    Tiles(u8),
    /// The half-transparent shadow fill; no atlas involved.
    Shadow,
}

/// One composited rectangle.
///
/// Destination coordinates are absolute map pixels; the backend subtracts the
/// scroll origin when drawing. `anim_x`/`anim_y` are the per-phase-step source
/// displacements of animated kinds, zero for everything else, so the batch
/// itself is animation-phase independent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawRect {
    /// Source atlas or shadow fill.
    pub source: RectSource,
    /// Source x in pixels, before animation displacement.
    pub src_x: f32,
    /// Source y in pixels, before animation displacement.
    pub src_y: f32,
    /// Destination x in map pixels.
    pub dst_x: f32,
    /// Destination y in map pixels.
    pub dst_y: f32,
    /// Rectangle width in pixels.
    pub width: f32,
    /// Rectangle height in pixels.
    pub height: f32,
    /// Source x displacement per water phase step.
    pub anim_x: f32,
    /// Source y displacement per fall phase step.
    pub anim_y: f32,
}

impl DrawRect {
    /// A static rectangle.
    pub fn new(
        source: RectSource,
        src_x: f32,
        src_y: f32,
        dst_x: f32,
        dst_y: f32,
        width: f32,
        height: f32,
    ) -> DrawRect {
        DrawRect {
            source,
            src_x,
            src_y,
            dst_x,
            dst_y,
            width,
            height,
            anim_x: 0.0,
            anim_y: 0.0,
        }
    }

    /// Attach per-phase source displacements.
    pub fn with_anim(mut self, anim_x: f32, anim_y: f32) -> DrawRect {
        self.anim_x = anim_x;
        self.anim_y = anim_y;
        self
    }

    /// Effective source position for an animation phase.
    pub fn src_at(&self, phase: AnimPhase) -> (f32, f32) {
        (
            self.src_x + self.anim_x * phase.water as f32,
            self.src_y + self.anim_y * phase.fall as f32,
        )
    }
}

/// Append-only rectangle list for one composited layer.
#[derive(Debug, Default)]
pub struct DrawBatch {
    rects: Vec<DrawRect>,
}

impl DrawBatch {
    /// Append a rectangle.
    pub fn push(&mut self, rect: DrawRect) {
        self.rects.push(rect);
    }

    /// The rectangles, in append order.
    pub fn rects(&self) -> &[DrawRect] {
        &self.rects
    }

    /// Number of appended rectangles.
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// True when nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    fn clear(&mut self) {
        self.rects.clear();
    }
}

/// The two per-frame batches: `lower` draws under characters, `upper` above.
#[derive(Debug, Default)]
pub struct LayerCompositor {
    /// Ground, shadows, table edges and ordinary overlay tiles.
    pub lower: DrawBatch,
    /// Ceiling caps and overpass tiles.
    pub upper: DrawBatch,
}

impl LayerCompositor {
    /// Empty both batches ahead of a repaint.
    pub fn clear(&mut self) {
        self.lower.clear();
        self.upper.clear();
    }
}
