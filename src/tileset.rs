//! Tileset slot binding.

use crate::error::MapError;

/// Maximum number of tileset slots: A1..A4, A5, B..E.
pub const MAX_SLOTS: usize = 9;

/// An image surface a tileset slot can point at.
///
/// The engine never touches pixels; it only polls readiness so that cells
/// referencing a still-loading image are skipped for the frame instead of
/// blocking. The rendering backend downcasts to its own concrete type.
pub trait TileAtlas {
    /// True once the image is loaded and drawable.
    fn is_ready(&self) -> bool;
}

/// Ordered list of up to nine optional atlas slots.
///
/// Slots 0..=3 are the A1..A4 autotile sheets, slot 4 is A5, slots 5..=8 the
/// normal sheets B..E. Rebinding does not trigger a repaint by itself; the
/// owner calls [`crate::TilemapEngine::refresh`] when the assignment changes.
#[derive(Debug)]
pub struct TilesetBinding<A: TileAtlas> {
    slots: Vec<Option<A>>,
}

impl<A: TileAtlas> Default for TilesetBinding<A> {
    fn default() -> Self {
        TilesetBinding::new()
    }
}

impl<A: TileAtlas> TilesetBinding<A> {
    /// A binding with no slots; every lookup misses.
    pub fn new() -> TilesetBinding<A> {
        TilesetBinding { slots: Vec::new() }
    }

    /// Replace the slot list.
    pub fn bind(&mut self, slots: Vec<Option<A>>) -> Result<(), MapError> {
        if slots.len() > MAX_SLOTS {
            return Err(MapError::TooManySlots(slots.len()));
        }
        self.slots = slots;
        Ok(())
    }

    /// True iff every bound slot's image has finished loading.
    pub fn is_ready(&self) -> bool {
        self.slots
            .iter()
            .flatten()
            .all(|atlas| atlas.is_ready())
    }

    /// The atlas for a set index, only if bound and ready.
    ///
    /// Out-of-range indices, unbound slots and still-loading images all come
    /// back `None`; the caller drops the tile for this frame.
    pub fn slot(&self, set: u8) -> Option<&A> {
        self.slots
            .get(set as usize)?
            .as_ref()
            .filter(|atlas| atlas.is_ready())
    }
}
