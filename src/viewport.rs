//! Scroll-window tracking.

/// Converts a continuous pixel scroll origin into the discrete tile window
/// that must be painted, and remembers the last window actually painted.
///
/// The margin widens the painted area so a scroll of up to `margin` pixels per
/// frame never reveals an unpainted edge before the next repaint lands.
#[derive(Debug)]
pub struct ViewportScroller {
    margin: f32,
    last: Option<(i32, i32)>,
}

impl ViewportScroller {
    /// Scroller with the given pixel margin.
    pub fn new(margin: f32) -> ViewportScroller {
        ViewportScroller { margin, last: None }
    }

    /// Margin in pixels.
    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// First visible tile column/row for a scroll origin.
    pub fn window(&self, origin_x: f32, origin_y: f32, tile_w: f32, tile_h: f32) -> (i32, i32) {
        (
            ((origin_x - self.margin) / tile_w).floor() as i32,
            ((origin_y - self.margin) / tile_h).floor() as i32,
        )
    }

    /// Does this window differ from the last one painted?
    pub fn has_moved(&self, window: (i32, i32)) -> bool {
        self.last != Some(window)
    }

    /// Record the window just painted.
    pub fn mark_painted(&mut self, window: (i32, i32)) {
        self.last = Some(window);
    }

    /// Forget the painted window so the next comparison reports movement.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
