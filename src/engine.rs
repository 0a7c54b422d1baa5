//! The per-frame tilemap engine.

use log::{debug, info};

use crate::anim::AnimPhase;
use crate::autotile::ShapeTable;
use crate::batch::{DrawBatch, DrawRect, LayerCompositor, RectSource};
use crate::error::MapError;
use crate::grid::TileGrid;
use crate::tile::{AutotileFamily, TileClass, TileId};
use crate::tileset::{TileAtlas, TilesetBinding};
use crate::viewport::ViewportScroller;

/// Engine construction parameters, all in pixels.
#[derive(Debug, Clone, Copy)]
pub struct TilemapConfig {
    /// Width of the on-screen area the batches must cover.
    pub view_width: f32,
    /// Height of the on-screen area the batches must cover.
    pub view_height: f32,
    /// Extra painted slack on every side; must be at least the worst
    /// single-frame scroll delta or scrolling exposes unpainted tiles.
    pub margin: f32,
}

impl Default for TilemapConfig {
    fn default() -> Self {
        TilemapConfig {
            view_width: 816.0,
            view_height: 624.0,
            margin: 20.0,
        }
    }
}

/// Orchestrates grid, tileset, scroll window and compositor once per frame.
///
/// Call order per frame: [`set_origin`](Self::set_origin) from the camera,
/// then [`update`](Self::update) with the scheduler's frame counter, then hand
/// [`lower`](Self::lower) and [`upper`](Self::upper) to the backend with
/// characters drawn in between. `update` is cheap when nothing changed.
pub struct TilemapEngine<A: TileAtlas> {
    grid: TileGrid,
    tileset: TilesetBinding<A>,
    tile_w: f32,
    tile_h: f32,
    compositor: LayerCompositor,
    scroller: ViewportScroller,
    config: TilemapConfig,
    origin: (f32, f32),
    frame: u64,
    needs_repaint: bool,
    repaints: u64,
}

impl<A: TileAtlas> TilemapEngine<A> {
    /// An engine with an empty map and no tileset.
    pub fn new(config: TilemapConfig) -> TilemapEngine<A> {
        TilemapEngine {
            grid: TileGrid::new(),
            tileset: TilesetBinding::new(),
            tile_w: 48.0,
            tile_h: 48.0,
            compositor: LayerCompositor::default(),
            scroller: ViewportScroller::new(config.margin),
            config,
            origin: (0.0, 0.0),
            frame: 0,
            needs_repaint: true,
            repaints: 0,
        }
    }

    /// Replace the map grid from a flat `width * height * 5` id array.
    /// Forces a repaint on the next update.
    pub fn set_data(&mut self, width: u32, height: u32, data: Vec<u16>) -> Result<(), MapError> {
        self.grid = TileGrid::from_data(width, height, data)?;
        // The painted window belongs to the old map; forget it along with
        // forcing the repaint.
        self.scroller.reset();
        self.needs_repaint = true;
        info!("map data replaced: {}x{} tiles", width, height);
        Ok(())
    }

    /// Replace the tileset binding and the cell size in pixels.
    ///
    /// Deliberately does not force a repaint; the owner decides when the
    /// switch should become visible and calls [`refresh`](Self::refresh).
    pub fn set_tileset(
        &mut self,
        tile_w: f32,
        tile_h: f32,
        slots: Vec<Option<A>>,
    ) -> Result<(), MapError> {
        if tile_w <= 0.0 || tile_h <= 0.0 {
            return Err(MapError::InvalidMap(format!(
                "non-positive tile size {tile_w}x{tile_h}"
            )));
        }
        self.tileset.bind(slots)?;
        self.tile_w = tile_w;
        self.tile_h = tile_h;
        info!("tileset rebound, cell {}x{} px", tile_w, tile_h);
        Ok(())
    }

    /// Force a full repaint on the next update.
    pub fn refresh(&mut self) {
        self.needs_repaint = true;
    }

    /// Set the continuous pixel scroll origin (top-left of the view).
    pub fn set_origin(&mut self, x: f32, y: f32) {
        self.origin = (x, y);
    }

    /// Advance one display frame.
    ///
    /// Reads the origin and frame counter once, repaints only when the tile
    /// window moved or a refresh is pending, and otherwise leaves the batches
    /// untouched. `overpass` is consulted per cell for sublayers 2..=3;
    /// positions it reports true for draw those sublayers above characters
    /// unconditionally.
    pub fn update<F: Fn(i32, i32) -> bool>(&mut self, frame: u64, overpass: F) {
        self.frame = frame;
        let window = self
            .scroller
            .window(self.origin.0, self.origin.1, self.tile_w, self.tile_h);
        if !self.needs_repaint && !self.scroller.has_moved(window) {
            return;
        }
        self.repaint(window, &overpass);
        self.scroller.mark_painted(window);
        // Poll readiness: while any bound image is still loading, repaint
        // every frame so skipped cells fill in as soon as it arrives.
        self.needs_repaint = !self.tileset.is_ready();
    }

    /// Batch drawn beneath characters.
    pub fn lower(&self) -> &[DrawRect] {
        self.compositor.lower.rects()
    }

    /// Batch drawn above characters.
    pub fn upper(&self) -> &[DrawRect] {
        self.compositor.upper.rects()
    }

    /// Animation phases for the frame counter last passed to `update`.
    pub fn phase(&self) -> AnimPhase {
        AnimPhase::at(self.frame)
    }

    /// The current tileset binding.
    pub fn tileset(&self) -> &TilesetBinding<A> {
        &self.tileset
    }

    /// The current map grid.
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Scroll origin as of the last `set_origin`.
    pub fn origin(&self) -> (f32, f32) {
        self.origin
    }

    /// Cell size in pixels.
    pub fn tile_size(&self) -> (f32, f32) {
        (self.tile_w, self.tile_h)
    }

    /// Number of full repaints performed so far.
    pub fn repaint_count(&self) -> u64 {
        self.repaints
    }

    fn repaint<F: Fn(i32, i32) -> bool>(&mut self, window: (i32, i32), overpass: &F) {
        self.compositor.clear();
        let span_w = self.config.view_width + self.scroller.margin() * 2.0;
        let span_h = self.config.view_height + self.scroller.margin() * 2.0;
        let cols = (span_w / self.tile_w).ceil() as i32 + 1;
        let rows = (span_h / self.tile_h).ceil() as i32 + 1;
        // Rows outer: the table-edge rule looks one row up.
        for y in 0..rows {
            for x in 0..cols {
                self.paint_cell(window.0 + x, window.1 + y, overpass);
            }
        }
        self.repaints += 1;
        debug!(
            "repaint at window ({}, {}): {} lower / {} upper rects",
            window.0,
            window.1,
            self.compositor.lower.len(),
            self.compositor.upper.len()
        );
    }

    fn paint_cell<F: Fn(i32, i32) -> bool>(&mut self, mx: i32, my: i32, overpass: &F) {
        let id0 = self.grid.tile(mx, my, 0);
        let id1 = self.grid.tile(mx, my, 1);
        let id2 = self.grid.tile(mx, my, 2);
        let id3 = self.grid.tile(mx, my, 3);
        let shadow = self.grid.shadow_bits(mx, my);
        let above_id1 = self.grid.tile(mx, my - 1, 1);

        let dx = mx as f32 * self.tile_w;
        let dy = my as f32 * self.tile_h;

        self.draw_tile(id0, dx, dy, id0.is_higher_priority());
        self.draw_tile(id1, dx, dy, id1.is_higher_priority());
        self.draw_shadow(shadow, dx, dy);

        // A table's raised front hangs into the cell below it; paint the
        // missing edge strip unless that cell is itself a table, or its
        // ground tile is a ceiling cap that covers the seam anyway.
        if above_id1.is_table_tile() && !id1.is_table_tile() && !id0.is_higher_priority() {
            self.draw_table_edge(above_id1, dx, dy);
        }

        if overpass(mx, my) {
            self.draw_tile(id2, dx, dy, true);
            self.draw_tile(id3, dx, dy, true);
        } else {
            self.draw_tile(id2, dx, dy, id2.is_higher_priority());
            self.draw_tile(id3, dx, dy, id3.is_higher_priority());
        }
    }

    fn batch_mut(&mut self, upper: bool) -> &mut DrawBatch {
        if upper {
            &mut self.compositor.upper
        } else {
            &mut self.compositor.lower
        }
    }

    fn draw_tile(&mut self, id: TileId, dx: f32, dy: f32, upper: bool) {
        match id.classify() {
            TileClass::Empty => {}
            TileClass::Normal { set, col, row } => {
                if self.tileset.slot(set).is_none() {
                    return; // unbound or still loading: skip this frame
                }
                let rect = DrawRect::new(
                    RectSource::Tiles(set),
                    col as f32 * self.tile_w,
                    row as f32 * self.tile_h,
                    dx,
                    dy,
                    self.tile_w,
                    self.tile_h,
                );
                self.batch_mut(upper).push(rect);
            }
            TileClass::Autotile { family, kind, shape } => {
                self.draw_autotile(id, family, kind, shape, dx, dy, upper);
            }
        }
    }

    fn draw_autotile(
        &mut self,
        id: TileId,
        family: AutotileFamily,
        kind: u16,
        shape: u16,
        dx: f32,
        dy: f32,
        upper: bool,
    ) {
        let tx = kind % 8;
        let ty = kind / 8;
        let mut bx: u16 = 0;
        let mut by: u16 = 0;
        let mut anim_x = 0.0;
        let mut anim_y = 0.0;
        let set: u8 = match family {
            AutotileFamily::A1 => {
                match kind {
                    0 => anim_x = self.tile_w * 2.0,
                    1 => {
                        by = 3;
                        anim_x = self.tile_w * 2.0;
                    }
                    2 => bx = 6,
                    3 => {
                        bx = 6;
                        by = 3;
                    }
                    _ => {
                        bx = tx / 4 * 8;
                        by = ty * 6 + tx / 2 % 2 * 3;
                        if kind % 2 == 0 {
                            anim_x = self.tile_w * 2.0;
                        } else {
                            bx += 6;
                            anim_y = self.tile_h;
                        }
                    }
                }
                0
            }
            AutotileFamily::A2 => {
                bx = tx * 2;
                by = (ty - 2) * 3;
                1
            }
            AutotileFamily::A3 => {
                bx = tx * 2;
                by = (ty - 6) * 2;
                2
            }
            AutotileFamily::A4 => {
                bx = tx * 2;
                // Rows alternate 3-half-tile wall tops and 2-half-tile faces.
                by = (ty - 10) / 2 * 5 + (ty % 2) * 3;
                3
            }
        };
        if self.tileset.slot(set).is_none() {
            return;
        }

        let is_table = id.is_table_tile();
        let quads = ShapeTable::select(family, kind).quadrants(shape);
        let w1 = self.tile_w / 2.0;
        let h1 = self.tile_h / 2.0;
        for (i, &(qsx, qsy)) in quads.iter().enumerate() {
            let sx = (bx * 2 + qsx as u16) as f32 * w1;
            let sy = (by * 2 + qsy as u16) as f32 * h1;
            let dx1 = dx + (i % 2) as f32 * w1;
            let dy1 = dy + (i / 2) as f32 * h1;
            if is_table && (qsy == 1 || qsy == 5) {
                // Raised surface quadrant: back it with the plain table top,
                // then squash the front onto the lower half so the side of
                // the table keeps its height.
                let qsx2 = if qsy == 1 { [0u8, 3, 2, 1][qsx as usize] } else { qsx };
                let sx2 = (bx * 2 + qsx2 as u16) as f32 * w1;
                let sy2 = (by * 2 + 3) as f32 * h1;
                let back = DrawRect::new(RectSource::Tiles(set), sx2, sy2, dx1, dy1, w1, h1);
                let front = DrawRect::new(
                    RectSource::Tiles(set),
                    sx,
                    sy,
                    dx1,
                    dy1 + h1 / 2.0,
                    w1,
                    h1 / 2.0,
                );
                let batch = self.batch_mut(upper);
                batch.push(back);
                batch.push(front);
            } else {
                let rect = DrawRect::new(RectSource::Tiles(set), sx, sy, dx1, dy1, w1, h1)
                    .with_anim(anim_x, anim_y);
                self.batch_mut(upper).push(rect);
            }
        }
    }

    fn draw_table_edge(&mut self, id: TileId, dx: f32, dy: f32) {
        let (kind, shape) = match id.classify() {
            TileClass::Autotile {
                family: AutotileFamily::A2,
                kind,
                shape,
            } => (kind, shape),
            _ => return,
        };
        if self.tileset.slot(1).is_none() {
            return;
        }
        let bx = kind % 8 * 2;
        let by = (kind / 8 - 2) * 3;
        let quads = ShapeTable::Floor.quadrants(shape);
        let w1 = self.tile_w / 2.0;
        let h1 = self.tile_h / 2.0;
        // Bottom quadrants of the table, lower half only, at the top of this
        // cell: the strip the raised front would otherwise cut off.
        for (i, &(qsx, qsy)) in quads[2..4].iter().enumerate() {
            let sx = (bx * 2 + qsx as u16) as f32 * w1;
            let sy = (by * 2 + qsy as u16) as f32 * h1 + h1 / 2.0;
            let rect = DrawRect::new(
                RectSource::Tiles(1),
                sx,
                sy,
                dx + i as f32 * w1,
                dy,
                w1,
                h1 / 2.0,
            );
            self.compositor.lower.push(rect);
        }
    }

    fn draw_shadow(&mut self, bits: u8, dx: f32, dy: f32) {
        if bits == 0 {
            return;
        }
        let w1 = self.tile_w / 2.0;
        let h1 = self.tile_h / 2.0;
        for i in 0..4u8 {
            if bits & (1 << i) != 0 {
                let rect = DrawRect::new(
                    RectSource::Shadow,
                    0.0,
                    0.0,
                    dx + (i % 2) as f32 * w1,
                    dy + (i / 2) as f32 * h1,
                    w1,
                    h1,
                );
                self.compositor.lower.push(rect);
            }
        }
    }
}
