//! Autotile quadrant tables.
//!
//! Every autotile kind is represented in its sheet by a 2x2-tile source block
//! (plus animation columns for A1). A cell is synthesized from four half-tile
//! quadrants of that block; which quadrants depends on the tile's shape index,
//! which encodes how the tile connects to its 8 neighbors. The tables below
//! map a shape to the four source quadrant offsets, in half-tile units within
//! the block, destination order top-left, top-right, bottom-left, bottom-right.
//!
//! The table contents are the canonical tile-shape convention; there is
//! nothing to tune here, a wrong entry silently renders wrong-looking seams.

use crate::tile::AutotileFamily;

/// Four `(qx, qy)` source quadrant offsets, one per destination quadrant.
pub type Quadrants = [(u8, u8); 4];

/// Floor autotiles: 48 shapes over a 2x3-tile source block.
pub const FLOOR_TABLE: [Quadrants; 48] = [
    [(2, 4), (1, 4), (2, 3), (1, 3)],
    [(2, 0), (1, 4), (2, 3), (1, 3)],
    [(2, 4), (3, 0), (2, 3), (1, 3)],
    [(2, 0), (3, 0), (2, 3), (1, 3)],
    [(2, 4), (1, 4), (2, 3), (3, 1)],
    [(2, 0), (1, 4), (2, 3), (3, 1)],
    [(2, 4), (3, 0), (2, 3), (3, 1)],
    [(2, 0), (3, 0), (2, 3), (3, 1)],
    [(2, 4), (1, 4), (2, 1), (1, 3)],
    [(2, 0), (1, 4), (2, 1), (1, 3)],
    [(2, 4), (3, 0), (2, 1), (1, 3)],
    [(2, 0), (3, 0), (2, 1), (1, 3)],
    [(2, 4), (1, 4), (2, 1), (3, 1)],
    [(2, 0), (1, 4), (2, 1), (3, 1)],
    [(2, 4), (3, 0), (2, 1), (3, 1)],
    [(2, 0), (3, 0), (2, 1), (3, 1)],
    [(0, 4), (1, 4), (0, 3), (1, 3)],
    [(0, 4), (3, 0), (0, 3), (1, 3)],
    [(0, 4), (1, 4), (0, 3), (3, 1)],
    [(0, 4), (3, 0), (0, 3), (3, 1)],
    [(2, 2), (1, 2), (2, 3), (1, 3)],
    [(2, 2), (1, 2), (2, 3), (3, 1)],
    [(2, 2), (1, 2), (2, 1), (1, 3)],
    [(2, 2), (1, 2), (2, 1), (3, 1)],
    [(2, 4), (3, 4), (2, 3), (3, 3)],
    [(2, 4), (3, 4), (2, 1), (3, 3)],
    [(2, 0), (3, 4), (2, 3), (3, 3)],
    [(2, 0), (3, 4), (2, 1), (3, 3)],
    [(2, 4), (1, 4), (2, 5), (1, 5)],
    [(2, 0), (1, 4), (2, 5), (1, 5)],
    [(2, 4), (3, 0), (2, 5), (1, 5)],
    [(2, 0), (3, 0), (2, 5), (1, 5)],
    [(0, 4), (3, 4), (0, 3), (3, 3)],
    [(2, 2), (1, 2), (2, 5), (1, 5)],
    [(0, 2), (1, 2), (0, 3), (1, 3)],
    [(0, 2), (1, 2), (0, 3), (3, 1)],
    [(2, 2), (3, 2), (2, 3), (3, 3)],
    [(2, 2), (3, 2), (2, 1), (3, 3)],
    [(2, 4), (3, 4), (2, 5), (3, 5)],
    [(2, 0), (3, 4), (2, 5), (3, 5)],
    [(0, 4), (1, 4), (0, 5), (1, 5)],
    [(0, 4), (3, 0), (0, 5), (1, 5)],
    [(0, 2), (3, 2), (0, 3), (3, 3)],
    [(0, 2), (1, 2), (0, 5), (1, 5)],
    [(0, 4), (3, 4), (0, 5), (3, 5)],
    [(2, 2), (3, 2), (2, 5), (3, 5)],
    [(0, 2), (3, 2), (0, 5), (3, 5)],
    [(0, 0), (1, 0), (0, 1), (1, 1)],
];

/// Wall autotiles: 16 shapes over a 2x2-tile source block.
pub const WALL_TABLE: [Quadrants; 16] = [
    [(2, 2), (1, 2), (2, 1), (1, 1)],
    [(0, 2), (1, 2), (0, 1), (1, 1)],
    [(2, 0), (1, 0), (2, 1), (1, 1)],
    [(0, 0), (1, 0), (0, 1), (1, 1)],
    [(2, 2), (3, 2), (2, 1), (3, 1)],
    [(0, 2), (3, 2), (0, 1), (3, 1)],
    [(2, 0), (3, 0), (2, 1), (3, 1)],
    [(0, 0), (3, 0), (0, 1), (3, 1)],
    [(2, 2), (1, 2), (2, 3), (1, 3)],
    [(0, 2), (1, 2), (0, 3), (1, 3)],
    [(2, 0), (1, 0), (2, 3), (1, 3)],
    [(0, 0), (1, 0), (0, 3), (1, 3)],
    [(2, 2), (3, 2), (2, 3), (3, 3)],
    [(0, 2), (3, 2), (0, 3), (3, 3)],
    [(2, 0), (3, 0), (2, 3), (3, 3)],
    [(0, 0), (3, 0), (0, 3), (3, 3)],
];

/// Waterfall autotiles: 4 shapes, only the left/right connection varies.
pub const WATERFALL_TABLE: [Quadrants; 4] = [
    [(2, 0), (1, 0), (2, 1), (1, 1)],
    [(0, 0), (1, 0), (0, 1), (1, 1)],
    [(2, 0), (3, 0), (2, 1), (3, 1)],
    [(0, 0), (3, 0), (0, 1), (3, 1)],
];

/// Which quadrant table an autotile samples with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeTable {
    /// 48-shape floor table (A1 water, A2, A4 wall tops).
    Floor,
    /// 16-shape wall table (A3, A4 wall faces).
    Wall,
    /// 4-shape waterfall table (odd A1 kinds from 5 up).
    Waterfall,
}

impl ShapeTable {
    /// Table for an autotile family. A1 picks floor or waterfall per kind
    /// parity (kinds below 4 are all floor water), A4 alternates wall tops
    /// (floor table) and wall faces (wall table) per sheet row.
    pub fn select(family: AutotileFamily, kind: u16) -> ShapeTable {
        match family {
            AutotileFamily::A1 => {
                if kind >= 4 && kind % 2 == 1 {
                    ShapeTable::Waterfall
                } else {
                    ShapeTable::Floor
                }
            }
            AutotileFamily::A2 => ShapeTable::Floor,
            AutotileFamily::A3 => ShapeTable::Wall,
            AutotileFamily::A4 => {
                if (kind / 8) % 2 == 1 {
                    ShapeTable::Wall
                } else {
                    ShapeTable::Floor
                }
            }
        }
    }

    /// Quadrant offsets for a shape. Shapes past the table length wrap
    /// instead of panicking; malformed map data draws wrong, never crashes.
    pub fn quadrants(self, shape: u16) -> Quadrants {
        match self {
            ShapeTable::Floor => FLOOR_TABLE[shape as usize % FLOOR_TABLE.len()],
            ShapeTable::Wall => WALL_TABLE[shape as usize % WALL_TABLE.len()],
            ShapeTable::Waterfall => WATERFALL_TABLE[shape as usize % WATERFALL_TABLE.len()],
        }
    }
}
