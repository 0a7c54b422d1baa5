//! Tile id decoding.
//!
//! A map cell stores a plain unsigned id per sublayer. The id space is
//! partitioned into fixed ranges: `0` is empty, ids below 1024 are the four
//! "normal" sheets B..E, `1536..1792` is the A5 sheet, and everything from
//! 2048 up encodes an autotile as `2048 + kind*48 + shape`. Decoding is pure
//! and total; ids that fall in no known range degrade to a `Normal`
//! classification whose set index is simply unbound.

/// First id of the A5 (non-autotile) sheet.
pub const TILE_ID_A5: u16 = 1536;
/// First id of the A1 (animated water) autotile sheet.
pub const TILE_ID_A1: u16 = 2048;
/// First id of the A2 (ground) autotile sheet.
pub const TILE_ID_A2: u16 = 2816;
/// First id of the A3 (building wall) autotile sheet.
pub const TILE_ID_A3: u16 = 4352;
/// First id of the A4 (wall top / wall face) autotile sheet.
pub const TILE_ID_A4: u16 = 5888;
/// One past the last valid tile id.
pub const TILE_ID_MAX: u16 = 8192;

/// Number of shape variants per autotile kind.
pub const SHAPES_PER_KIND: u16 = 48;

/// A2 kinds depicting raised table-like surfaces (second A2 sheet row).
const TABLE_KINDS: std::ops::RangeInclusive<u16> = 24..=31;

/// A raw tile identifier as stored in map data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TileId(pub u16);

/// Which autotile sheet an autotile id belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AutotileFamily {
    /// Animated water & waterfalls (set slot 0).
    A1,
    /// Ground autotiles, including table tiles (set slot 1).
    A2,
    /// Building walls (set slot 2).
    A3,
    /// Wall tops and wall faces (set slot 3).
    A4,
}

/// Result of classifying a tile id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileClass {
    /// Nothing to draw.
    Empty,
    /// An autotile synthesized from four source quadrants.
    Autotile {
        /// Sheet the tile samples from.
        family: AutotileFamily,
        /// Kind within the whole autotile id space (`(id - 2048) / 48`).
        kind: u16,
        /// Neighbor-derived shape index (`(id - 2048) % 48`).
        shape: u16,
    },
    /// A fixed tile drawn verbatim from one cell of a sheet.
    Normal {
        /// Tileset slot; may be unbound, in which case the tile is skipped.
        set: u8,
        /// Source column in tiles.
        col: u16,
        /// Source row in tiles.
        row: u16,
    },
}

impl TileId {
    /// Empty-cell sentinel.
    pub const EMPTY: TileId = TileId(0);

    #[inline]
    /// The raw id value.
    pub fn raw(self) -> u16 {
        self.0
    }

    /// False only for the empty sentinel.
    #[inline]
    pub fn is_visible(self) -> bool {
        self.0 > 0
    }

    /// Id falls in the A1 range.
    #[inline]
    pub fn is_a1(self) -> bool {
        (TILE_ID_A1..TILE_ID_A2).contains(&self.0)
    }

    /// Id falls in the A2 range.
    #[inline]
    pub fn is_a2(self) -> bool {
        (TILE_ID_A2..TILE_ID_A3).contains(&self.0)
    }

    /// Id falls in the A3 range.
    #[inline]
    pub fn is_a3(self) -> bool {
        (TILE_ID_A3..TILE_ID_A4).contains(&self.0)
    }

    /// Id falls in the A4 range.
    #[inline]
    pub fn is_a4(self) -> bool {
        (TILE_ID_A4..TILE_ID_MAX).contains(&self.0)
    }

    /// Id falls in the A5 range.
    #[inline]
    pub fn is_a5(self) -> bool {
        (TILE_ID_A5..TILE_ID_A5 + 256).contains(&self.0)
    }

    /// Id falls in any autotile range.
    #[inline]
    pub fn is_autotile(self) -> bool {
        self.0 >= TILE_ID_A1
    }

    /// Kind index across the whole autotile id space; 0 for non-autotiles.
    #[inline]
    pub fn autotile_kind(self) -> u16 {
        if self.is_autotile() {
            (self.0 - TILE_ID_A1) / SHAPES_PER_KIND
        } else {
            0
        }
    }

    /// Shape index within the kind; 0 for non-autotiles.
    #[inline]
    pub fn autotile_shape(self) -> u16 {
        if self.is_autotile() {
            (self.0 - TILE_ID_A1) % SHAPES_PER_KIND
        } else {
            0
        }
    }

    /// Ceiling-cap tiles that draw above characters even on a ground
    /// sublayer: the A4 kinds on even sheet rows.
    pub fn is_higher_priority(self) -> bool {
        self.is_a4() && (self.autotile_kind() / 8) % 2 == 0
    }

    /// Raised table-like ground tiles that need a front-edge strip where they
    /// meet ordinary floor.
    pub fn is_table_tile(self) -> bool {
        self.is_a2() && TABLE_KINDS.contains(&self.autotile_kind())
    }

    /// Decode the id into exactly one drawable classification.
    pub fn classify(self) -> TileClass {
        if self.0 == 0 {
            TileClass::Empty
        } else if self.is_autotile() {
            let family = if self.is_a1() {
                AutotileFamily::A1
            } else if self.is_a2() {
                AutotileFamily::A2
            } else if self.is_a3() {
                AutotileFamily::A3
            } else {
                AutotileFamily::A4
            };
            TileClass::Autotile {
                family,
                kind: self.autotile_kind(),
                shape: self.autotile_shape(),
            }
        } else {
            let set = if self.is_a5() {
                4
            } else {
                // B..E sheets; ids outside every range land on an unbound
                // slot and are dropped at paint time.
                (5 + self.0 / 256) as u8
            };
            TileClass::Normal {
                set,
                col: (self.0 / 128) % 2 * 8 + self.0 % 8,
                row: (self.0 % 256) / 8 % 16,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_total_over_the_id_space() {
        for raw in 0..TILE_ID_MAX {
            let id = TileId(raw);
            let class = id.classify();
            match class {
                TileClass::Empty => assert_eq!(raw, 0),
                TileClass::Autotile { .. } => assert!(id.is_autotile()),
                TileClass::Normal { .. } => assert!(!id.is_autotile()),
            }
            assert_eq!(id.is_visible(), raw > 0);
        }
    }

    #[test]
    fn ranges_are_disjoint() {
        for raw in 1..TILE_ID_MAX {
            let id = TileId(raw);
            let hits = [id.is_a1(), id.is_a2(), id.is_a3(), id.is_a4(), id.is_a5()]
                .iter()
                .filter(|&&b| b)
                .count();
            assert!(hits <= 1, "id {raw} matched {hits} ranges");
        }
    }

    #[test]
    fn autotile_kind_and_shape_roundtrip() {
        let id = TileId(TILE_ID_A2 + 3 * SHAPES_PER_KIND + 17);
        assert_eq!(id.autotile_kind(), 16 + 3);
        assert_eq!(id.autotile_shape(), 17);
        assert!(matches!(
            id.classify(),
            TileClass::Autotile { family: AutotileFamily::A2, kind: 19, shape: 17 }
        ));
    }

    #[test]
    fn a5_and_normal_sets() {
        assert!(matches!(
            TileId(TILE_ID_A5 + 5).classify(),
            TileClass::Normal { set: 4, col: 5, row: 0 }
        ));
        // B sheet, second half-block: id 128 -> col 8.
        assert!(matches!(
            TileId(128).classify(),
            TileClass::Normal { set: 5, col: 8, row: 0 }
        ));
        assert!(matches!(
            TileId(256 + 9).classify(),
            TileClass::Normal { set: 6, col: 1, row: 1 }
        ));
    }

    #[test]
    fn higher_priority_covers_only_a4_even_rows() {
        // First A4 kind sits on an even sheet row.
        assert!(TileId(TILE_ID_A4).is_higher_priority());
        // Kind 88 is on the next (odd) row: a wall face.
        assert!(!TileId(TILE_ID_A4 + 8 * SHAPES_PER_KIND).is_higher_priority());
        assert!(!TileId(TILE_ID_A2).is_higher_priority());
        assert!(!TileId(1).is_higher_priority());
    }

    #[test]
    fn table_tiles_are_an_a2_subset() {
        let table_id = TileId(TILE_ID_A1 + 24 * SHAPES_PER_KIND);
        assert!(table_id.is_a2());
        assert!(table_id.is_table_tile());
        assert!(!TileId(TILE_ID_A2).is_table_tile());
        assert!(!TileId(TILE_ID_A3).is_table_tile());
    }
}
