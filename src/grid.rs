//! Tile grid storage.

use crate::error::MapError;
use crate::tile::TileId;

/// Sublayers per cell: four tile-id layers plus the shadow layer.
pub const LAYER_COUNT: usize = 5;
/// Index of the shadow-bit sublayer.
pub const SHADOW_LAYER: usize = 4;

/// Immutable-per-frame store of a map's tile ids.
///
/// Flat row-major storage addressed `(z*height + y)*width + x`. All reads are
/// bounds-checked and return the empty sentinel outside the map, so scroll and
/// lookahead math never needs clamping.
#[derive(Debug, Clone, Default)]
pub struct TileGrid {
    width: u32,
    height: u32,
    data: Vec<u16>,
}

impl TileGrid {
    /// An empty 0x0 grid; every read returns the empty sentinel.
    pub fn new() -> TileGrid {
        TileGrid::default()
    }

    /// Build a grid from a flat `width * height * 5` id array.
    pub fn from_data(width: u32, height: u32, data: Vec<u16>) -> Result<TileGrid, MapError> {
        let expected = width as usize * height as usize * LAYER_COUNT;
        if data.len() != expected {
            return Err(MapError::DataLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(TileGrid {
            width,
            height,
            data,
        })
    }

    /// Map width in tiles.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Map height in tiles.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Tile id at `(x, y)` on sublayer `z`; empty outside the map.
    pub fn tile(&self, x: i32, y: i32, z: usize) -> TileId {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 || z >= LAYER_COUNT
        {
            return TileId::EMPTY;
        }
        let idx = ((z as u32 * self.height + y as u32) * self.width + x as u32) as usize;
        TileId(self.data[idx])
    }

    /// Low four bits of the shadow sublayer; bit i darkens screen-quadrant i.
    pub fn shadow_bits(&self, x: i32, y: i32) -> u8 {
        (self.tile(x, y, SHADOW_LAYER).raw() & 0x0f) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_every_cell_and_blanks_out_of_bounds() {
        let w = 3u32;
        let h = 2u32;
        let data: Vec<u16> = (0..w * h * LAYER_COUNT as u32).map(|i| i as u16).collect();
        let grid = TileGrid::from_data(w, h, data.clone()).unwrap();

        for z in 0..LAYER_COUNT {
            for y in 0..h as i32 {
                for x in 0..w as i32 {
                    let expect = data[(z * h as usize + y as usize) * w as usize + x as usize];
                    assert_eq!(grid.tile(x, y, z).raw(), expect);
                }
            }
        }

        assert_eq!(grid.tile(-1, 0, 0), TileId::EMPTY);
        assert_eq!(grid.tile(0, -1, 0), TileId::EMPTY);
        assert_eq!(grid.tile(3, 0, 0), TileId::EMPTY);
        assert_eq!(grid.tile(0, 2, 0), TileId::EMPTY);
        assert_eq!(grid.tile(0, 0, 5), TileId::EMPTY);
    }

    #[test]
    fn rejects_wrong_data_length() {
        let err = TileGrid::from_data(2, 2, vec![0; 19]).unwrap_err();
        assert!(matches!(
            err,
            MapError::DataLength { expected: 20, actual: 19 }
        ));
    }

    #[test]
    fn shadow_bits_mask_to_four_bits() {
        let mut data = vec![0u16; 1 * 1 * LAYER_COUNT];
        data[SHADOW_LAYER] = 0xf5;
        let grid = TileGrid::from_data(1, 1, data).unwrap();
        assert_eq!(grid.shadow_bits(0, 0), 0x5);
        assert_eq!(grid.shadow_bits(4, 4), 0);
    }
}
