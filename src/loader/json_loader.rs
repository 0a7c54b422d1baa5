//! JSON map-file decoding.
//!
//! Map files carry the grid dimensions, the flat `width * height * 5` tile
//! array and up to nine tileset image paths (slot order A1..A4, A5, B..E;
//! `null` leaves a slot unbound):
//!
//! ```json
//! {
//!   "width": 20, "height": 15,
//!   "tilewidth": 48, "tileheight": 48,
//!   "data": [0, 0, 2048, ...],
//!   "tilesets": ["A1.png", null, null, null, "A5.png", "B.png"]
//! }
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use macroquad::prelude::load_texture;
use serde::Deserialize;

use crate::engine::{TilemapConfig, TilemapEngine};
use crate::error::MapError;
use crate::grid::LAYER_COUNT;
use crate::render::draw::TextureAtlas;
use crate::tileset::MAX_SLOTS;

#[derive(Deserialize)]
struct JsonMap {
    width: u32,
    height: u32,
    #[serde(default = "default_tile")]
    tilewidth: u32,
    #[serde(default = "default_tile")]
    tileheight: u32,
    data: Vec<u16>,
    #[serde(default)]
    tilesets: Vec<Option<String>>,
}

fn default_tile() -> u32 {
    48
}

/// A decoded, validated map file.
#[derive(Debug)]
pub struct MapFile {
    /// Map width in tiles.
    pub width: u32,
    /// Map height in tiles.
    pub height: u32,
    /// Cell width in pixels.
    pub tile_w: u32,
    /// Cell height in pixels.
    pub tile_h: u32,
    /// Flat `width * height * 5` tile-id array.
    pub data: Vec<u16>,
    /// Tileset image paths by slot, relative to the map file.
    pub tileset_images: Vec<Option<String>>,
}

fn validate(j: JsonMap) -> Result<MapFile, MapError> {
    if j.width == 0 || j.height == 0 {
        return Err(MapError::InvalidMap(format!(
            "zero map dimension {}x{}",
            j.width, j.height
        )));
    }
    let expected = j.width as usize * j.height as usize * LAYER_COUNT;
    if j.data.len() != expected {
        return Err(MapError::DataLength {
            expected,
            actual: j.data.len(),
        });
    }
    if j.tilesets.len() > MAX_SLOTS {
        return Err(MapError::TooManySlots(j.tilesets.len()));
    }
    Ok(MapFile {
        width: j.width,
        height: j.height,
        tile_w: j.tilewidth,
        tile_h: j.tileheight,
        data: j.data,
        tileset_images: j.tilesets,
    })
}

/// Decode a map from a JSON string.
pub fn decode_map_str(txt: &str) -> Result<MapFile, MapError> {
    let j: JsonMap = serde_json::from_str(txt).map_err(|source| MapError::Json {
        path: PathBuf::from("<inline>"),
        source,
    })?;
    validate(j)
}

/// Decode a map file, returning it together with its directory (tileset
/// image paths are resolved against that directory).
pub fn decode_map_file(path: &str) -> Result<(MapFile, PathBuf), MapError> {
    let p = Path::new(path);
    if p.extension().and_then(|e| e.to_str()) != Some("json") {
        return Err(MapError::InvalidMap(format!(
            "Map file must be a JSON file: {path}"
        )));
    }

    let txt = std::fs::read_to_string(p).map_err(|source| MapError::Io {
        path: p.to_path_buf(),
        source,
    })?;
    let j: JsonMap = serde_json::from_str(&txt).map_err(|source| MapError::Json {
        path: p.to_path_buf(),
        source,
    })?;

    let map_dir = p
        .parent()
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./"));

    Ok((validate(j)?, map_dir))
}

/// Load a map file and its tileset textures into a ready-to-update engine.
pub async fn load(path: &str, config: TilemapConfig) -> anyhow::Result<TilemapEngine<TextureAtlas>> {
    let (map, map_dir) = decode_map_file(path)?;

    let mut slots = Vec::with_capacity(map.tileset_images.len());
    for image in &map.tileset_images {
        match image {
            None => slots.push(None),
            Some(rel) => {
                let img_path = map_dir.join(rel);
                let tex = load_texture(img_path.to_string_lossy().as_ref())
                    .await
                    .with_context(|| format!("Loading texture {rel}"))?;
                slots.push(Some(TextureAtlas::new(tex)));
            }
        }
    }

    let mut engine = TilemapEngine::new(config);
    engine.set_data(map.width, map.height, map.data)?;
    engine.set_tileset(map.tile_w as f32, map.tile_h as f32, slots)?;
    engine.refresh();
    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock went backwards")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("autotilemap_loader_{nanos}"));
        fs::create_dir_all(&dir).expect("failed to create temp dir");
        dir
    }

    fn tiny_map_json() -> String {
        let data: Vec<String> = (0..1 * 1 * LAYER_COUNT).map(|_| "0".to_owned()).collect();
        format!(
            r#"{{"width":1,"height":1,"tilewidth":32,"tileheight":32,
                "data":[{}],"tilesets":["A1.png",null]}}"#,
            data.join(",")
        )
    }

    #[test]
    fn decodes_a_valid_map() {
        let map = decode_map_str(&tiny_map_json()).expect("decode");
        assert_eq!(map.width, 1);
        assert_eq!(map.tile_w, 32);
        assert_eq!(map.data.len(), LAYER_COUNT);
        assert_eq!(map.tileset_images.len(), 2);
        assert_eq!(map.tileset_images[0].as_deref(), Some("A1.png"));
        assert!(map.tileset_images[1].is_none());
    }

    #[test]
    fn tile_size_defaults_to_48() {
        let json = r#"{"width":1,"height":1,"data":[0,0,0,0,0]}"#;
        let map = decode_map_str(json).expect("decode");
        assert_eq!((map.tile_w, map.tile_h), (48, 48));
    }

    #[test]
    fn rejects_non_json_extension() {
        let err = decode_map_file("map.tmx").unwrap_err();
        assert!(matches!(err, MapError::InvalidMap(_)));
    }

    #[test]
    fn returns_typed_error_for_malformed_json() {
        let dir = temp_dir();
        let path = dir.join("map.json");
        fs::write(&path, "{ not json").expect("failed to write map");
        let err = decode_map_file(path.to_str().expect("path utf8")).unwrap_err();
        assert!(matches!(err, MapError::Json { .. }));
    }

    #[test]
    fn returns_typed_error_for_missing_file() {
        let dir = temp_dir();
        let path = dir.join("missing.json");
        let err = decode_map_file(path.to_str().expect("path utf8")).unwrap_err();
        assert!(matches!(err, MapError::Io { .. }));
    }

    #[test]
    fn rejects_short_data() {
        let json = r#"{"width":2,"height":2,"data":[0,0,0]}"#;
        let err = decode_map_str(json).unwrap_err();
        assert!(matches!(
            err,
            MapError::DataLength { expected: 20, actual: 3 }
        ));
    }

    #[test]
    fn rejects_ten_tileset_slots() {
        let json = r#"{"width":1,"height":1,"data":[0,0,0,0,0],
            "tilesets":[null,null,null,null,null,null,null,null,null,null]}"#;
        let err = decode_map_str(json).unwrap_err();
        assert!(matches!(err, MapError::TooManySlots(10)));
    }

    #[test]
    fn rejects_zero_dimensions() {
        let json = r#"{"width":0,"height":3,"data":[]}"#;
        let err = decode_map_str(json).unwrap_err();
        assert!(matches!(err, MapError::InvalidMap(_)));
    }
}
