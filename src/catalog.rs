//! Static tile catalog. Content authoring happens in `assets/catalog.json`,
//! embedded at compile time and deserialized once at startup; the rest of
//! the app only ever reads tiles back out of the rendered document.

use serde::Deserialize;

use crate::model::{LinkKind, TileCategory};

const CATALOG_JSON: &str = include_str!("../assets/catalog.json");

/// Default tile footprint on the canvas, in CSS pixels.
pub const TILE_WIDTH: f64 = 220.0;
pub const TILE_HEIGHT: f64 = 130.0;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

/// Body of a tile-owned custom modal.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CustomDetail {
    pub heading: String,
    pub body: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TileEntry {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_category")]
    pub category: TileCategory,
    pub link: LinkKind,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub icon_color: String,
    pub left: f64,
    pub top: f64,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub detail: Option<CustomDetail>,
}

fn default_category() -> TileCategory {
    TileCategory::External
}

fn default_width() -> f64 {
    TILE_WIDTH
}

fn default_height() -> f64 {
    TILE_HEIGHT
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Catalog {
    pub canvas: CanvasSize,
    pub tiles: Vec<TileEntry>,
}

impl Catalog {
    pub fn load() -> Self {
        serde_json::from_str(CATALOG_JSON).expect("embedded catalog.json is well-formed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn embedded_catalog_parses() {
        let catalog = Catalog::load();
        assert!(catalog.canvas.width > 0.0 && catalog.canvas.height > 0.0);
        assert!(!catalog.tiles.is_empty());
    }

    #[test]
    fn tile_ids_are_unique() {
        let catalog = Catalog::load();
        let ids: HashSet<&str> = catalog.tiles.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.tiles.len());
    }

    #[test]
    fn external_tiles_carry_urls_and_modal_tiles_details() {
        let catalog = Catalog::load();
        for tile in &catalog.tiles {
            match tile.link {
                LinkKind::External => assert!(tile.url.is_some(), "{} missing url", tile.id),
                LinkKind::Modal => assert!(tile.detail.is_some(), "{} missing detail", tile.id),
                LinkKind::Other => {}
            }
            assert!(!tile.title.is_empty());
            assert!(tile.left + tile.width <= catalog.canvas.width);
            assert!(tile.top + tile.height <= catalog.canvas.height);
        }
    }
}
