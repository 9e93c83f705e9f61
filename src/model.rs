//! Value types derived from tile markup: category markers, link kinds and
//! the per-interaction tile descriptor.

use serde::Deserialize;

/// Closed set of tile categories, resolved from the tile's class markers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileCategory {
    Entertainment,
    Food,
    Shopping,
    Service,
    Info,
    Special,
    External,
}

/// Marker classes in resolution priority order. A tile carries at most one;
/// the first present wins, no marker means `External`.
const CATEGORY_MARKERS: [(&str, TileCategory); 6] = [
    ("type-entertainment", TileCategory::Entertainment),
    ("type-food", TileCategory::Food),
    ("type-shopping", TileCategory::Shopping),
    ("type-service", TileCategory::Service),
    ("type-info", TileCategory::Info),
    ("type-special", TileCategory::Special),
];

impl TileCategory {
    /// Resolves the category from a whitespace-separated class attribute.
    pub fn from_class_attr(class_attr: &str) -> Self {
        for (marker, cat) in CATEGORY_MARKERS {
            if class_attr.split_whitespace().any(|c| c == marker) {
                return cat;
            }
        }
        TileCategory::External
    }

    /// The marker class emitted on the tile node, if the category has one.
    pub fn marker(self) -> Option<&'static str> {
        CATEGORY_MARKERS
            .iter()
            .find(|(_, c)| *c == self)
            .map(|(m, _)| *m)
    }

    pub fn accent_color(self) -> &'static str {
        match self {
            TileCategory::Entertainment => "#bc8cff",
            TileCategory::Food => "#f0883e",
            TileCategory::Shopping => "#58a6ff",
            TileCategory::Service => "#3fb950",
            TileCategory::Info => "#e3b341",
            TileCategory::Special => "#f778ba",
            TileCategory::External => "#8b949e",
        }
    }
}

/// Normalized form of the free-form `data-link-type` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    External,
    Modal,
    Other,
}

impl LinkKind {
    pub fn from_attr(attr: Option<&str>) -> Self {
        match attr.map(|a| a.trim().to_ascii_lowercase()).as_deref() {
            Some("external") => LinkKind::External,
            Some("modal") => LinkKind::Modal,
            _ => LinkKind::Other,
        }
    }

    pub fn attr_value(self) -> &'static str {
        match self {
            LinkKind::External => "external",
            LinkKind::Modal => "modal",
            LinkKind::Other => "other",
        }
    }
}

/// Snapshot of one tile's metadata, recomputed from the node on every
/// interaction so it always reflects the current document state.
#[derive(Clone, Debug, PartialEq)]
pub struct TileDescriptor {
    pub title: String,
    pub description: String,
    pub category: TileCategory,
    pub link_kind: LinkKind,
    pub target_url: Option<String>,
    pub icon_glyph: String,
    pub icon_color: String,
    /// Excluded from minimap projection only; the tile stays interactive.
    pub hidden: bool,
}

/// Content for the shared generic modal surface.
#[derive(Clone, Debug, PartialEq)]
pub struct GenericContent {
    pub title: String,
    pub description: String,
    pub icon_glyph: String,
    pub icon_color: String,
}

impl GenericContent {
    pub fn from_descriptor(desc: &TileDescriptor) -> Self {
        let icon_color = if desc.icon_color.is_empty() {
            "transparent".to_string()
        } else {
            desc.icon_color.clone()
        };
        Self {
            title: desc.title.clone(),
            description: desc.description.clone(),
            icon_glyph: desc.icon_glyph.clone(),
            icon_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_resolution_is_ordered() {
        assert_eq!(
            TileCategory::from_class_attr("tile type-food"),
            TileCategory::Food
        );
        // Two markers: the higher-priority one wins.
        assert_eq!(
            TileCategory::from_class_attr("tile type-shopping type-entertainment"),
            TileCategory::Entertainment
        );
    }

    #[test]
    fn category_defaults_to_external() {
        assert_eq!(TileCategory::from_class_attr("tile"), TileCategory::External);
        assert_eq!(TileCategory::from_class_attr(""), TileCategory::External);
        // Substrings of a marker are not markers.
        assert_eq!(
            TileCategory::from_class_attr("type-foodcourt"),
            TileCategory::External
        );
    }

    #[test]
    fn link_kind_normalizes_attr() {
        assert_eq!(LinkKind::from_attr(Some("external")), LinkKind::External);
        assert_eq!(LinkKind::from_attr(Some(" Modal ")), LinkKind::Modal);
        assert_eq!(LinkKind::from_attr(Some("popup")), LinkKind::Other);
        assert_eq!(LinkKind::from_attr(None), LinkKind::Other);
    }

    #[test]
    fn generic_content_defaults_icon_color() {
        let desc = TileDescriptor {
            title: "Info".into(),
            description: "Details".into(),
            category: TileCategory::Info,
            link_kind: LinkKind::Other,
            target_url: None,
            icon_glyph: String::new(),
            icon_color: String::new(),
            hidden: false,
        };
        let content = GenericContent::from_descriptor(&desc);
        assert_eq!(content.icon_color, "transparent");
        assert_eq!(content.title, "Info");
    }
}
