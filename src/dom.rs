//! Browser bindings: descriptor/geometry readers over tile nodes, page
//! measurement for the minimap, and the `ModalHost` implementation that
//! actually moves nodes around the document.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};
use yew::Callback;

use crate::model::{GenericContent, LinkKind, TileCategory, TileDescriptor};
use crate::state::minimap::{Extent, Offset, Projection, TileGeometry, project};
use crate::state::modal::ModalHost;

/// Marker class a tile uses to opt out of minimap projection.
pub const MINIMAP_HIDDEN_CLASS: &str = "minimap-hidden";
/// Marker class shared by every modal backdrop element.
pub const BACKDROP_CLASS: &str = "modal-backdrop";
/// Attribute recording a relocated node's original parent id.
const ORIGIN_PARENT_ATTR: &str = "data-origin-parent";

fn child_text(tile: &Element, selector: &str) -> String {
    tile.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|n| n.text_content())
        .unwrap_or_default()
}

/// Reads the tile's descriptor straight off the node. Called on every
/// interaction; nothing is cached, so edits to the document show up
/// immediately.
pub fn read_descriptor(tile: &Element) -> TileDescriptor {
    TileDescriptor {
        title: child_text(tile, ".tile-title"),
        description: child_text(tile, ".tile-desc"),
        category: TileCategory::from_class_attr(&tile.class_name()),
        link_kind: LinkKind::from_attr(tile.get_attribute("data-link-type").as_deref()),
        target_url: tile.get_attribute("data-url"),
        icon_glyph: tile.get_attribute("data-icon").unwrap_or_default(),
        icon_color: tile.get_attribute("data-icon-color").unwrap_or_default(),
        hidden: tile.class_list().contains(MINIMAP_HIDDEN_CLASS),
    }
}

fn tile_geometry(tile: &Element) -> TileGeometry {
    let hidden = tile.class_list().contains(MINIMAP_HIDDEN_CLASS);
    match tile.dyn_ref::<HtmlElement>() {
        Some(el) => TileGeometry {
            left: el.offset_left() as f64,
            top: el.offset_top() as f64,
            width: el.offset_width() as f64,
            height: el.offset_height() as f64,
            hidden,
        },
        None => TileGeometry {
            hidden,
            ..TileGeometry::default()
        },
    }
}

pub fn tile_elements(document: &Document) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(".tile") else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}

/// Full scrollable canvas extent, per the body's scroll size.
pub fn canvas_extent(document: &Document) -> Extent {
    document
        .body()
        .map(|b| Extent::new(b.scroll_width() as f64, b.scroll_height() as f64))
        .unwrap_or_default()
}

pub fn window_extent(window: &Window) -> Extent {
    let axis = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Extent::new(axis(window.inner_width()), axis(window.inner_height()))
}

pub fn scroll_offset(window: &Window) -> Offset {
    Offset {
        x: window.page_x_offset().unwrap_or(0.0),
        y: window.page_y_offset().unwrap_or(0.0),
    }
}

pub fn element_extent(el: &Element) -> Extent {
    el.dyn_ref::<HtmlElement>()
        .map(|h| Extent::new(h.offset_width() as f64, h.offset_height() as f64))
        .unwrap_or_default()
}

/// One projection cycle over the live page: gathers every tile's geometry
/// and the current measurements, then runs the pure projector.
pub fn project_page(window: &Window, document: &Document, minimap: &Element) -> Projection {
    let tiles: Vec<TileGeometry> = tile_elements(document).iter().map(tile_geometry).collect();
    project(
        &tiles,
        canvas_extent(document),
        element_extent(minimap),
        scroll_offset(window),
        window_extent(window),
    )
}

/// True when the event target is a modal backdrop element itself, i.e. a
/// click outside the content but inside the modal surface.
pub fn is_backdrop(el: &Element) -> bool {
    el.class_list().contains(BACKDROP_CLASS)
}

/// `ModalHost` over the real document. The generic modal stays Yew-rendered,
/// so showing/hiding it goes through a callback into component state;
/// everything else is raw DOM.
pub struct PageHost {
    window: Window,
    document: Document,
    set_generic: Callback<Option<GenericContent>>,
}

impl PageHost {
    pub fn new(set_generic: Callback<Option<GenericContent>>) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self {
            window,
            document,
            set_generic,
        })
    }
}

impl ModalHost for PageHost {
    type Node = Element;

    fn open_url(&mut self, url: &str) {
        let _ = self.window.open_with_url(url);
    }

    fn find_custom_surface(&mut self, tile: &Element) -> Option<Element> {
        tile.query_selector(".custom-modal").ok().flatten()
    }

    fn ensure_parent_id(&mut self, node: &Element) -> Option<String> {
        let parent = node.parent_element()?;
        let id = parent.id();
        if !id.is_empty() {
            return Some(id);
        }
        let token = format!(
            "modal-anchor-{:08x}",
            (js_sys::Math::random() * 4_294_967_296.0) as u32
        );
        parent.set_id(&token);
        Some(token)
    }

    fn relocate_to_root(&mut self, node: &Element, parent_id: Option<&str>) {
        if let Some(id) = parent_id {
            let _ = node.set_attribute(ORIGIN_PARENT_ATTR, id);
        }
        if let Some(body) = self.document.body() {
            let _ = body.append_child(node);
        }
    }

    fn restore(&mut self, node: &Element, parent_id: &str) -> bool {
        let Some(parent) = self.document.get_element_by_id(parent_id) else {
            return false;
        };
        let _ = node.remove_attribute(ORIGIN_PARENT_ATTR);
        parent.append_child(node).is_ok()
    }

    fn set_active(&mut self, node: &Element, active: bool) {
        let classes = node.class_list();
        let _ = if active {
            classes.add_1("active")
        } else {
            classes.remove_1("active")
        };
    }

    fn show_generic(&mut self, content: &GenericContent) {
        self.set_generic.emit(Some(content.clone()));
    }

    fn hide_generic(&mut self) {
        self.set_generic.emit(None);
    }

    fn set_scroll_suspended(&mut self, suspended: bool) {
        let Some(body) = self.document.body() else {
            return;
        };
        let style = body.style();
        if suspended {
            let _ = style.set_property("overflow", "hidden");
        } else {
            let _ = style.remove_property("overflow");
        }
    }
}
