use std::rc::Rc;
use yew::prelude::*;

use crate::catalog::{Catalog, CustomDetail, TileEntry};
use crate::dom::{BACKDROP_CLASS, MINIMAP_HIDDEN_CLASS};

#[derive(Properties, PartialEq, Clone)]
pub struct BoardProps {
    pub catalog: Rc<Catalog>,
    /// Live search query; non-matching tiles are dimmed, never removed.
    pub query: String,
    pub on_tile_click: Callback<MouseEvent>,
}

fn matches_query(entry: &TileEntry, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let q = query.to_lowercase();
    entry.title.to_lowercase().contains(&q) || entry.description.to_lowercase().contains(&q)
}

/// Tile-owned custom modal surface, wrapped in an anchor the lifecycle
/// manager tags with an id before relocating the surface out.
fn custom_surface(detail: &CustomDetail) -> Html {
    html! {
        <div class="modal-anchor">
            <div class={classes!("custom-modal", BACKDROP_CLASS)}>
                <div class="custom-modal-content" style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:20px 24px; min-width:320px; max-width:480px;">
                    <div style="display:flex; justify-content:flex-end;">
                        <button class="modal-close" style="padding:2px 8px;">{"×"}</button>
                    </div>
                    <h2 style="margin:0 0 8px 0;">{ &detail.heading }</h2>
                    <p style="margin:0; opacity:0.85; line-height:1.5;">{ &detail.body }</p>
                </div>
            </div>
        </div>
    }
}

fn render_tile(entry: &TileEntry, query: &str, onclick: &Callback<MouseEvent>) -> Html {
    let dimmed = !matches_query(entry, query);
    let classes = classes!(
        "tile",
        entry.category.marker(),
        entry.hidden.then_some(MINIMAP_HIDDEN_CLASS),
    );
    let style = format!(
        "position:absolute; left:{}px; top:{}px; width:{}px; height:{}px; \
         box-sizing:border-box; background:#161b22; border:1px solid {}; border-radius:10px; \
         padding:10px 12px; cursor:pointer; opacity:{}; transition:opacity 0.15s;",
        entry.left,
        entry.top,
        entry.width,
        entry.height,
        entry.category.accent_color(),
        if dimmed { "0.3" } else { "1" },
    );
    html! {
        <div
            class={classes}
            style={style}
            data-link-type={entry.link.attr_value()}
            data-url={entry.url.clone()}
            data-icon={entry.icon.clone()}
            data-icon-color={entry.icon_color.clone()}
            onclick={onclick.clone()}
        >
            <div
                class="tile-icon"
                style={format!("display:inline-flex; align-items:center; justify-content:center; width:32px; height:32px; border-radius:8px; font-size:18px; background-color:{};", entry.icon_color)}
            >
                { &entry.icon }
            </div>
            <div class="tile-title" style="font-weight:600; margin-top:6px;">{ &entry.title }</div>
            <div class="tile-desc" style="font-size:12px; opacity:0.75; margin-top:2px;">{ &entry.description }</div>
            {
                match &entry.detail {
                    Some(detail) => custom_surface(detail),
                    None => html! {},
                }
            }
        </div>
    }
}

/// The full scrollable canvas with every tile placed absolutely on it.
#[function_component]
pub fn Board(props: &BoardProps) -> Html {
    html! {
        <div
            id="canvas"
            style={format!(
                "position:relative; width:{}px; height:{}px;",
                props.catalog.canvas.width, props.catalog.canvas.height
            )}
        >
            { for props.catalog.tiles.iter().map(|t| render_tile(t, &props.query, &props.on_tile_click)) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LinkKind, TileCategory};

    fn entry(title: &str, desc: &str) -> TileEntry {
        TileEntry {
            id: "t".into(),
            title: title.into(),
            description: desc.into(),
            category: TileCategory::Food,
            link: LinkKind::Other,
            url: None,
            icon: String::new(),
            icon_color: String::new(),
            left: 0.0,
            top: 0.0,
            width: 100.0,
            height: 100.0,
            hidden: false,
            detail: None,
        }
    }

    #[test]
    fn query_matches_title_or_description_case_insensitively() {
        let e = entry("Noodle Bar", "Hand-pulled noodles");
        assert!(matches_query(&e, ""));
        assert!(matches_query(&e, "noodle"));
        assert!(matches_query(&e, "PULLED"));
        assert!(!matches_query(&e, "cinema"));
    }
}
