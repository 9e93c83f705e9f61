use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use super::{board::Board, generic_modal::GenericModal, minimap::Minimap};
use crate::catalog::Catalog;
use crate::dom::{self, PageHost};
use crate::model::GenericContent;
use crate::state::minimap::Projection;
use crate::state::modal::ModalManager;
use crate::util::clog;

/// Keyboard pan distance per keypress, in CSS pixels.
const PAN_STEP: f64 = 200.0;

#[function_component(App)]
pub fn app() -> Html {
    let catalog = use_memo((), |_| Catalog::load());
    let projection = use_state(Projection::default);
    let generic = use_state(|| None::<GenericContent>);
    let query = use_state(String::new);
    let manager = use_mut_ref(ModalManager::<Element>::new);
    let minimap_ref = use_node_ref();

    let set_generic = {
        let generic = generic.clone();
        Callback::from(move |c: Option<GenericContent>| generic.set(c))
    };

    // Single close path for Escape, backdrop clicks, close controls and the
    // window.closeModal global.
    let close_all: Rc<dyn Fn()> = {
        let manager = manager.clone();
        let set_generic = set_generic.clone();
        Rc::new(move || {
            if let Some(mut host) = PageHost::new(set_generic.clone()) {
                manager.borrow_mut().close_all(&mut host);
            }
        })
    };

    {
        let projection = projection.clone();
        let minimap_ref = minimap_ref.clone();
        let close_all = close_all.clone();
        let tile_count = catalog.tiles.len();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let document = window.document().expect("should have a document on window");
            clog(&format!("venue map mounted with {} tiles", tile_count));

            // Reprojection shared by the initial pass and the scroll/resize
            // handlers: measure everything fresh, replace the whole set.
            let reproject: Rc<dyn Fn()> = {
                let window = window.clone();
                let document = document.clone();
                let minimap_ref = minimap_ref.clone();
                let projection = projection.clone();
                Rc::new(move || {
                    if let Some(widget) = minimap_ref.cast::<Element>() {
                        projection.set(dom::project_page(&window, &document, &widget));
                    }
                })
            };

            // Start centered on the canvas.
            let canvas = dom::canvas_extent(&document);
            let win = dom::window_extent(&window);
            window.scroll_to_with_x_and_y(
                ((canvas.width - win.width) / 2.0).max(0.0),
                ((canvas.height - win.height) / 2.0).max(0.0),
            );
            (reproject)();

            let scroll_cb = {
                let reproject = reproject.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| reproject()) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref())
                .unwrap();

            let resize_cb = {
                let reproject = reproject.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| reproject()) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                .unwrap();

            // Arrow/WASD panning plus Escape to close whatever is open.
            let key_cb = {
                let window = window.clone();
                let close_all = close_all.clone();
                Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    let key = e.key().to_lowercase();
                    if key == "escape" {
                        close_all();
                        return;
                    }
                    // Don't hijack letter keys while typing in the search box.
                    let typing = e
                        .target()
                        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                        .is_some();
                    if typing {
                        return;
                    }
                    let (dx, dy) = match key.as_str() {
                        "arrowup" | "w" => (0.0, -PAN_STEP),
                        "arrowdown" | "s" => (0.0, PAN_STEP),
                        "arrowleft" | "a" => (-PAN_STEP, 0.0),
                        "arrowright" | "d" => (PAN_STEP, 0.0),
                        _ => return,
                    };
                    e.prevent_default();
                    window.scroll_by_with_x_and_y(dx, dy);
                }) as Box<dyn FnMut(_)>)
            };
            document
                .add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref())
                .unwrap();

            // One delegated listener covers backdrop clicks and close
            // controls for every modal instance, however many are open.
            let click_cb = {
                let close_all = close_all.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    let Some(el) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                        return;
                    };
                    if dom::is_backdrop(&el) || el.closest(".modal-close").ok().flatten().is_some()
                    {
                        close_all();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            document
                .add_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref())
                .unwrap();

            // window.closeModal() for inline markup and other scripts.
            let close_modal_global = {
                let close_all = close_all.clone();
                Closure::wrap(Box::new(move || close_all()) as Box<dyn FnMut()>)
            };
            let _ = js_sys::Reflect::set(
                window.as_ref(),
                &JsValue::from_str("closeModal"),
                close_modal_global.as_ref(),
            );

            let window_clone = window.clone();
            let document_clone = document.clone();
            move || {
                let _ = window_clone
                    .remove_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref());
                let _ = window_clone
                    .remove_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
                let _ = document_clone
                    .remove_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref());
                let _ = document_clone
                    .remove_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref());
                let _ = js_sys::Reflect::delete_property(
                    window_clone.unchecked_ref::<js_sys::Object>(),
                    &JsValue::from_str("closeModal"),
                );
                let _keep_alive = (&scroll_cb, &resize_cb, &key_cb, &click_cb, &close_modal_global);
            }
        });
    }

    // The descriptor is read back off the clicked node, not from the
    // catalog, so it reflects whatever is in the document right now.
    let on_tile_click = {
        let manager = manager.clone();
        let set_generic = set_generic.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let Some(tile) = target.closest(".tile").ok().flatten() else {
                return;
            };
            let desc = dom::read_descriptor(&tile);
            if let Some(mut host) = PageHost::new(set_generic.clone()) {
                manager.borrow_mut().open(&mut host, &tile, &desc);
            }
        })
    };

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            query.set(input.value());
        })
    };

    let on_generic_close = {
        let close_all = close_all.clone();
        Callback::from(move |_| close_all())
    };

    html! {
        <>
            <div id="top-bar" style="position:fixed; top:16px; left:16px; z-index:30; display:flex; gap:10px; align-items:center; background:rgba(22,27,34,0.92); border:1px solid #30363d; border-radius:8px; padding:8px 12px;">
                <span style="font-weight:600;">{"Venue Map"}</span>
                <input
                    class="search-box"
                    type="text"
                    placeholder="Search tiles…"
                    oninput={on_search}
                    style="background:#0d1117; border:1px solid #30363d; border-radius:6px; color:inherit; padding:4px 8px;"
                />
                <span style="font-size:11px; opacity:0.6;">{"Pan: arrows / WASD"}</span>
            </div>
            <Board catalog={catalog.clone()} query={(*query).clone()} on_tile_click={on_tile_click} />
            <Minimap projection={(*projection).clone()} widget_ref={minimap_ref.clone()} />
            <GenericModal content={(*generic).clone()} on_close={on_generic_close} />
        </>
    }
}
