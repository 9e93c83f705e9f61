use yew::prelude::*;

use crate::state::minimap::Projection;

#[derive(Properties, PartialEq, Clone)]
pub struct MinimapProps {
    pub projection: Projection,
    /// Exposed so the app can measure the widget's rendered extents.
    pub widget_ref: NodeRef,
}

/// Fixed-size overview widget. The dot set and viewport rectangle are
/// replaced wholesale every projection cycle.
#[function_component]
pub fn Minimap(props: &MinimapProps) -> Html {
    let p = &props.projection;
    html! {
        <div
            ref={props.widget_ref.clone()}
            class="minimap"
            style="position:fixed; right:16px; bottom:16px; width:180px; height:150px; background:rgba(22,27,34,0.92); border:1px solid #30363d; border-radius:8px; overflow:hidden; z-index:30;"
        >
            <div class="minimap-content" style="position:relative; width:100%; height:100%;">
                <div
                    class="minimap-viewport"
                    style={format!(
                        "position:absolute; left:{}px; top:{}px; width:{}px; height:{}px; border:1px solid #58a6ff; background:rgba(88,166,255,0.15);",
                        p.viewport.left, p.viewport.top, p.viewport.width, p.viewport.height
                    )}
                ></div>
                {
                    for p.dots.iter().map(|d| html! {
                        <div
                            class="minimap-dot"
                            style={format!(
                                "position:absolute; left:{}px; top:{}px; width:4px; height:4px; border-radius:50%; background:#e3b341; transform:translate(-50%, -50%);",
                                d.x, d.y
                            )}
                        ></div>
                    })
                }
            </div>
        </div>
    }
}
