use yew::prelude::*;

use crate::model::GenericContent;

#[derive(Properties, PartialEq, Clone)]
pub struct GenericModalProps {
    /// `None` renders nothing; the modal has no hidden-but-mounted state.
    pub content: Option<GenericContent>,
    pub on_close: Callback<()>,
}

/// Shared detail surface populated from a tile descriptor. Backdrop clicks
/// are handled by the document-level delegated listener; the close button
/// additionally emits `on_close` directly.
#[function_component]
pub fn GenericModal(props: &GenericModalProps) -> Html {
    let Some(content) = &props.content else {
        return html! {};
    };

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div id="modal" class="modal-backdrop" style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:40;">
            <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:20px 24px; min-width:300px; max-width:440px; text-align:center;">
                <div style="display:flex; justify-content:flex-end;">
                    <button class="modal-close" onclick={close_cb} style="padding:2px 8px;">{"×"}</button>
                </div>
                <div class="tile-icon" style={format!("display:inline-flex; align-items:center; justify-content:center; width:56px; height:56px; border-radius:12px; font-size:28px; background-color:{};", content.icon_color)}>
                    { &content.icon_glyph }
                </div>
                <h2 style="margin:12px 0 6px 0;">{ &content.title }</h2>
                <p style="margin:0; opacity:0.8;">{ &content.description }</p>
            </div>
        </div>
    }
}
