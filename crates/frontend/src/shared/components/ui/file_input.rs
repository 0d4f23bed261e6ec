use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// File picker with label support.
///
/// `accept` only filters the browser dialog; nothing is validated here.
#[component]
pub fn FileInput(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Accept attribute, e.g. ".txt,.md"
    #[prop(optional, into)]
    accept: MaybeProp<String>,
    /// Allow selecting several files
    #[prop(optional)]
    multiple: bool,
    /// Change handler, receives the picker's current file list
    #[prop(optional)]
    on_change: Option<Callback<Option<web_sys::FileList>>>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_accept = move || accept.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                type="file"
                class="form__file"
                accept=input_accept
                multiple=multiple
                on:change=move |ev| {
                    let files = ev
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                        .and_then(|input| input.files());
                    if let Some(handler) = on_change {
                        handler.run(files);
                    }
                }
            />
        </div>
    }
}
