use leptos::prelude::*;

/// Checkbox component, label rendered before the box
#[component]
pub fn Checkbox(
    /// Label text
    #[prop(into)]
    label: Signal<String>,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    /// `value` attribute of the input
    #[prop(optional, into)]
    value: MaybeProp<String>,
    /// `name` attribute shared by a group of checkboxes
    #[prop(optional, into)]
    name: MaybeProp<String>,
    /// ID for the checkbox element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let checkbox_id = move || id.get().unwrap_or_default();
    let checkbox_value = move || value.get().unwrap_or_default();
    let checkbox_name = move || name.get().unwrap_or_default();

    view! {
        <div class="form__checkbox-wrapper">
            <label class="form__checkbox-label" for=checkbox_id>
                {label}
            </label>
            <input
                id=checkbox_id
                type="checkbox"
                class="form__checkbox"
                name=checkbox_name
                value=checkbox_value
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
        </div>
    }
}
