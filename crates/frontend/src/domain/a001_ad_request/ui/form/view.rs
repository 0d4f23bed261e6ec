//! Ad Request Form - View Component

use super::view_model::AdFormVm;
use crate::shared::components::ui::{Button, Checkbox, FileInput, Select, Textarea};
use contracts::domain::a001_ad_request::catalog::{product_options, PLATFORMS};
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn AdForm() -> impl IntoView {
    let vm = AdFormVm::new();

    view! {
        <h1>"AdBrains"</h1>

        <div class="card">
            <Select
                id="product-select"
                label="Choose a product:"
                value=Signal::derive(move || vm.form.with(|f| f.selected_product.clone()))
                options=product_options()
                on_change=Callback::new(move |v: String| vm.select_product(v))
            />
        </div>

        <div class="card">
            <p>"Choose advertising platforms:"</p>
            {PLATFORMS
                .iter()
                .map(|&platform| {
                    view! {
                        <Checkbox
                            id=platform
                            name="platform"
                            value=platform
                            label=platform.to_string()
                            checked=Signal::derive(move || {
                                vm.form.with(|f| f.is_platform_selected(platform))
                            })
                            on_change=Callback::new(move |checked: bool| {
                                vm.toggle_platform(platform, checked)
                            })
                        />
                    }
                })
                .collect_view()}
        </div>

        <div class="card">
            <FileInput
                id="file-attach"
                label="Attach .txt or .md files:"
                accept=".txt,.md"
                multiple=true
                on_change=Callback::new(move |files: Option<web_sys::FileList>| {
                    vm.attach_files(files)
                })
            />
        </div>

        <div class="card">
            <Textarea
                id="chat-input"
                label="Enter your message:"
                rows=4
                cols=50
                value=Signal::derive(move || vm.form.with(|f| f.chat_input.clone()))
                on_input=Callback::new(move |v: String| vm.edit_message(v))
            />
        </div>

        <Button on_click=Callback::new(move |_| vm.submit())>"Generate Ads"</Button>

        {move || {
            let status = vm.form.with(|f| f.status_message.clone());
            (!status.is_empty())
                .then(|| {
                    view! {
                        <div class="card">
                            <h2>"Status:"</h2>
                            <p>{status}</p>
                        </div>
                    }
                })
        }}
    }
}
