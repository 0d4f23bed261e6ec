use crate::domain::a001_ad_request::ui::form::AdForm;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AdForm />
    }
}
