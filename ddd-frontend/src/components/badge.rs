use leptos::*;

use ddd_core::card::BadgeVariant;

#[component]
pub fn Badge(variant: BadgeVariant, children: Children) -> impl IntoView {
    let class = format!(
        "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-semibold {}",
        variant.css_class()
    );
    view! { <span class=class>{ children() }</span> }
}
