//! Card layout primitives: container, header, title, description, content.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconName};

/// Bordered surface grouping related content.
#[component]
pub fn Card(
    #[prop(optional)] centered: bool,
    /// Lifts on hover; used for catalog and feature cards.
    #[prop(optional)]
    interactive: bool,
    /// CSS `animation-delay`, e.g. `"0.2s"`.
    #[prop(optional, into)]
    delay: Option<String>,
    children: Children,
) -> impl IntoView {
    let style = delay.map(|d| format!("animation-delay: {d}"));
    view! {
        <div class="card" class:card--centered=centered class:card--interactive=interactive style=style>
            {children()}
        </div>
    }
}

#[component]
pub fn CardHeader(children: Children) -> impl IntoView {
    view! { <div class="card__header">{children()}</div> }
}

/// Card heading with an optional leading icon.
#[component]
pub fn CardTitle(#[prop(optional)] icon: Option<IconName>, #[prop(optional)] compact: bool, children: Children) -> impl IntoView {
    view! {
        <h3 class="card__title" class:card__title--compact=compact>
            {icon.map(|name| view! { <Icon name=name size=20/> })}
            {children()}
        </h3>
    }
}

#[component]
pub fn CardDescription(children: Children) -> impl IntoView {
    view! { <p class="card__description">{children()}</p> }
}

#[component]
pub fn CardContent(children: Children) -> impl IntoView {
    view! { <div class="card__content">{children()}</div> }
}
