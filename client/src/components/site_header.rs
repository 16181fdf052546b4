//! Sticky site header with the brand and the role navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The four navigation buttons are the only writers of `ViewState::role`.
//! Each sets its role directly; there are no transition guards.

use catalog::Role;
use leptos::prelude::*;

use crate::components::button::{ButtonSize, ButtonVariant, button_class};
use crate::state::view::ViewState;

/// Brand name shown in the header and footer.
pub const BRAND: &str = "Детский Центр";

#[component]
pub fn SiteHeader(view: RwSignal<ViewState>) -> impl IntoView {
    let nav = Role::ALL
        .into_iter()
        .map(|role| {
            view! {
                <button
                    type="button"
                    class=format!("{} site-header__nav-item", button_class(ButtonVariant::Ghost, ButtonSize::Medium))
                    class:site-header__nav-item--active=move || view.get().role == role
                    aria-current=move || (view.get().role == role).then_some("page")
                    on:click=move |_| switch_role(view, role)
                >
                    {role.nav_label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <header class="site-header">
            <div class="container site-header__inner">
                <div class="site-header__brand">
                    <span class="site-header__logo" aria-hidden="true">"🚀"</span>
                    <h1 class="site-header__title gradient-text">{BRAND}</h1>
                </div>
                <nav class="site-header__nav">{nav}</nav>
            </div>
        </header>
    }
}

fn switch_role(view: RwSignal<ViewState>, role: Role) {
    #[cfg(feature = "hydrate")]
    log::debug!("role {} -> {role}", view.get_untracked().role);
    view.update(|v| v.set_role(role));
}
