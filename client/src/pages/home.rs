//! The single site page: header, the panel for the active role, footer.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page creates the `ViewState` signal and passes it to the header
//! (which changes the role) and the guest panel (which reads the filter).
//! Exactly one panel is mounted at a time, chosen by an exhaustive match on
//! the role.

use catalog::Role;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::admin_panel::AdminPanel;
use crate::components::guest_panel::GuestPanel;
use crate::components::parent_panel::ParentPanel;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::components::teacher_panel::TeacherPanel;
use crate::state::view::ViewState;

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

#[cfg(all(test, feature = "ssr"))]
#[path = "home_render_test.rs"]
mod home_render_test;

/// Document title for the active role.
#[must_use]
pub fn page_title(role: Role) -> &'static str {
    match role {
        Role::Guest => "Детский Центр | курсы",
        Role::Parent => "Детский Центр | личный кабинет",
        Role::Teacher => "Детский Центр | кабинет педагога",
        Role::Admin => "Детский Центр | администратор",
    }
}

/// The one panel shown for `role`. A fresh panel is built on every call, so
/// panel-local state never outlives a role switch.
pub fn role_panel(role: Role, view: RwSignal<ViewState>) -> AnyView {
    match role {
        Role::Guest => view! { <GuestPanel view=view/> }.into_any(),
        Role::Parent => view! { <ParentPanel/> }.into_any(),
        Role::Teacher => view! { <TeacherPanel/> }.into_any(),
        Role::Admin => view! { <AdminPanel/> }.into_any(),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let view = RwSignal::new(ViewState::default());

    // Filter changes must not remount the active panel.
    let role = Memo::new(move |_| view.get().role);

    let panel = move || role_panel(role.get(), view);

    view! {
        <Title text=move || page_title(role.get())/>
        <div class="page">
            <SiteHeader view=view/>
            <main class="page__main" data-role=move || role.get().as_str()>
                {panel}
            </main>
            <SiteFooter/>
        </div>
    }
}
