//! Button primitive with variants, sizes, and an optional leading icon.
//!
//! Buttons without `on_click` are rendered but do nothing when pressed.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconName};

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// CSS classes for a variant/size pair.
#[must_use]
pub fn button_class(variant: ButtonVariant, size: ButtonSize) -> String {
    let variant = match variant {
        ButtonVariant::Primary => "btn--primary",
        ButtonVariant::Outline => "btn--outline",
        ButtonVariant::Ghost => "btn--ghost",
    };
    let size = match size {
        ButtonSize::Small => "btn--sm",
        ButtonSize::Medium => "btn--md",
        ButtonSize::Large => "btn--lg",
    };
    format!("btn {variant} {size}")
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional)] full_width: bool,
    /// Accessible name for icon-only buttons.
    #[prop(optional)]
    label: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let icon_size: u16 = if size == ButtonSize::Small { 14 } else { 18 };
    view! {
        <button
            type="button"
            class=button_class(variant, size)
            class:btn--block=full_width
            aria-label=label
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            {icon.map(|name| view! { <Icon name=name size=icon_size/> })}
            {children.map(|children| children())}
        </button>
    }
}
