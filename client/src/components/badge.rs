//! Small status pill.

use leptos::prelude::*;

/// Visual style of a [`Badge`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Success,
    Destructive,
    Outline,
}

impl BadgeVariant {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "badge badge--default",
            Self::Success => "badge badge--success",
            Self::Destructive => "badge badge--destructive",
            Self::Outline => "badge badge--outline",
        }
    }
}

#[component]
pub fn Badge(#[prop(optional)] variant: BadgeVariant, #[prop(optional)] block: bool, children: Children) -> impl IntoView {
    view! {
        <span class=variant.class() class:badge--block=block>
            {children()}
        </span>
    }
}
