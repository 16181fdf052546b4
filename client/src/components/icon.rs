//! Icon lookup by name.
//!
//! Icons are rendered as glyphs so the page needs no icon font or sprite
//! sheet. Each name also yields a CSS modifier for per-icon styling.

use leptos::prelude::*;

#[cfg(test)]
#[path = "icon_test.rs"]
mod icon_test;

/// Icons used across the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconName {
    BookOpen,
    Calendar,
    Check,
    ClipboardList,
    Clock,
    CreditCard,
    DollarSign,
    Edit,
    FileText,
    GraduationCap,
    MapPin,
    MessageSquare,
    Phone,
    Plus,
    Settings,
    Trash,
    User,
    UserPlus,
    Users,
    Wallet,
    X,
}

impl IconName {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::BookOpen => "📖",
            Self::Calendar => "📅",
            Self::Check => "✓",
            Self::ClipboardList => "📋",
            Self::Clock => "🕒",
            Self::CreditCard => "💳",
            Self::DollarSign => "💰",
            Self::Edit => "✎",
            Self::FileText => "📄",
            Self::GraduationCap => "🎓",
            Self::MapPin => "📍",
            Self::MessageSquare => "💬",
            Self::Phone => "📞",
            Self::Plus => "+",
            Self::Settings => "⚙",
            Self::Trash => "🗑",
            Self::User => "👤",
            Self::UserPlus => "🙋",
            Self::Users => "👥",
            Self::Wallet => "👛",
            Self::X => "✕",
        }
    }

    /// Kebab-case name used for the `icon--{slug}` modifier class.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::BookOpen => "book-open",
            Self::Calendar => "calendar",
            Self::Check => "check",
            Self::ClipboardList => "clipboard-list",
            Self::Clock => "clock",
            Self::CreditCard => "credit-card",
            Self::DollarSign => "dollar-sign",
            Self::Edit => "edit",
            Self::FileText => "file-text",
            Self::GraduationCap => "graduation-cap",
            Self::MapPin => "map-pin",
            Self::MessageSquare => "message-square",
            Self::Phone => "phone",
            Self::Plus => "plus",
            Self::Settings => "settings",
            Self::Trash => "trash",
            Self::User => "user",
            Self::UserPlus => "user-plus",
            Self::Users => "users",
            Self::Wallet => "wallet",
            Self::X => "x",
        }
    }
}

/// A decorative icon. Hidden from assistive technology.
#[component]
pub fn Icon(name: IconName, #[prop(optional)] size: Option<u16>) -> impl IntoView {
    let style = size.map(|px| format!("font-size: {px}px"));
    view! {
        <span class=format!("icon icon--{}", name.slug()) style=style aria-hidden="true">
            {name.glyph()}
        </span>
    }
}
