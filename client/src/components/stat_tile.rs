//! Headline figure card used on the teacher and admin dashboards.

use catalog::dashboard::{StatCard, StatKind};
use leptos::prelude::*;

use crate::components::card::{Card, CardContent, CardHeader, CardTitle};
use crate::components::icon::IconName;

#[cfg(test)]
#[path = "stat_tile_test.rs"]
mod stat_tile_test;

#[must_use]
pub fn stat_icon(kind: StatKind) -> IconName {
    match kind {
        StatKind::Courses => IconName::BookOpen,
        StatKind::Students => IconName::Users,
        StatKind::Teachers => IconName::GraduationCap,
        StatKind::Salary => IconName::Wallet,
        StatKind::Income => IconName::DollarSign,
    }
}

/// Accent class for the figure.
#[must_use]
pub fn stat_accent(kind: StatKind) -> &'static str {
    match kind {
        StatKind::Courses => "stat__value--primary",
        StatKind::Students => "stat__value--secondary",
        StatKind::Teachers | StatKind::Salary => "stat__value--accent",
        StatKind::Income => "stat__value--money",
    }
}

#[component]
pub fn StatTile(stat: StatCard, #[prop(optional)] compact: bool) -> impl IntoView {
    view! {
        <Card>
            <CardHeader>
                <CardTitle icon=stat_icon(stat.kind) compact=compact>
                    {stat.title}
                </CardTitle>
            </CardHeader>
            <CardContent>
                <div class=format!("stat__value {}", stat_accent(stat.kind))>{stat.value}</div>
                {stat.note.map(|note| view! { <p class="stat__note muted">{note}</p> })}
            </CardContent>
        </Card>
    }
}
