//! Catalog card for one course.
//!
//! DESIGN
//! ======
//! Cards fade in one after another: each card's animation starts a tenth of
//! a second after the previous one, based on its position in the filtered
//! list rather than its catalog id.

use catalog::Course;
use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeVariant};
use crate::components::button::{Button, ButtonSize};
use crate::components::card::{Card, CardContent, CardDescription, CardHeader, CardTitle};
use crate::components::icon::{Icon, IconName};

#[cfg(test)]
#[path = "course_card_test.rs"]
mod course_card_test;

/// Badge style for the remaining-places counter.
#[must_use]
pub fn spots_variant(course: &Course) -> BadgeVariant {
    if course.is_nearly_full() { BadgeVariant::Destructive } else { BadgeVariant::Default }
}

/// `animation-delay` for the card at `index`, in tenths of a second.
#[must_use]
pub fn animation_delay(index: usize) -> String {
    format!("{}.{}s", index / 10, index % 10)
}

#[component]
pub fn CourseCard(course: &'static Course, index: usize) -> impl IntoView {
    let details = [
        (IconName::Users, "course-card__icon--primary", course.age),
        (IconName::Calendar, "course-card__icon--secondary", course.schedule),
        (IconName::Clock, "course-card__icon--accent", course.duration),
        (IconName::MapPin, "course-card__icon--muted", course.room),
        (IconName::User, "course-card__icon--muted", course.teacher),
    ];

    view! {
        <Card interactive=true delay=animation_delay(index)>
            <CardHeader>
                <div class="course-card__emoji" aria-hidden="true">{course.emoji}</div>
                <CardTitle>{course.title}</CardTitle>
                <CardDescription>{course.description}</CardDescription>
            </CardHeader>
            <CardContent>
                <ul class="course-card__details">
                    {details
                        .into_iter()
                        .map(|(icon, tone, text)| {
                            view! {
                                <li class="course-card__detail">
                                    <span class=tone>
                                        <Icon name=icon size=16/>
                                    </span>
                                    <span>{text}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
                <div class="course-card__footer">
                    <span class="course-card__price">{course.price}</span>
                    <Badge variant=spots_variant(course)>{format!("{} мест", course.spots)}</Badge>
                </div>
                <Button size=ButtonSize::Large icon=IconName::UserPlus full_width=true>
                    "Записаться"
                </Button>
            </CardContent>
        </Card>
    }
}
