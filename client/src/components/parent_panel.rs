//! Parent dashboard: student profile, lesson balance, active courses, and
//! the recent schedule with attendance.

use catalog::dashboard::{ACTIVE_COURSES, ATTENDANCE, AttendanceRow, AttendanceStatus, LESSON_BALANCE, STUDENT_PROFILE};
use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeVariant};
use crate::components::button::{Button, ButtonVariant};
use crate::components::card::{Card, CardContent, CardHeader, CardTitle};
use crate::components::icon::{Icon, IconName};

#[cfg(test)]
#[path = "parent_panel_test.rs"]
mod parent_panel_test;

/// Badge style, icon, and caption for an attendance status.
#[must_use]
pub fn attendance_badge(status: AttendanceStatus) -> (BadgeVariant, IconName, &'static str) {
    match status {
        AttendanceStatus::Present => (BadgeVariant::Success, IconName::Check, "Присутствовал"),
        AttendanceStatus::Absent => (BadgeVariant::Destructive, IconName::X, "Отсутствовал"),
        AttendanceStatus::Upcoming => (BadgeVariant::Outline, IconName::Clock, "Предстоит"),
    }
}

#[component]
pub fn ParentPanel() -> impl IntoView {
    let profile = STUDENT_PROFILE;
    let profile_rows = [
        ("Имя:", profile.name),
        ("Возраст:", profile.age),
        ("Родитель:", profile.parent),
        ("Телефон:", profile.phone),
    ];

    view! {
        <div class="container dashboard fade-in">
            <h2 class="dashboard__title">"Личный кабинет ученика"</h2>

            <div class="grid grid--3 dashboard__cards">
                <Card>
                    <CardHeader>
                        <CardTitle icon=IconName::User>"Профиль"</CardTitle>
                    </CardHeader>
                    <CardContent>
                        {profile_rows
                            .into_iter()
                            .map(|(label, value)| view! { <p><strong>{label}</strong> " " {value}</p> })
                            .collect::<Vec<_>>()}
                        <Button variant=ButtonVariant::Outline icon=IconName::Edit full_width=true>
                            "Редактировать"
                        </Button>
                    </CardContent>
                </Card>

                <Card>
                    <CardHeader>
                        <CardTitle icon=IconName::Wallet>"Баланс"</CardTitle>
                    </CardHeader>
                    <CardContent>
                        <div class="stat__value stat__value--primary">{LESSON_BALANCE.remaining}</div>
                        <p class="stat__note muted">{LESSON_BALANCE.paid_until}</p>
                        <Button icon=IconName::CreditCard full_width=true>
                            "Пополнить баланс"
                        </Button>
                    </CardContent>
                </Card>

                <Card>
                    <CardHeader>
                        <CardTitle icon=IconName::BookOpen>"Активные курсы"</CardTitle>
                    </CardHeader>
                    <CardContent>
                        {ACTIVE_COURSES
                            .iter()
                            .map(|course| view! { <Badge block=true>{*course}</Badge> })
                            .collect::<Vec<_>>()}
                    </CardContent>
                </Card>
            </div>

            <Card>
                <CardHeader>
                    <CardTitle>"Расписание и посещаемость"</CardTitle>
                </CardHeader>
                <CardContent>
                    <div class="row-list">
                        {ATTENDANCE.iter().map(|row| view! { <AttendanceItem row=*row/> }).collect::<Vec<_>>()}
                    </div>
                </CardContent>
            </Card>
        </div>
    }
}

#[component]
fn AttendanceItem(row: AttendanceRow) -> impl IntoView {
    let (variant, icon, caption) = attendance_badge(row.status);
    view! {
        <div class="row">
            <div>
                <p class="row__title">{format!("{} - {}", row.date, row.course)}</p>
                <p class="row__meta muted">{row.time}</p>
                {row.reason.map(|reason| view! { <p class="row__meta row__meta--warning">{reason}</p> })}
            </div>
            <Badge variant=variant>
                <Icon name=icon size=14/>
                {caption}
            </Badge>
        </div>
    }
}
