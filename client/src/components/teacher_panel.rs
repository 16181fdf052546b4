//! Teacher dashboard: headline figures, lesson schedule, and student list.

use catalog::dashboard::{StudentProgress, TEACHER_LESSONS, TEACHER_STATS, TEACHER_STUDENTS, TeacherLesson};
use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeVariant};
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::card::{Card, CardContent, CardHeader, CardTitle};
use crate::components::icon::IconName;
use crate::components::stat_tile::StatTile;

#[cfg(test)]
#[path = "teacher_panel_test.rs"]
mod teacher_panel_test;

/// Badge style and caption for a student's payment state.
#[must_use]
pub fn payment_badge(paid: bool) -> (BadgeVariant, &'static str) {
    if paid { (BadgeVariant::Default, "Оплачено") } else { (BadgeVariant::Destructive, "Не оплачено") }
}

#[component]
pub fn TeacherPanel() -> impl IntoView {
    view! {
        <div class="container dashboard fade-in">
            <h2 class="dashboard__title">"Кабинет педагога"</h2>

            <div class="grid grid--3 dashboard__cards">
                {TEACHER_STATS.iter().map(|stat| view! { <StatTile stat=*stat/> }).collect::<Vec<_>>()}
            </div>

            <Card>
                <CardHeader>
                    <CardTitle>"Расписание занятий"</CardTitle>
                </CardHeader>
                <CardContent>
                    <div class="row-list">
                        {TEACHER_LESSONS.iter().map(|lesson| view! { <LessonItem lesson=*lesson/> }).collect::<Vec<_>>()}
                    </div>
                </CardContent>
            </Card>

            <Card>
                <CardHeader>
                    <CardTitle>"Список учеников"</CardTitle>
                </CardHeader>
                <CardContent>
                    <div class="row-list row-list--tight">
                        {TEACHER_STUDENTS.iter().map(|student| view! { <StudentItem student=*student/> }).collect::<Vec<_>>()}
                    </div>
                </CardContent>
            </Card>
        </div>
    }
}

#[component]
fn LessonItem(lesson: TeacherLesson) -> impl IntoView {
    view! {
        <div class="row row--stacked row--hover">
            <div class="row__head">
                <div>
                    <p class="row__title row__title--large">{format!("{} - {}", lesson.course, lesson.lesson)}</p>
                    <p class="row__meta muted">{format!("{} • {}", lesson.date, lesson.time)}</p>
                </div>
                <Badge>{format!("{} учеников", lesson.students)}</Badge>
            </div>
            <div class="row__actions">
                <Button size=ButtonSize::Small variant=ButtonVariant::Outline icon=IconName::ClipboardList>
                    "Посещаемость"
                </Button>
                <Button size=ButtonSize::Small variant=ButtonVariant::Outline icon=IconName::FileText>
                    "План урока"
                </Button>
                <Button size=ButtonSize::Small variant=ButtonVariant::Outline icon=IconName::MessageSquare>
                    "Сообщения"
                </Button>
            </div>
        </div>
    }
}

#[component]
fn StudentItem(student: StudentProgress) -> impl IntoView {
    let (variant, caption) = payment_badge(student.paid);
    view! {
        <div class="row row--hover">
            <div>
                <p class="row__title">{student.name}</p>
                <p class="row__meta muted">{student.course}</p>
            </div>
            <div class="row__aside">
                <Badge variant=variant>{caption}</Badge>
                <span class="row__meta">{student.attendance}</span>
            </div>
        </div>
    }
}
