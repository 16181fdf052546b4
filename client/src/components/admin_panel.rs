//! Admin dashboard: headline figures and the courses / students / teachers /
//! finance tabs.
//!
//! DESIGN
//! ======
//! The tab selection is a signal created inside this component, so it is
//! dropped when another role is shown and starts on `Courses` again the next
//! time the admin panel mounts. Finance totals are the published figures from
//! the report, not sums of the rows above them.

use catalog::dashboard::{
    ADMIN_STATS, ADMIN_STUDENTS, ADMIN_TEACHERS, FinanceReport, MARCH_FINANCE, StaffMember, StudentAccount,
    managed_courses,
};
use catalog::{Course, format_rubles};
use leptos::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::card::{Card, CardContent, CardHeader, CardTitle};
use crate::components::icon::IconName;
use crate::components::stat_tile::StatTile;
use crate::state::ui::AdminTab;

#[cfg(test)]
#[path = "admin_panel_test.rs"]
mod admin_panel_test;

/// Color class for a student's remaining prepaid lessons.
#[must_use]
pub fn balance_class(balance: u32) -> &'static str {
    if balance == 0 { "text-danger" } else { "text-success" }
}

/// Caption for a teacher's per-student rate, e.g. `"350 ₽/ученик"`.
#[must_use]
pub fn rate_caption(rate: u32) -> String {
    format!("{rate} ₽/ученик")
}

#[component]
pub fn AdminPanel() -> impl IntoView {
    let tab = RwSignal::new(AdminTab::default());

    let tabs = AdminTab::ALL
        .into_iter()
        .map(|t| {
            view! {
                <button
                    type="button"
                    role="tab"
                    class="tabs__trigger"
                    class:tabs__trigger--active=move || tab.get() == t
                    aria-selected=move || if tab.get() == t { "true" } else { "false" }
                    on:click=move |_| tab.set(t)
                >
                    {t.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    let content = move || match tab.get() {
        AdminTab::Courses => view! { <CoursesTab/> }.into_any(),
        AdminTab::Students => view! { <StudentsTab/> }.into_any(),
        AdminTab::Teachers => view! { <TeachersTab/> }.into_any(),
        AdminTab::Finance => view! { <FinanceTab report=MARCH_FINANCE/> }.into_any(),
    };

    view! {
        <div class="container dashboard fade-in">
            <h2 class="dashboard__title">"Панель администратора"</h2>

            <div class="grid grid--4 dashboard__cards">
                {ADMIN_STATS.iter().map(|stat| view! { <StatTile stat=*stat compact=true/> }).collect::<Vec<_>>()}
            </div>

            <div class="tabs">
                <div class="tabs__list" role="tablist">{tabs}</div>
                <div class="tabs__content" role="tabpanel">{content}</div>
            </div>
        </div>
    }
}

/// Card header with a title on the left and an inert add button on the right.
#[component]
fn ManagedListHeader(title: &'static str, action: &'static str, icon: IconName) -> impl IntoView {
    view! {
        <CardHeader>
            <div class="card__header-row">
                <CardTitle>{title}</CardTitle>
                <Button icon=icon>{action}</Button>
            </div>
        </CardHeader>
    }
}

#[component]
fn CoursesTab() -> impl IntoView {
    view! {
        <Card>
            <ManagedListHeader title="Управление курсами" action="Добавить курс" icon=IconName::Plus/>
            <CardContent>
                <div class="row-list">
                    {managed_courses().iter().map(|course| view! { <ManagedCourseItem course=course/> }).collect::<Vec<_>>()}
                </div>
            </CardContent>
        </Card>
    }
}

#[component]
fn ManagedCourseItem(course: &'static Course) -> impl IntoView {
    view! {
        <div class="row">
            <div>
                <p class="row__title">{course.title}</p>
                <p class="row__meta muted">{format!("{} • {}", course.teacher, course.schedule)}</p>
            </div>
            <div class="row__actions">
                <Button size=ButtonSize::Small variant=ButtonVariant::Outline icon=IconName::Edit label="Редактировать"/>
                <Button size=ButtonSize::Small variant=ButtonVariant::Outline icon=IconName::Trash label="Удалить"/>
            </div>
        </div>
    }
}

#[component]
fn StudentsTab() -> impl IntoView {
    view! {
        <Card>
            <ManagedListHeader title="Список учеников" action="Добавить ученика" icon=IconName::UserPlus/>
            <CardContent>
                <div class="row-list">
                    {ADMIN_STUDENTS.iter().map(|student| view! { <StudentAccountItem student=*student/> }).collect::<Vec<_>>()}
                </div>
            </CardContent>
        </Card>
    }
}

#[component]
fn StudentAccountItem(student: StudentAccount) -> impl IntoView {
    view! {
        <div class="row">
            <div>
                <p class="row__title">{student.name}</p>
                <p class="row__meta muted">{format!("{} • {}", student.parent, student.phone)}</p>
            </div>
            <div class="row__aside">
                <div class="figure">
                    <p class="row__meta muted">"Курсов"</p>
                    <p class="row__title">{student.courses}</p>
                </div>
                <div class="figure">
                    <p class="row__meta muted">"Баланс"</p>
                    <p class=format!("row__title {}", balance_class(student.balance))>
                        {format!("{} занятий", student.balance)}
                    </p>
                </div>
                <Button size=ButtonSize::Small variant=ButtonVariant::Outline>
                    "Профиль"
                </Button>
            </div>
        </div>
    }
}

#[component]
fn TeachersTab() -> impl IntoView {
    view! {
        <Card>
            <ManagedListHeader title="Педагоги" action="Добавить педагога" icon=IconName::UserPlus/>
            <CardContent>
                <div class="row-list">
                    {ADMIN_TEACHERS.iter().map(|member| view! { <StaffItem member=*member/> }).collect::<Vec<_>>()}
                </div>
            </CardContent>
        </Card>
    }
}

#[component]
fn StaffItem(member: StaffMember) -> impl IntoView {
    view! {
        <div class="row row--stacked">
            <div class="row__head">
                <div>
                    <p class="row__title">{member.name}</p>
                    <p class="row__meta muted">{member.courses.join(", ")}</p>
                </div>
                <Button size=ButtonSize::Small variant=ButtonVariant::Outline icon=IconName::Settings label="Настройки"/>
            </div>
            <div class="row__facts">
                <div>
                    <span class="muted">"Тариф: "</span>
                    <span class="row__title">{rate_caption(member.rate)}</span>
                </div>
                <div>
                    <span class="muted">"Зарплата (март): "</span>
                    <span class="row__title text-success">{format_rubles(member.salary)}</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn FinanceTab(report: FinanceReport) -> impl IntoView {
    let income = report
        .income
        .iter()
        .map(|row| {
            view! {
                <div class="ledger__row">
                    <div>
                        <p class="row__title">{row.course}</p>
                        <p class="row__meta muted">{format!("{} учеников", row.students)}</p>
                    </div>
                    <p class="ledger__amount text-success">{format_rubles(row.amount)}</p>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let expenses = report
        .expenses
        .iter()
        .map(|row| {
            view! {
                <div class="ledger__row">
                    <p class="row__title">{row.item}</p>
                    <p class="ledger__amount text-danger">{format_rubles(row.amount)}</p>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="grid grid--2">
            <Card>
                <CardHeader>
                    <CardTitle>{format!("Доходы ({})", report.period)}</CardTitle>
                </CardHeader>
                <CardContent>
                    <div class="ledger">
                        {income}
                        <div class="ledger__totals">
                            <div class="ledger__row">
                                <p class="ledger__label">"Итого:"</p>
                                <p class="ledger__total text-success">{format_rubles(report.income_total)}</p>
                            </div>
                        </div>
                    </div>
                </CardContent>
            </Card>

            <Card>
                <CardHeader>
                    <CardTitle>{format!("Расходы ({})", report.period)}</CardTitle>
                </CardHeader>
                <CardContent>
                    <div class="ledger">
                        {expenses}
                        <div class="ledger__totals">
                            <div class="ledger__row">
                                <p class="ledger__label">"Итого расходы:"</p>
                                <p class="ledger__total text-danger">{format_rubles(report.expense_total)}</p>
                            </div>
                            <div class="ledger__row">
                                <p class="ledger__label">"Прибыль:"</p>
                                <p class="ledger__total text-success">{format_rubles(report.profit)}</p>
                            </div>
                        </div>
                    </div>
                </CardContent>
            </Card>
        </div>
    }
}
