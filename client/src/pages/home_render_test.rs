use catalog::{AgeGroup, Weekday};
use leptos::tachys::view::RenderHtml;
use leptos_meta::provide_meta_context;

use super::*;

const GUEST_MARK: &str = "hero__title";
const PARENT_MARK: &str = "Личный кабинет ученика";
const TEACHER_MARK: &str = "Кабинет педагога";
const ADMIN_MARK: &str = "tabs__list";

fn render_panel(state: ViewState) -> String {
    Owner::new().with(|| {
        let view = RwSignal::new(state);
        role_panel(state.role, view).to_html()
    })
}

fn marks(html: &str) -> [bool; 4] {
    [GUEST_MARK, PARENT_MARK, TEACHER_MARK, ADMIN_MARK].map(|mark| html.contains(mark))
}

fn course_cards(html: &str) -> usize {
    html.matches("course-card__emoji").count()
}

// =============================================================
// Role dispatch
// =============================================================

#[test]
fn each_role_renders_only_its_panel() {
    let expected = [
        (Role::Guest, [true, false, false, false]),
        (Role::Parent, [false, true, false, false]),
        (Role::Teacher, [false, false, true, false]),
        (Role::Admin, [false, false, false, true]),
    ];
    for (role, want) in expected {
        let html = render_panel(ViewState { role, ..ViewState::default() });
        assert_eq!(marks(&html), want, "role {role}");
    }
}

#[test]
fn home_page_starts_on_guest_panel() {
    let html = Owner::new().with(|| {
        provide_meta_context();
        view! { <HomePage/> }.to_html()
    });
    assert_eq!(marks(&html), [true, false, false, false]);
    assert!(html.contains(r#"data-role="guest""#));
    assert_eq!(course_cards(&html), 6);
}

#[test]
fn admin_then_guest_leaves_no_admin_markup() {
    let mut state = ViewState { role: Role::Admin, ..ViewState::default() };
    assert!(render_panel(state).contains(ADMIN_MARK));

    state.set_role(Role::Guest);
    let html = render_panel(state);
    assert!(!html.contains(ADMIN_MARK));
    assert!(!html.contains("Панель администратора"));
    assert!(html.contains(GUEST_MARK));
}

// =============================================================
// Admin tabs
// =============================================================

#[test]
fn fresh_admin_panel_opens_on_courses_tab() {
    let admin = ViewState { role: Role::Admin, ..ViewState::default() };
    for _ in 0..2 {
        let html = render_panel(admin);
        assert!(html.contains("Управление курсами"));
        assert!(!html.contains("Список учеников"));
        assert!(!html.contains("Доходы"));
    }
}

// =============================================================
// Guest catalog
// =============================================================

#[test]
fn monday_filter_renders_three_cards() {
    let mut state = ViewState::default();
    state.set_weekday(Some(Weekday::Monday));
    let html = render_panel(state);
    assert_eq!(course_cards(&html), 3);
    assert!(!html.contains("Нет курсов по выбранным параметрам"));
}

#[test]
fn unmatched_filter_renders_empty_state() {
    let mut state = ViewState::default();
    state.set_weekday(Some(Weekday::Monday));
    state.set_age(Some(AgeGroup::NineToTen));
    let html = render_panel(state);
    assert_eq!(course_cards(&html), 0);
    assert!(html.contains("Нет курсов по выбранным параметрам"));
}
