//! Public landing panel: hero, feature cards, and the filtered catalog.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only panel that reads the filter selections. The course grid is
//! recomputed from `ViewState` on every selection change.

use leptos::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::card::{Card, CardDescription, CardHeader, CardTitle};
use crate::components::catalog_filters::CatalogFilters;
use crate::components::course_card::{CourseCard, animation_delay};
use crate::components::icon::IconName;
use crate::state::view::ViewState;

/// Selling points shown under the hero: emoji, title, text.
const FEATURES: [(&str, &str, &str); 3] = [
    (
        "👨‍🏫",
        "Опытные педагоги",
        "Все преподаватели с высшим образованием и опытом работы более 5 лет",
    ),
    (
        "🏆",
        "Индивидуальный подход",
        "Малые группы до 12 человек позволяют уделить внимание каждому ребенку",
    ),
    (
        "📱",
        "Удобная система",
        "Отслеживайте посещаемость, успехи и баланс в личном кабинете",
    ),
];

#[component]
pub fn GuestPanel(view: RwSignal<ViewState>) -> impl IntoView {
    let features = FEATURES
        .into_iter()
        .enumerate()
        .map(|(index, (emoji, title, text))| {
            view! {
                <Card centered=true interactive=true delay=animation_delay(index)>
                    <CardHeader>
                        <div class="feature__emoji" aria-hidden="true">{emoji}</div>
                        <CardTitle>{title}</CardTitle>
                        <CardDescription>{text}</CardDescription>
                    </CardHeader>
                </Card>
            }
        })
        .collect::<Vec<_>>();

    let courses = move || {
        let visible = view.get().visible_courses();
        if visible.is_empty() {
            return view! { <p class="catalog__empty muted">"Нет курсов по выбранным параметрам"</p> }
                .into_any();
        }
        visible
            .into_iter()
            .enumerate()
            .map(|(index, course)| view! { <CourseCard course=course index=index/> })
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        <section class="container hero fade-in">
            <h2 class="hero__title gradient-text">"Развиваем таланты вашего ребенка!"</h2>
            <p class="hero__lead muted">
                "Более 15 курсов для детей от 5 до 12 лет. Опытные педагоги, современное оборудование и индивидуальный подход к каждому ученику."
            </p>
            <div class="hero__actions">
                <Button size=ButtonSize::Large icon=IconName::BookOpen>
                    "Выбрать курс"
                </Button>
                <Button size=ButtonSize::Large variant=ButtonVariant::Outline icon=IconName::Phone>
                    "Связаться с нами"
                </Button>
            </div>
        </section>

        <section class="container catalog">
            <div class="grid grid--3 features">{features}</div>

            <h3 class="catalog__title">"Каталог курсов"</h3>
            <CatalogFilters view=view/>

            <div class="grid grid--3 catalog__grid">{courses}</div>
        </section>
    }
}
