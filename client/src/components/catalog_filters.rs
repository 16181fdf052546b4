//! Age and weekday selectors above the course grid.

use catalog::filter::{ALL, selection_value};
use catalog::{AgeGroup, ParseError, Weekday};
use leptos::prelude::*;

use crate::state::view::ViewState;

#[component]
pub fn CatalogFilters(view: RwSignal<ViewState>) -> impl IntoView {
    let age_value = move || selection_value(view.get().filter.age.map(AgeGroup::token));
    let weekday_value = move || selection_value(view.get().filter.weekday.map(Weekday::token));

    let age_options = AgeGroup::ALL
        .into_iter()
        .map(|group| {
            view! {
                <option value=group.token() selected=move || view.get().filter.age == Some(group)>
                    {group.label()}
                </option>
            }
        })
        .collect::<Vec<_>>();

    let weekday_options = Weekday::ALL
        .into_iter()
        .map(|day| {
            view! {
                <option value=day.token() selected=move || view.get().filter.weekday == Some(day)>
                    {day.label()}
                </option>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="catalog-filters">
            <select
                class="select"
                aria-label="Возраст"
                prop:value=age_value
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    view.update(|v| {
                        if let Err(err) = v.select_age(&value) {
                            report_rejected(&err);
                        }
                    });
                }
            >
                <option value=ALL>"Все возрасты"</option>
                {age_options}
            </select>

            <select
                class="select"
                aria-label="День недели"
                prop:value=weekday_value
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    view.update(|v| {
                        if let Err(err) = v.select_weekday(&value) {
                            report_rejected(&err);
                        }
                    });
                }
            >
                <option value=ALL>"Все дни"</option>
                {weekday_options}
            </select>
        </div>
    }
}

fn report_rejected(err: &ParseError) {
    #[cfg(feature = "hydrate")]
    log::warn!("ignoring filter value: {err}");
    #[cfg(not(feature = "hydrate"))]
    let _ = err;
}
