use shared::Holiday;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::add_holiday_modal::AddHolidayModal;
use crate::components::error_banner::ErrorBanner;
use crate::hooks::use_holidays::use_holidays;
use crate::hooks::use_month_navigation::use_month_navigation;
use crate::services::api::ApiClient;
use crate::services::date_utils::{get_current_date, month_cells, month_name, DayCell};
use crate::services::logging::Logger;

const COMPONENT: &str = "calendar_view";

/// Month-view holiday calendar: pages between months, shows the fetched
/// holiday collection on its days, adds via a modal, removes inline.
#[function_component(CalendarView)]
pub fn calendar_view() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let holidays = use_holidays(&api_client);
    let nav = use_month_navigation();

    let hovered_date = use_state(|| Option::<String>::None);
    let show_modal = use_state(|| false);
    let selected_date = use_state(|| Option::<String>::None);

    // Fetch the collection once on mount
    {
        let refresh = holidays.actions.refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let on_holiday_created = {
        let append = holidays.actions.append.clone();
        let show_modal = show_modal.clone();
        let selected_date = selected_date.clone();
        Callback::from(move |holiday: Holiday| {
            append.emit(holiday);
            show_modal.set(false);
            selected_date.set(None);
        })
    };

    let on_modal_close = {
        let show_modal = show_modal.clone();
        Callback::from(move |_: ()| {
            show_modal.set(false);
        })
    };

    let anchor = nav.anchor;
    let today = get_current_date();

    // Leading blanks then day cells, from the weekday of day 1
    let mut calendar_days = Vec::new();
    for cell in month_cells(anchor.year, anchor.month) {
        match cell {
            DayCell::Blank => {
                calendar_days.push(html! {
                    <div class="calendar-day empty"></div>
                });
            }
            DayCell::Day { day, date } => {
                let holiday = holidays
                    .state
                    .holidays
                    .iter()
                    .find(|h| h.falls_on(&date))
                    .cloned();
                let is_hovered = hovered_date.as_deref() == Some(date.as_str());

                let day_class = if date == today {
                    "calendar-day today"
                } else {
                    "calendar-day"
                };

                let onmouseenter = {
                    let hovered_date = hovered_date.clone();
                    let date = date.clone();
                    Callback::from(move |_: MouseEvent| {
                        hovered_date.set(Some(date.clone()));
                    })
                };
                let onmouseleave = {
                    let hovered_date = hovered_date.clone();
                    Callback::from(move |_: MouseEvent| {
                        hovered_date.set(None);
                    })
                };

                let holiday_entry = match &holiday {
                    Some(holiday) => {
                        let on_remove = {
                            let remove = holidays.actions.remove.clone();
                            let id = holiday.id.clone();
                            Callback::from(move |_: MouseEvent| {
                                remove.emit(id.clone());
                            })
                        };
                        html! {
                            <div class="holiday-chip">
                                <span class="holiday-title">{&holiday.title}</span>
                                <button
                                    class="holiday-remove"
                                    onclick={on_remove}
                                    title={format!("Remove {}", holiday.title)}
                                >
                                    {"×"}
                                </button>
                            </div>
                        }
                    }
                    None => html! {},
                };

                // Add affordance only on hovered, holiday-free days
                let add_button = if is_hovered && holiday.is_none() {
                    let on_add = {
                        let show_modal = show_modal.clone();
                        let selected_date = selected_date.clone();
                        let clear_error = holidays.actions.clear_error.clone();
                        let date = date.clone();
                        Callback::from(move |_: MouseEvent| {
                            Logger::debug_with_component(
                                COMPONENT,
                                &format!("Opening add-holiday modal for {}", date),
                            );
                            // Starting the add action retires any banner
                            // left by an earlier failure
                            clear_error.emit(());
                            selected_date.set(Some(date.clone()));
                            show_modal.set(true);
                        })
                    };
                    html! {
                        <button class="add-holiday-button" onclick={on_add}>
                            {"Add Holiday"}
                        </button>
                    }
                } else {
                    html! {}
                };

                calendar_days.push(html! {
                    <div class={day_class} {onmouseenter} {onmouseleave}>
                        <div class="day-number">{day}</div>
                        {holiday_entry}
                        {add_button}
                    </div>
                });
            }
        }
    }

    let grid = if holidays.state.loading {
        html! {
            <div class="calendar-loading">
                {"Loading holidays..."}
            </div>
        }
    } else {
        html! {
            <div class="calendar-grid">
                {for calendar_days}
            </div>
        }
    };

    html! {
        <div class="calendar">
            <div class="calendar-header">
                <h2 class="calendar-heading">
                    {format!("{} {}", month_name(anchor.month), anchor.year)}
                </h2>
                <div class="calendar-nav">
                    <button
                        class="btn btn-secondary"
                        onclick={nav.actions.prev_month.clone()}
                        title="Previous Month"
                    >
                        {"Previous"}
                    </button>
                    <button
                        class="btn btn-secondary"
                        onclick={nav.actions.next_month.clone()}
                        title="Next Month"
                    >
                        {"Next"}
                    </button>
                </div>
            </div>

            {if let Some(error) = holidays.state.error.clone() {
                html! {
                    <ErrorBanner
                        message={error}
                        on_dismiss={holidays.actions.clear_error.clone()}
                    />
                }
            } else {
                html! {}
            }}

            <div class="calendar-weekdays">
                <div class="weekday">{"Sun"}</div>
                <div class="weekday">{"Mon"}</div>
                <div class="weekday">{"Tue"}</div>
                <div class="weekday">{"Wed"}</div>
                <div class="weekday">{"Thu"}</div>
                <div class="weekday">{"Fri"}</div>
                <div class="weekday">{"Sat"}</div>
            </div>
            {grid}

            <AddHolidayModal
                is_open={*show_modal}
                date={(*selected_date).clone()}
                on_created={on_holiday_created}
                on_close={on_modal_close}
            />
        </div>
    }
}
