use shared::{CreateHolidayRequest, Holiday};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::date_utils::format_date_for_display;
use crate::services::logging::Logger;

const COMPONENT: &str = "add_holiday_modal";

#[derive(Properties, PartialEq)]
pub struct AddHolidayModalProps {
    pub is_open: bool,
    /// The "YYYY-MM-DD" day the new holiday is scoped to
    pub date: Option<String>,
    /// Emitted with the server-returned record on successful creation
    pub on_created: Callback<Holiday>,
    pub on_close: Callback<()>,
}

#[function_component(AddHolidayModal)]
pub fn add_holiday_modal(props: &AddHolidayModalProps) -> Html {
    let title = use_state(String::new);
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| Option::<String>::None);
    let api_client = ApiClient::new();

    // Reset state when modal opens
    use_effect_with(props.is_open, {
        let title = title.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        move |is_open| {
            if *is_open {
                title.set(String::new());
                is_submitting.set(false);
                error_message.set(None);
            }
            || ()
        }
    });

    let on_title_change = {
        let title = title.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            title.set(input.value());
        })
    };

    let on_submit = {
        let title = title.clone();
        let date = props.date.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        let on_created = props.on_created.clone();
        let api_client = api_client.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(date) = date.clone() else {
                error_message.set(Some("No date selected".to_string()));
                return;
            };

            let request = CreateHolidayRequest {
                title: (*title).trim().to_string(),
                date,
            };

            // Guard before any network call: an invalid draft never
            // leaves the modal
            if let Err(msg) = request.validate() {
                error_message.set(Some(msg));
                return;
            }

            is_submitting.set(true);
            error_message.set(None);

            let title = title.clone();
            let is_submitting = is_submitting.clone();
            let error_message = error_message.clone();
            let on_created = on_created.clone();
            let api_client = api_client.clone();

            spawn_local(async move {
                match api_client.create_holiday(request).await {
                    Ok(holiday) => {
                        Logger::info_with_component(
                            COMPONENT,
                            &format!("Created holiday {} on {}", holiday.id, holiday.date),
                        );
                        title.set(String::new());
                        is_submitting.set(false);
                        on_created.emit(holiday);
                    }
                    Err(e) => {
                        // Modal stays open so the draft can be retried
                        Logger::error_with_component(
                            COMPONENT,
                            &format!("Failed to create holiday: {}", e),
                        );
                        is_submitting.set(false);
                        error_message.set(Some(format!("Failed to add holiday: {}", e)));
                    }
                }
            });
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    if !props.is_open {
        return html! {};
    }

    let heading = match props.date.as_deref() {
        Some(date) => format!("Add Holiday for {}", format_date_for_display(date)),
        None => "Add Holiday".to_string(),
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <h3 class="modal-title">{heading}</h3>

                {if let Some(error) = (*error_message).clone() {
                    html! {
                        <div class="modal-error">
                            {error}
                        </div>
                    }
                } else {
                    html! {}
                }}

                <form class="modal-form" onsubmit={on_submit}>
                    <input
                        type="text"
                        class="modal-input"
                        placeholder="Holiday Name"
                        value={(*title).clone()}
                        onchange={on_title_change}
                        disabled={*is_submitting}
                        autofocus=true
                    />

                    <div class="modal-buttons">
                        <button
                            type="button"
                            class="btn btn-secondary"
                            onclick={on_cancel}
                            disabled={*is_submitting}
                        >
                            {"Cancel"}
                        </button>
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled={*is_submitting}
                        >
                            {if *is_submitting {
                                "Saving..."
                            } else {
                                "Save"
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
