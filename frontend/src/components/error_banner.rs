use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    pub on_dismiss: Callback<()>,
}

/// Single banner surfacing the most recent failed action. Replaced (not
/// stacked) by the next failure and cleared when any new action starts.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let on_dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| {
            on_dismiss.emit(());
        })
    };

    html! {
        <div class="error-banner">
            <span class="error-banner-message">{&props.message}</span>
            <button class="error-banner-dismiss" onclick={on_dismiss} title="Dismiss">
                {"×"}
            </button>
        </div>
    }
}
