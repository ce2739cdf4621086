mod components;
mod hooks;
mod services;

use yew::prelude::*;

use components::calendar_view::CalendarView;

#[function_component(App)]
fn app() -> Html {
    html! {
        <div class="container">
            <CalendarView />
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
