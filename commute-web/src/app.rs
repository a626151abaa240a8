use crate::routes::{MainRoute, switch_main};
use yew::suspense::Suspense;
use yew::{Html, function_component, html};
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <Suspense fallback={ html!{ <crate::components::loading::Loading/> } }>
            <BrowserRouter>
                <Switch<MainRoute> render={switch_main} />
            </BrowserRouter>
        </Suspense>
    }
}
