mod api;
mod app;
mod components;
mod config;
mod containers;
mod language;
mod logging;
mod models;
mod pages;
mod routes;
mod session;

#[cfg(test)]
mod api_test;

use app::App;
use i18nrs::yew::I18nProvider;
use language::provider_config;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(InternationalApp)]
fn international_app() -> Html {
    let config = provider_config();

    html! {
        <YewduxRoot>
            <I18nProvider ..config>
                <App />
            </I18nProvider>
        </YewduxRoot>
    }
}

fn main() {
    logging::install_panic_hook();
    logging::init();
    log::info!("starting Commute web client");

    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        log::error!("no document body to mount into");
        return;
    };

    Renderer::<InternationalApp>::with_root(body.into()).render();
}
