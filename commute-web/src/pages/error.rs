use crate::routes::MainRoute;
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct ErrorPageProps {
    /// Shown instead of the generic not-found text.
    #[prop_or_default]
    pub message: Option<String>,
}

#[function_component(ErrorPage)]
pub fn error_page(props: &ErrorPageProps) -> Html {
    let (i18n, _) = use_translation();
    let message = props
        .message
        .clone()
        .unwrap_or_else(|| i18n.t("error.not_found"));

    html! {
        <div class="p-4 space-y-6 text-center">
            <h1 class="text-2xl font-bold">{ i18n.t("error.title") }</h1>
            <p>{ message }</p>
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-outline">
                { i18n.t("error.home") }
            </Link<MainRoute>>
        </div>
    }
}
