use crate::config::FrontendConfig;
use i18nrs::yew::use_translation;
use yew::prelude::*;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    let (i18n, _) = use_translation();
    let config = FrontendConfig::new();
    let mailto = format!("mailto:{}", config.support_email());

    html! {
        <article class="prose max-w-3xl mx-auto p-4">
            <h1>{ i18n.t("about.title") }</h1>
            <p>{ i18n.t("about.mission") }</p>
            <h2>{ i18n.t("about.contact_title") }</h2>
            <p>{ i18n.t("about.contact_description") }</p>
            <a class="link link-primary" href={mailto}>{ config.support_email().to_string() }</a>
        </article>
    }
}
