//! Static sections of the public marketing pages.

use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

use crate::routes::MainRoute;

#[function_component(Hero)]
pub fn hero() -> Html {
    let (i18n, ..) = use_translation();
    html! {
        <section class="hero min-h-[60vh] bg-base-200 rounded-box">
            <div class="hero-content text-center">
                <div class="max-w-2xl">
                    <h1 class="text-5xl font-bold">{ i18n.t("home.hero.title") }</h1>
                    <p class="py-6 text-lg">{ i18n.t("home.hero.subtitle") }</p>
                    <div class="flex flex-wrap justify-center gap-3">
                        <Link<MainRoute> to={MainRoute::About} classes="btn btn-primary">
                            { i18n.t("home.hero.primary") }
                        </Link<MainRoute>>
                        <Link<MainRoute> to={MainRoute::Login} classes="btn btn-outline">
                            { i18n.t("home.hero.secondary") }
                        </Link<MainRoute>>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub icon: IconId,
    pub title: String,
    pub description: String,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div class="card bg-base-200 shadow-xl">
            <div class="card-body">
                <h3 class="card-title">
                    <Icon icon_id={props.icon} class="w-6 h-6 text-primary" />
                    { props.title.clone() }
                </h3>
                <p>{ props.description.clone() }</p>
            </div>
        </div>
    }
}

#[function_component(FeatureGrid)]
pub fn feature_grid() -> Html {
    let (i18n, ..) = use_translation();
    let features = [
        (IconId::HeroiconsOutlineMapPin, "hubs"),
        (IconId::HeroiconsOutlineUserGroup, "journeys"),
        (IconId::HeroiconsOutlineBanknotes, "fares"),
    ];
    html! {
        <section class="space-y-6">
            <h2 class="text-3xl font-bold text-center">{ i18n.t("home.features.title") }</h2>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                { for features.into_iter().map(|(icon, key)| html! {
                    <FeatureCard
                        {icon}
                        title={i18n.t(&format!("home.features.{key}.title"))}
                        description={i18n.t(&format!("home.features.{key}.description"))}
                    />
                }) }
            </div>
        </section>
    }
}

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    let (i18n, ..) = use_translation();
    html! {
        <section class="space-y-6">
            <h2 class="text-3xl font-bold text-center">{ i18n.t("home.steps.title") }</h2>
            <ul class="steps steps-vertical lg:steps-horizontal w-full">
                { for ["pick", "join", "ride"].into_iter().map(|step| html! {
                    <li class="step step-primary">{ i18n.t(&format!("home.steps.{step}")) }</li>
                }) }
            </ul>
        </section>
    }
}

#[function_component(CallToAction)]
pub fn call_to_action() -> Html {
    let (i18n, ..) = use_translation();
    html! {
        <section class="card bg-primary text-primary-content">
            <div class="card-body items-center text-center">
                <h2 class="card-title text-2xl">{ i18n.t("home.cta.title") }</h2>
                <p>{ i18n.t("home.cta.description") }</p>
                <div class="card-actions">
                    <Link<MainRoute> to={MainRoute::AdminRoot} classes="btn">
                        { i18n.t("home.cta.action") }
                    </Link<MainRoute>>
                </div>
            </div>
        </section>
    }
}
