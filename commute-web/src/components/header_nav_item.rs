use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::routes::{AdminRoute, AppRoute, MainRoute};

#[derive(Properties, PartialEq)]
pub struct HeaderNavItemProps {
    pub route: AppRoute,
    #[prop_or_default]
    pub active: bool,
}

/// A header link whose label and Font Awesome icon come from the route's
/// `nav.*` translation entry.
#[function_component(HeaderNavItem)]
pub fn header_nav_item(props: &HeaderNavItemProps) -> Html {
    let (i18n, ..) = use_translation();
    let key = props.route.nav_key();
    let icon = i18n.t(&format!("{key}.icon"));
    let classes = classes!("btn", "btn-ghost", "gap-2", props.active.then_some("btn-soft"));
    let body = html! {
        <>
            <i class={classes!("fa-solid", "fa-fw", format!("fa-{icon}"))}></i>
            { i18n.t(&format!("{key}.title")) }
        </>
    };

    let link = match &props.route {
        AppRoute::Main(route) => html! {
            <Link<MainRoute> to={route.clone()} {classes}>{ body }</Link<MainRoute>>
        },
        AppRoute::Admin(route) => html! {
            <Link<AdminRoute> to={route.clone()} {classes}>{ body }</Link<AdminRoute>>
        },
    };

    html! {
        <li aria-current={props.active.then_some("page")}>{ link }</li>
    }
}
