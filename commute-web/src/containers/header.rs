use crate::{
    components::{header_nav_item::HeaderNavItem, user_dropdown::UserDropdown},
    models::app_state::AppState,
    routes::{AppRoute, MainRoute},
};
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<AppRoute>,
    #[prop_or_default]
    pub header_routes: Option<Vec<AppRoute>>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let (i18n, ..) = use_translation();
    let is_authenticated = use_selector(AppState::is_authenticated);

    let nav_items: Html = props
        .header_routes
        .iter()
        .flatten()
        .map(|route| {
            let active = props.current_route.as_ref() == Some(route);
            html! { <HeaderNavItem route={route.clone()} {active} /> }
        })
        .collect();

    html! {
        <nav class="navbar justify-between bg-base-300">
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-ghost text-lg">
                <i class="fa-solid fa-van-shuttle text-primary"></i>
                {i18n.t("app.title")}
            </Link<MainRoute>>
            <details class="dropdown dropdown-end sm:hidden">
                <summary class="btn btn-soft" aria-label="Menu">
                    <i class="fa-solid fa-bars text-lg"></i>
                </summary>
                <ul class="dropdown-content menu z-[1] bg-base-200 p-4 rounded-box shadow w-56 gap-2">
                    { nav_items.clone() }
                </ul>
            </details>
            <ul class="hidden menu sm:menu-horizontal">
                { nav_items }
            </ul>
            <div class="flex items-center gap-2">
                {
                    if *is_authenticated {
                        html! { <UserDropdown /> }
                    } else {
                        html! {
                            <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary btn-sm">
                                {i18n.t("header.login")}
                            </Link<MainRoute>>
                        }
                    }
                }
            </div>
        </nav>
    }
}
