use crate::{
    api::BackendClient,
    models::app_state::AppState,
    routes::{AdminRoute, MainRoute},
};
use i18nrs::yew::use_translation;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

#[function_component(UserDropdown)]
pub fn user_dropdown() -> Html {
    let navigator = use_navigator();
    let (i18n, ..) = use_translation();
    let (state, dispatch) = use_store::<AppState>();
    let Some(session) = state.session.clone() else {
        return html! {};
    };

    let dashboard_button = {
        let navigator = navigator.clone();
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            if let Some(navigator) = &navigator {
                navigator.push(&AdminRoute::Dashboard);
            }
        });
        html! {
            <li><a {onclick}>{i18n.t("header.admin")}</a></li>
        }
    };

    let logout_button = {
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            let navigator = navigator.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                if let Err(err) = BackendClient::shared().sign_out().await
                    && !err.is_unauthorized()
                {
                    log::error!("sign out failed: {err}");
                }
                dispatch.set(AppState::signed_out());
                if let Some(navigator) = navigator {
                    navigator.push(&MainRoute::Login);
                }
            });
        });
        html! {
            <li><a {onclick}>{i18n.t("header.logout")}</a></li>
        }
    };

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle mb-1">
                <i class="fa-solid fa-user text-lg"></i>
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                <li class="px-2 py-1 text-left">
                    <div class="text-sm font-semibold text-base-content">{ session.user.email.clone() }</div>
                    <div class="text-xs text-base-content/70">{ i18n.t(&format!("users.roles.{}", session.user.role.as_str())) }</div>
                </li>
                <div class="divider my-0"></div>
                {dashboard_button}
                <div class="divider my-0"></div>
                {logout_button}
            </ul>
        </div>
    }
}
