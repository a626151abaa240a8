use crate::{
    api::{ApiError, BackendClient},
    models::app_state::AppState,
    routes::MainRoute,
};
use i18nrs::yew::use_translation;
use reqwest::StatusCode;
use shared::models::SignInRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_dispatch;

/// Message shown for a failed sign in. Credential errors use the localized text.
fn sign_in_error(err: &ApiError, invalid_credentials: String) -> String {
    match err {
        ApiError::Unauthorized => invalid_credentials,
        ApiError::Backend { status, .. } if *status == StatusCode::BAD_REQUEST => {
            invalid_credentials
        }
        other => other.to_string(),
    }
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let (i18n, ..) = use_translation();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let dispatch = use_dispatch::<AppState>();

    let onsubmit = {
        let email_handle = email.clone();
        let password_handle = password.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let invalid_credentials = i18n.t("login.invalid");
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *loading_handle {
                return;
            }
            let request = SignInRequest {
                email: email_handle.trim().to_string(),
                password: (*password_handle).clone(),
            };
            loading_handle.set(true);
            error_handle.set(None);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let navigator_handle = navigator.clone();
            let dispatch = dispatch.clone();
            let invalid_credentials = invalid_credentials.clone();
            spawn_local(async move {
                match BackendClient::shared().sign_in(&request).await {
                    Ok(session) => {
                        dispatch.set(AppState::signed_in(session));
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&MainRoute::AdminRoot);
                        }
                    }
                    Err(err) => {
                        log::warn!("sign in failed: {err}");
                        error_ref.set(Some(sign_in_error(&err, invalid_credentials)));
                    }
                }
                loading_ref.set(false);
            });
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let is_busy = *loading;
    let disable_submit = email.trim().is_empty() || password.is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-[70vh]">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" {onsubmit}>
                    <h2 class="card-title text-2xl">{ i18n.t("login.title") }</h2>
                    if let Some(message) = &*error {
                        <div class="alert alert-error" role="alert">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{ i18n.t("login.email") }</span>
                        </label>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="email"
                            autocomplete="username"
                            required=true
                            value={(*email).clone()}
                            oninput={on_email_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{ i18n.t("login.password") }</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            autocomplete="current-password"
                            required=true
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            { if is_busy { i18n.t("login.submitting") } else { i18n.t("login.submit") } }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
