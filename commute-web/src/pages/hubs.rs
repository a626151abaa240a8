use crate::api::{ApiError, BackendClient};
use crate::components::loading::Loading;
use crate::components::{AddStopForm, HubCard};
use crate::models::app_state::AppState;
use i18nrs::yew::use_translation;
use shared::models::{Hub, NewStop};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_dispatch;

/// Error banner after a hub reload. A successful reload clears any earlier
/// load failure.
fn load_error(result: &Result<Vec<Hub>, ApiError>, load_failed: &str) -> Option<String> {
    result
        .as_ref()
        .err()
        .map(|err| format!("{load_failed}: {err}"))
}

#[function_component(HubsPage)]
pub fn hubs_page() -> Html {
    let (i18n, _) = use_translation();
    let hubs = use_state(|| None::<Vec<Hub>>);
    let error = use_state(|| None::<String>);
    let notice = use_state(|| None::<String>);
    let saving = use_state(|| false);
    let reload = use_state(|| 0_u32);
    // Re-keys the form so it starts empty after a successful save.
    let form_generation = use_state(|| 0_u32);
    let dispatch = use_dispatch::<AppState>();

    {
        let hubs = hubs.clone();
        let error = error.clone();
        let dispatch = dispatch.clone();
        let load_failed = i18n.t("hubs.load_failed");
        use_effect_with(*reload, move |_| {
            spawn_local(async move {
                let result = BackendClient::shared().list_hubs().await;
                error.set(load_error(&result, &load_failed));
                match result {
                    Ok(loaded) => hubs.set(Some(loaded)),
                    Err(err) if err.is_unauthorized() => dispatch.set(AppState::signed_out()),
                    Err(_) => {}
                }
            });
            || ()
        });
    }

    let on_submit = {
        let saving = saving.clone();
        let error = error.clone();
        let notice = notice.clone();
        let reload = reload.clone();
        let form_generation = form_generation.clone();
        let saved = i18n.t("hubs.saved");
        let save_failed = i18n.t("hubs.save_failed");
        Callback::from(move |stop: NewStop| {
            if *saving {
                return;
            }
            saving.set(true);
            error.set(None);
            notice.set(None);
            let saving = saving.clone();
            let error = error.clone();
            let notice = notice.clone();
            let reload = reload.clone();
            let form_generation = form_generation.clone();
            let dispatch = dispatch.clone();
            let saved = saved.clone();
            let save_failed = save_failed.clone();
            spawn_local(async move {
                match BackendClient::shared().create_stop(&stop).await {
                    Ok(created) => {
                        log::info!("created stop {} ({})", created.name, created.id);
                        notice.set(Some(saved));
                        form_generation.set(form_generation.wrapping_add(1));
                        reload.set(reload.wrapping_add(1));
                    }
                    Err(err) => {
                        if err.is_unauthorized() {
                            dispatch.set(AppState::signed_out());
                        }
                        error.set(Some(format!("{save_failed}: {err}")));
                    }
                }
                saving.set(false);
            });
        })
    };

    let listing = match &*hubs {
        None => html! { <Loading /> },
        Some(list) if list.is_empty() => html! {
            <p class="text-base-content/70">{ i18n.t("hubs.empty") }</p>
        },
        Some(list) => html! {
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-4">
                { for list.iter().map(|hub| html! { <HubCard key={hub.id.to_string()} hub={hub.clone()} /> }) }
            </div>
        },
    };

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ i18n.t("hubs.title") }</h1>
            if let Some(message) = &*error {
                <div class="alert alert-error" role="alert"><span>{ message.clone() }</span></div>
            }
            if let Some(message) = &*notice {
                <div class="alert alert-success" role="status"><span>{ message.clone() }</span></div>
            }
            <AddStopForm
                key={form_generation.to_string()}
                hubs={(*hubs).clone().unwrap_or_default()}
                busy={*saving}
                {on_submit}
            />
            { listing }
        </div>
    }
}
