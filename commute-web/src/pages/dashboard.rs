use crate::api::BackendClient;
use crate::components::StatCard;
use crate::models::app_state::AppState;
use crate::routes::AdminRoute;
use i18nrs::yew::use_translation;
use shared::models::DashboardStats;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;
use yewdux::prelude::use_dispatch;

/// Dashboard page component
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let (i18n, _) = use_translation();
    let stats = use_state(|| None::<DashboardStats>);
    let error = use_state(|| None::<String>);
    let dispatch = use_dispatch::<AppState>();

    {
        let stats = stats.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match BackendClient::shared().dashboard_stats().await {
                    Ok(loaded) => stats.set(Some(loaded)),
                    Err(err) => {
                        if err.is_unauthorized() {
                            dispatch.set(AppState::signed_out());
                        }
                        error.set(Some(err.to_string()));
                    }
                }
            });
            || ()
        });
    }

    let figure = |pick: fn(&DashboardStats) -> u64| (*stats).as_ref().map(pick);

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ i18n.t("dashboard.title") }</h1>

            if let Some(message) = &*error {
                <div class="alert alert-error" role="alert">
                    <span>{ message.clone() }</span>
                </div>
            }

            <div class="stats stats-vertical lg:stats-horizontal shadow w-full">
                <StatCard
                    title={i18n.t("dashboard.stats.total_users")}
                    value={figure(|s| s.total_users)}
                    icon={IconId::HeroiconsOutlineUserGroup}
                />
                <StatCard
                    title={i18n.t("dashboard.stats.admin_users")}
                    value={figure(|s| s.admin_users)}
                    icon={IconId::HeroiconsOutlineShieldCheck}
                    accent="text-secondary"
                />
                <StatCard
                    title={i18n.t("dashboard.stats.banned_users")}
                    value={figure(|s| s.banned_users)}
                    icon={IconId::HeroiconsOutlineNoSymbol}
                    accent="text-error"
                />
                <StatCard
                    title={i18n.t("dashboard.stats.hubs")}
                    value={figure(|s| s.hubs)}
                    icon={IconId::HeroiconsOutlineMapPin}
                    accent="text-success"
                />
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineUsers} class="w-6 h-6" />
                            { i18n.t("dashboard.cards.users.title") }
                        </h2>
                        <p>{ i18n.t("dashboard.cards.users.description") }</p>
                        <div class="card-actions justify-end">
                            <Link<AdminRoute> to={AdminRoute::Users} classes="btn btn-primary">
                                { i18n.t("dashboard.cards.users.action") }
                            </Link<AdminRoute>>
                        </div>
                    </div>
                </div>

                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineMap} class="w-6 h-6" />
                            { i18n.t("dashboard.cards.hubs.title") }
                        </h2>
                        <p>{ i18n.t("dashboard.cards.hubs.description") }</p>
                        <div class="card-actions justify-end">
                            <Link<AdminRoute> to={AdminRoute::Hubs} classes="btn btn-secondary">
                                { i18n.t("dashboard.cards.hubs.action") }
                            </Link<AdminRoute>>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
