use shared::models::{Hub, format_cost};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HubCardProps {
    pub hub: Hub,
}

#[function_component(HubCard)]
pub fn hub_card(props: &HubCardProps) -> Html {
    let hub = &props.hub;
    html! {
        <div class="card bg-base-200 shadow">
            <div class="card-body">
                <h3 class="card-title">
                    { hub.name.clone() }
                    if let Some(city) = &hub.city {
                        <span class="badge badge-outline">{ city.clone() }</span>
                    }
                </h3>
                if hub.stops.is_empty() {
                    <p class="text-sm text-base-content/70">{"No stops yet."}</p>
                } else {
                    <ul class="divide-y divide-base-300">
                        { for hub.stops.iter().map(|stop| html! {
                            <li key={stop.id.to_string()} class="py-2 flex justify-between gap-4">
                                <div>
                                    <div class="font-medium">{ stop.name.clone() }</div>
                                    <div class="text-xs font-mono text-base-content/60">
                                        { stop.coordinates().to_string() }
                                    </div>
                                </div>
                                <div class="text-sm">
                                    { stop.cost.map_or_else(|| "Free".to_string(), format_cost) }
                                </div>
                            </li>
                        }) }
                    </ul>
                }
            </div>
        </div>
    }
}
