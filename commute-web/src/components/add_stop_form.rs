use shared::map_link::parse_map_link;
use shared::models::{Hub, NewStop, parse_cost};
use uuid::Uuid;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AddStopFormProps {
    pub hubs: Vec<Hub>,
    #[prop_or_default]
    pub busy: bool,
    pub on_submit: Callback<NewStop>,
}

/// Validated form contents, or the first problem found.
fn build_stop(
    hub_id: Option<Uuid>,
    name: &str,
    cost: &str,
    map_link: &str,
) -> Result<NewStop, String> {
    let hub_id = hub_id.ok_or_else(|| "Choose a hub".to_string())?;
    let name = name.trim();
    if name.is_empty() {
        return Err("Stop name is required".to_string());
    }
    let at = parse_map_link(map_link).map_err(|err| err.to_string())?;
    let cost = parse_cost(cost).map_err(|err| err.to_string())?;
    Ok(NewStop::new(hub_id, name, at, cost))
}

/// Inputs are kept after submitting so a failed save can be retried; the
/// parent re-keys the form to clear it after a successful save.
#[function_component(AddStopForm)]
pub fn add_stop_form(props: &AddStopFormProps) -> Html {
    let hub_id = use_state(|| None::<Uuid>);
    let name = use_state(String::new);
    let cost = use_state(String::new);
    let map_link = use_state(String::new);
    let submitted = use_state(|| false);

    let candidate = build_stop(*hub_id, &name, &cost, &map_link);
    let preview = if map_link.trim().is_empty() {
        None
    } else {
        Some(parse_map_link(&map_link))
    };

    let on_hub_change = {
        let hub_id = hub_id.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                hub_id.set(Uuid::parse_str(&select.value()).ok());
            }
        })
    };

    let text_input = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
            }
        })
    };

    let onsubmit = {
        let candidate = candidate.clone();
        let on_submit = props.on_submit.clone();
        let submitted = submitted.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            submitted.set(true);
            if let Ok(stop) = candidate.clone() {
                on_submit.emit(stop);
            }
        })
    };

    let selected_hub = (*hub_id).map(|id| id.to_string()).unwrap_or_default();

    html! {
        <form class="card bg-base-200 shadow" {onsubmit}>
            <div class="card-body space-y-2">
                <h3 class="card-title">{"Add a stop"}</h3>
                if *submitted {
                    if let Err(message) = &candidate {
                        <div class="alert alert-error"><span>{ message.clone() }</span></div>
                    }
                }
                <select class="select select-bordered" aria-label="Hub" onchange={on_hub_change}>
                    <option value="" selected={selected_hub.is_empty()}>{"Choose a hub"}</option>
                    { for props.hubs.iter().map(|hub| {
                        let value = hub.id.to_string();
                        let selected = value == selected_hub;
                        html! {
                            <option {selected} {value}>{ hub.name.clone() }</option>
                        }
                    }) }
                </select>
                <input
                    class="input input-bordered"
                    placeholder="Stop name"
                    aria-label="Stop name"
                    value={(*name).clone()}
                    oninput={text_input(&name)}
                />
                <input
                    class="input input-bordered"
                    placeholder="Cost, e.g. 2.50 (leave empty if free)"
                    aria-label="Cost"
                    inputmode="decimal"
                    value={(*cost).clone()}
                    oninput={text_input(&cost)}
                />
                <input
                    class="input input-bordered"
                    placeholder="Map link or lat, lng"
                    aria-label="Map link"
                    value={(*map_link).clone()}
                    oninput={text_input(&map_link)}
                />
                {
                    match preview {
                        Some(Ok(at)) => html! {
                            <p class="text-xs font-mono text-success">{ format!("Located at {at}") }</p>
                        },
                        Some(Err(err)) => html! {
                            <p class="text-xs text-error">{ err.to_string() }</p>
                        },
                        None => Html::default(),
                    }
                }
                <div class="card-actions justify-end">
                    <button type="submit" class="btn btn-primary" disabled={props.busy}>
                        { if props.busy { "Saving..." } else { "Add stop" } }
                    </button>
                </div>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_form_builds_a_stop() {
        let hub = Uuid::from_u128(9);
        let stop = build_stop(Some(hub), " Market ", "2.5", "6.45,3.39").unwrap();
        assert_eq!(stop.hub_id, hub);
        assert_eq!(stop.name, "Market");
        assert_eq!(stop.cost, Some(250));
        assert!((stop.latitude - 6.45).abs() < 1e-9);
    }

    #[test]
    fn missing_fields_are_reported_in_order() {
        assert_eq!(
            build_stop(None, "Market", "", "6.45,3.39").unwrap_err(),
            "Choose a hub"
        );
        assert_eq!(
            build_stop(Some(Uuid::nil()), "  ", "", "6.45,3.39").unwrap_err(),
            "Stop name is required"
        );
        assert!(build_stop(Some(Uuid::nil()), "Market", "", "nowhere").is_err());
        assert!(build_stop(Some(Uuid::nil()), "Market", "-1", "6.45,3.39").is_err());
    }

    #[test]
    fn free_stop_has_no_cost() {
        let stop = build_stop(Some(Uuid::nil()), "Gate", "", "1,1").unwrap();
        assert_eq!(stop.cost, None);
    }
}
