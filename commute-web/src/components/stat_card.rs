use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: AttrValue,
    /// `None` while the figure is still loading.
    pub value: Option<u64>,
    pub icon: IconId,
    #[prop_or(AttrValue::Static("text-primary"))]
    pub accent: AttrValue,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="stat">
            <div class={classes!("stat-figure", props.accent.to_string())}>
                <Icon icon_id={props.icon} class="w-8 h-8" />
            </div>
            <div class="stat-title">{ props.title.clone() }</div>
            <div class={classes!("stat-value", props.accent.to_string())}>
                {
                    match props.value {
                        Some(value) => html! { { value } },
                        None => html! { <span class="loading loading-dots loading-sm"></span> },
                    }
                }
            </div>
        </div>
    }
}
