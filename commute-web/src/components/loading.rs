use yew::{AttrValue, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or(AttrValue::Static("Loading"))]
    pub label: AttrValue,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex items-center justify-center p-8 gap-3 text-base-content/70" role="status">
            <span class="loading loading-spinner loading-md"></span>
            <span>{ props.label.clone() }</span>
        </div>
    }
}
