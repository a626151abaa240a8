use i18nrs::yew::use_translation;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UserSearchBarProps {
    pub value: String,
    pub on_change: Callback<String>,
    /// Falls back to the localized "search by email" hint.
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
}

/// Free-text filter for the user list. Controlled: the parent owns `value`.
#[function_component(UserSearchBar)]
pub fn user_search_bar(props: &UserSearchBarProps) -> Html {
    let (i18n, ..) = use_translation();
    let placeholder = props
        .placeholder
        .clone()
        .unwrap_or_else(|| AttrValue::from(i18n.t("users.search.placeholder")));

    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                on_change.emit(input.value());
            }
        })
    };

    let clear = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(String::new()))
    };

    html! {
        <label class="input input-bordered flex items-center gap-2 w-full max-w-md">
            <i class="fa-solid fa-magnifying-glass text-base-content/50"></i>
            <input
                type="search"
                class="grow"
                aria-label={i18n.t("users.search.label")}
                {placeholder}
                value={props.value.clone()}
                {oninput}
            />
            if !props.value.is_empty() {
                <button
                    type="button"
                    class="btn btn-ghost btn-xs"
                    aria-label={i18n.t("users.search.clear")}
                    onclick={clear}
                >
                    <i class="fa-solid fa-xmark"></i>
                </button>
            }
        </label>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::language::render_translated;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn renders_current_value() {
        let rendered = render_translated(html! {
            <UserSearchBar value="rider@" on_change={Callback::noop()} />
        })
        .await;
        assert!(rendered.contains("rider@"));
        assert!(rendered.contains("Clear search"));
    }

    #[wasm_bindgen_test]
    async fn empty_value_has_no_clear_button() {
        let rendered = render_translated(html! {
            <UserSearchBar value="" on_change={Callback::noop()} />
        })
        .await;
        assert!(rendered.contains("Search by email"));
        assert!(!rendered.contains("Clear search"));
    }
}
