use i18nrs::yew::use_translation;
use shared::pagination::PaginationState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UserPaginationProps {
    pub current_page: u32,
    pub total_pages: u32,
    #[prop_or_default]
    pub is_loading: bool,
    /// Receives the page to show; never emitted for a no-op move.
    pub on_page_change: Callback<u32>,
}

/// Previous/next buttons around a window of at most five page numbers.
///
/// Renders nothing for a single page of results.
#[function_component(UserPagination)]
pub fn user_pagination(props: &UserPaginationProps) -> Html {
    let (i18n, ..) = use_translation();
    let state = PaginationState::new(props.current_page, props.total_pages);
    if !state.is_visible() {
        return html! {};
    }
    let is_loading = props.is_loading;

    let go = {
        let on_page_change = props.on_page_change.clone();
        move |next: PaginationState| {
            let on_page_change = on_page_change.clone();
            Callback::from(move |_: MouseEvent| {
                if next != state {
                    on_page_change.emit(next.current_page());
                }
            })
        }
    };

    html! {
        <nav class="flex justify-center" aria-label={i18n.t("users.pagination.label")}>
            <div class="join">
                <button
                    type="button"
                    class="join-item btn btn-sm"
                    aria-label={i18n.t("users.pagination.previous")}
                    disabled={is_loading || !state.has_previous()}
                    onclick={go(state.previous(is_loading))}
                >
                    {"«"}
                </button>
                { for state.window().into_iter().map(|page| {
                    let is_current = page == state.current_page();
                    html! {
                        <button
                            type="button"
                            key={page.to_string()}
                            class={classes!("join-item", "btn", "btn-sm", is_current.then_some("btn-active"))}
                            aria-current={is_current.then_some("page")}
                            disabled={is_loading}
                            onclick={go(state.jump(page, is_loading))}
                        >
                            { page }
                        </button>
                    }
                }) }
                <button
                    type="button"
                    class="join-item btn btn-sm"
                    aria-label={i18n.t("users.pagination.next")}
                    disabled={is_loading || !state.has_next()}
                    onclick={go(state.next(is_loading))}
                >
                    {"»"}
                </button>
            </div>
        </nav>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::language::render_translated;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    async fn render(current_page: u32, total_pages: u32) -> String {
        render_translated(html! {
            <UserPagination {current_page} {total_pages} on_page_change={Callback::noop()} />
        })
        .await
    }

    #[wasm_bindgen_test]
    async fn single_page_renders_nothing() {
        assert!(!render(1, 1).await.contains("<nav"));
        assert!(!render(1, 0).await.contains("<nav"));
    }

    #[wasm_bindgen_test]
    async fn window_is_capped_at_five_pages() {
        let rendered = render(6, 20).await;
        assert!(rendered.contains("<nav"));
        // Two arrow buttons plus five page numbers.
        assert_eq!(rendered.matches("<button").count(), 7);
        assert!(rendered.contains("aria-current=\"page\""));
        assert!(rendered.contains("Previous page"));
    }
}
