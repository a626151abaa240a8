use i18nrs::yew::use_translation;
use shared::confirmation::ConfirmationGate;
use yew::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;

#[derive(Properties, PartialEq)]
pub struct UserConfirmationDialogsProps {
    pub gate: ConfirmationGate,
    #[prop_or_default]
    pub busy: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// The delete and ban/unban confirmations. At most one is open, as dictated
/// by `gate`.
#[function_component(UserConfirmationDialogs)]
pub fn user_confirmation_dialogs(props: &UserConfirmationDialogsProps) -> Html {
    let (i18n, ..) = use_translation();
    let text = |key: &str, email: &str| i18n.t(&format!("users.dialogs.{key}")).replace("{email}", email);

    let delete_dialog = props.gate.user_to_delete().map_or_else(Html::default, |target| {
        html! {
            <ConfirmDialog
                open={true}
                title={text("delete_title", &target.email)}
                message={text("delete_message", &target.email)}
                detail={Some(AttrValue::from(text("delete_detail", &target.email)))}
                confirm_label={text("delete", &target.email)}
                confirm_class="btn-error"
                busy={props.busy}
                on_confirm={props.on_confirm.clone()}
                on_cancel={props.on_cancel.clone()}
            />
        }
    });

    let ban_dialog = props.gate.user_to_ban().map_or_else(Html::default, |target| {
        let action = target.action();
        let class = if target.is_banned { "btn-success" } else { "btn-warning" };
        html! {
            <ConfirmDialog
                open={true}
                title={text(&format!("{action}_title"), &target.email)}
                message={text(&format!("{action}_message"), &target.email)}
                detail={Some(AttrValue::from(text(&format!("{action}_detail"), &target.email)))}
                confirm_label={text(action, &target.email)}
                confirm_class={class}
                busy={props.busy}
                on_confirm={props.on_confirm.clone()}
                on_cancel={props.on_cancel.clone()}
            />
        }
    });

    html! {
        <>
            { delete_dialog }
            { ban_dialog }
        </>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use shared::confirmation::BanTarget;
    use uuid::Uuid;
    use crate::language::render_translated;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    async fn render(gate: ConfirmationGate) -> String {
        render_translated(html! {
            <UserConfirmationDialogs
                {gate}
                on_confirm={Callback::noop()}
                on_cancel={Callback::noop()}
            />
        })
        .await
    }

    #[wasm_bindgen_test]
    async fn idle_gate_renders_no_dialog() {
        assert!(!render(ConfirmationGate::Idle).await.contains("modal-open"));
    }

    #[wasm_bindgen_test]
    async fn delete_gate_renders_only_the_delete_dialog() {
        let mut gate = ConfirmationGate::default();
        gate.request_delete(Uuid::from_u128(1), "rider@example.com");
        let rendered = render(gate).await;
        assert_eq!(rendered.matches("modal-open").count(), 1);
        assert!(rendered.contains("Delete user"));
        assert!(rendered.contains("rider@example.com"));
    }

    #[wasm_bindgen_test]
    async fn banned_user_gets_an_unban_dialog() {
        let mut gate = ConfirmationGate::default();
        gate.request_ban(BanTarget {
            id: Uuid::from_u128(2),
            email: "rider@example.com".to_string(),
            is_banned: true,
        });
        let rendered = render(gate).await;
        assert_eq!(rendered.matches("modal-open").count(), 1);
        assert!(rendered.contains("Unban user"));
        assert!(!rendered.contains("Delete user"));
    }
}
