use i18nrs::yew::use_translation;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub open: bool,
    pub title: AttrValue,
    pub message: AttrValue,
    #[prop_or_default]
    pub detail: Option<AttrValue>,
    pub confirm_label: AttrValue,
    #[prop_or(AttrValue::Static("btn-primary"))]
    pub confirm_class: AttrValue,
    #[prop_or_default]
    pub busy: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Modal asking to confirm a single action. Clicking the backdrop cancels.
#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    let (i18n, ..) = use_translation();
    if !props.open {
        return html! {};
    }

    let confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };
    let cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <div class="modal modal-open" role="dialog" aria-modal="true">
            <div class="modal-box">
                <h3 class="font-bold text-lg">{ props.title.clone() }</h3>
                <p class="py-4">{ props.message.clone() }</p>
                if let Some(detail) = &props.detail {
                    <p class="text-sm text-base-content/60">{ detail.clone() }</p>
                }
                <div class="modal-action">
                    <button type="button" class="btn btn-ghost" disabled={props.busy} onclick={cancel.clone()}>
                        { i18n.t("dialog.cancel") }
                    </button>
                    <button
                        type="button"
                        class={classes!("btn", props.confirm_class.to_string())}
                        disabled={props.busy}
                        onclick={confirm}
                    >
                        { props.confirm_label.clone() }
                    </button>
                </div>
            </div>
            <div class="modal-backdrop" onclick={cancel}></div>
        </div>
    }
}
