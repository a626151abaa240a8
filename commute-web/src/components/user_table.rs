use i18nrs::I18n;
use i18nrs::yew::use_translation;
use shared::models::{User, UserRole};
use std::collections::HashSet;
use std::str::FromStr;
use uuid::Uuid;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UserTableProps {
    pub users: Vec<User>,
    /// Users with a mutation outstanding; their controls are disabled.
    #[prop_or_default]
    pub pending: HashSet<Uuid>,
    /// The signed-in administrator, who cannot demote, ban or delete themself.
    #[prop_or_default]
    pub current_user_id: Option<Uuid>,
    #[prop_or_default]
    pub disabled: bool,
    /// Bumped by the parent to rebuild every row from `users`, resetting
    /// controls whose change was not saved.
    #[prop_or_default]
    pub revision: u32,
    pub on_role_change: Callback<(Uuid, UserRole)>,
    pub on_delete: Callback<User>,
    pub on_toggle_ban: Callback<User>,
}

#[function_component(UserTable)]
pub fn user_table(props: &UserTableProps) -> Html {
    let (i18n, ..) = use_translation();
    if props.users.is_empty() {
        return html! {
            <div class="p-6 text-center text-sm text-base-content/70">
                { i18n.t("users.table.empty") }
            </div>
        };
    }

    html! {
        <div class="overflow-x-auto">
            <table class="table table-zebra">
                <thead>
                    <tr>
                        <th>{ i18n.t("users.table.email") }</th>
                        <th>{ i18n.t("users.table.id") }</th>
                        <th>{ i18n.t("users.table.role") }</th>
                        <th>{ i18n.t("users.table.status") }</th>
                        <th class="text-right">{ i18n.t("users.table.actions") }</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.users.iter().map(|user| render_row(props, &i18n, user)) }
                </tbody>
            </table>
        </div>
    }
}

fn render_row(props: &UserTableProps, i18n: &I18n, user: &User) -> Html {
    let is_self = props.current_user_id == Some(user.id);
    let is_pending = props.pending.contains(&user.id);
    let locked = props.disabled || is_pending || is_self;

    let onchange = {
        let on_role_change = props.on_role_change.clone();
        let id = user.id;
        let current = user.role;
        Callback::from(move |event: Event| {
            let Some(select) = event.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            match UserRole::from_str(&select.value()) {
                Ok(role) if role != current => on_role_change.emit((id, role)),
                Ok(_) => {}
                Err(err) => log::warn!("ignoring role selection: {err}"),
            }
        })
    };

    let on_ban = {
        let on_toggle_ban = props.on_toggle_ban.clone();
        let target = user.clone();
        Callback::from(move |_: MouseEvent| on_toggle_ban.emit(target.clone()))
    };

    let on_delete = {
        let on_delete = props.on_delete.clone();
        let target = user.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(target.clone()))
    };

    let status = if user.is_banned {
        html! { <span class="badge badge-error badge-sm">{ i18n.t("users.table.banned") }</span> }
    } else {
        html! { <span class="badge badge-success badge-sm">{ i18n.t("users.table.active") }</span> }
    };
    let ban_label = if user.is_banned {
        i18n.t("users.table.unban")
    } else {
        i18n.t("users.table.ban")
    };

    html! {
        <tr key={format!("{}-{}", user.id, props.revision)} class={classes!(is_pending.then_some("opacity-60"))}>
            <td class="font-medium">
                { user.email.clone() }
                if is_self {
                    <span class="badge badge-ghost badge-sm ml-2">{ i18n.t("users.table.you") }</span>
                }
            </td>
            <td class="font-mono text-xs text-base-content/60">{ user.id.to_string() }</td>
            <td>
                <select
                    class="select select-bordered select-sm"
                    aria-label={i18n.t("users.table.role_for").replace("{email}", &user.email)}
                    disabled={locked}
                    {onchange}
                >
                    { for UserRole::ALL.iter().map(|role| html! {
                        <option value={role.as_str()} selected={*role == user.role}>
                            { i18n.t(&format!("users.roles.{}", role.as_str())) }
                        </option>
                    }) }
                </select>
            </td>
            <td>{ status }</td>
            <td class="text-right space-x-2">
                <button
                    type="button"
                    class={classes!("btn", "btn-sm", if user.is_banned { "btn-success" } else { "btn-warning" })}
                    disabled={locked}
                    onclick={on_ban}
                >
                    { ban_label }
                </button>
                <button
                    type="button"
                    class="btn btn-sm btn-error"
                    disabled={locked}
                    onclick={on_delete}
                >
                    { i18n.t("users.table.delete") }
                </button>
            </td>
        </tr>
    }
}
