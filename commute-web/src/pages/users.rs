use crate::api::BackendClient;
use crate::components::{UserConfirmationDialogs, UserPagination, UserSearchBar, UserTable};
use crate::config::FrontendConfig;
use crate::models::app_state::AppState;
use i18nrs::yew::use_translation;
use shared::confirmation::{BanTarget, ConfirmationGate, ConfirmedAction};
use shared::inflight::InFlight;
use shared::models::{User, UserPage, UserQuery, UserRole};
use shared::pagination::{PaginationState, total_pages};
use std::collections::HashSet;
use std::rc::Rc;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_store;

/// A mutation of a single user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserMutation {
    Role { id: Uuid, role: UserRole },
    Ban { id: Uuid, banned: bool },
    Delete { id: Uuid },
}

impl UserMutation {
    pub fn target(&self) -> Uuid {
        match self {
            Self::Role { id, .. } | Self::Ban { id, .. } | Self::Delete { id } => *id,
        }
    }

    fn success_key(&self) -> &'static str {
        match self {
            Self::Role { .. } => "users.notice.role_changed",
            Self::Ban { banned: true, .. } => "users.notice.banned",
            Self::Ban { banned: false, .. } => "users.notice.unbanned",
            Self::Delete { .. } => "users.notice.deleted",
        }
    }

    fn failure_key(&self) -> &'static str {
        match self {
            Self::Role { .. } => "users.errors.role",
            Self::Ban { .. } => "users.errors.ban",
            Self::Delete { .. } => "users.errors.delete",
        }
    }
}

/// Reserves `mutation`'s target in `inflight`. `None` when a mutation of the
/// same user is already running.
fn claim(mutation: UserMutation, inflight: &mut InFlight<Uuid>) -> Option<UserMutation> {
    inflight.begin(mutation.target()).then_some(mutation)
}

/// The mutation a confirm click on `gate` should start, if any.
///
/// The gate is a render snapshot, so two clicks before the dialog closes see
/// the same open confirmation. `inflight` is what keeps the second one out.
fn claim_confirmed(gate: &ConfirmationGate, inflight: &mut InFlight<Uuid>) -> Option<UserMutation> {
    claim(gate.pending_action()?.into(), inflight)
}

impl From<ConfirmedAction> for UserMutation {
    fn from(action: ConfirmedAction) -> Self {
        match action {
            ConfirmedAction::Delete { id } => Self::Delete { id },
            ConfirmedAction::SetBanned { id, banned } => Self::Ban { id, banned },
        }
    }
}

/// Everything the user list renders from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UsersState {
    pub search: String,
    pub pagination: PaginationState,
    pub users: Vec<User>,
    pub total: u64,
    pub is_loading: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
    pub gate: ConfirmationGate,
    pub pending: HashSet<Uuid>,
    /// Bumped to refetch the current page.
    pub reload: u32,
    /// Bumped when a mutation fails so the table rebuilds its rows and drops
    /// any control value the backend rejected.
    pub revision: u32,
    latest_fetch: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UsersAction {
    Search(String),
    GoToPage(u32),
    FetchStarted(u64),
    FetchSucceeded {
        seq: u64,
        page: UserPage,
        page_size: u32,
    },
    FetchFailed {
        seq: u64,
        message: String,
    },
    RequestDelete(User),
    RequestBan(User),
    CloseConfirmation,
    PendingChanged(HashSet<Uuid>),
    MutationSucceeded(String),
    MutationFailed(String),
    DismissMessages,
}

impl Reducible for UsersState {
    type Action = UsersAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            UsersAction::Search(search) => {
                next.search = search;
                next.pagination = PaginationState::new(1, next.pagination.total_pages());
            }
            UsersAction::GoToPage(page) => {
                next.pagination = next.pagination.jump(page, next.is_loading);
            }
            UsersAction::FetchStarted(seq) => {
                next.latest_fetch = seq;
                next.is_loading = true;
            }
            UsersAction::FetchSucceeded {
                seq,
                page,
                page_size,
            } => {
                if seq != next.latest_fetch {
                    return self;
                }
                next.is_loading = false;
                next.error = None;
                next.pagination = next
                    .pagination
                    .with_total_pages(total_pages(page.total, page_size));
                next.total = page.total;
                next.users = page.users;
            }
            UsersAction::FetchFailed { seq, message } => {
                if seq != next.latest_fetch {
                    return self;
                }
                next.is_loading = false;
                next.error = Some(message);
            }
            UsersAction::RequestDelete(user) => {
                next.gate.request_delete(user.id, user.email);
            }
            UsersAction::RequestBan(user) => {
                next.gate.request_ban(BanTarget {
                    id: user.id,
                    email: user.email,
                    is_banned: user.is_banned,
                });
            }
            UsersAction::CloseConfirmation => next.gate.cancel(),
            UsersAction::PendingChanged(pending) => next.pending = pending,
            UsersAction::MutationSucceeded(message) => {
                next.error = None;
                next.notice = Some(message);
                next.reload = next.reload.wrapping_add(1);
            }
            UsersAction::MutationFailed(message) => {
                next.notice = None;
                next.error = Some(message);
                next.revision = next.revision.wrapping_add(1);
            }
            UsersAction::DismissMessages => {
                next.error = None;
                next.notice = None;
            }
        }
        Rc::new(next)
    }
}

/// Admin user management: search, paging, role changes, bans and deletions.
#[function_component(UsersPage)]
pub fn users_page() -> Html {
    let (i18n, ..) = use_translation();
    let config = use_memo((), |_| FrontendConfig::new());
    let page_size = config.page_size();
    let state = use_reducer(UsersState::default);
    let inflight = use_mut_ref(InFlight::<Uuid>::default);
    let fetch_seq = use_mut_ref(|| 0_u64);
    let (app_state, app_dispatch) = use_store::<AppState>();
    let current_user_id = app_state.session.as_ref().map(|session| session.user.id);

    {
        let dispatcher = state.dispatcher();
        let app_dispatch = app_dispatch.clone();
        let load_failed = i18n.t("users.errors.load");
        use_effect_with(
            (
                state.search.clone(),
                state.pagination.current_page(),
                state.reload,
            ),
            move |(search, page, _)| {
                let seq = {
                    let mut counter = fetch_seq.borrow_mut();
                    *counter += 1;
                    *counter
                };
                dispatcher.dispatch(UsersAction::FetchStarted(seq));
                let query = UserQuery::new(search.clone(), *page, page_size);
                spawn_local(async move {
                    match BackendClient::shared().list_users(&query).await {
                        Ok(page) => dispatcher.dispatch(UsersAction::FetchSucceeded {
                            seq,
                            page,
                            page_size,
                        }),
                        Err(err) => {
                            if err.is_unauthorized() {
                                app_dispatch.set(AppState::signed_out());
                            }
                            dispatcher.dispatch(UsersAction::FetchFailed {
                                seq,
                                message: format!("{load_failed}: {err}"),
                            });
                        }
                    }
                });
                || ()
            },
        );
    }

    // Runs a mutation whose target has already been claimed in `inflight`.
    let launch = {
        let dispatcher = state.dispatcher();
        let inflight = inflight.clone();
        let app_dispatch = app_dispatch.clone();
        let i18n = i18n.clone();
        Callback::from(move |mutation: UserMutation| {
            let id = mutation.target();
            dispatcher.dispatch(UsersAction::PendingChanged(inflight.borrow().snapshot()));

            let dispatcher = dispatcher.clone();
            let inflight = inflight.clone();
            let app_dispatch = app_dispatch.clone();
            let success = i18n.t(mutation.success_key());
            let failure = i18n.t(mutation.failure_key());
            spawn_local(async move {
                let client = BackendClient::shared();
                let result = match mutation {
                    UserMutation::Role { id, role } => client.update_role(id, role).await,
                    UserMutation::Ban { id, banned } => client.set_banned(id, banned).await,
                    UserMutation::Delete { id } => client.delete_user(id).await,
                };
                inflight.borrow_mut().finish(&id);
                dispatcher.dispatch(UsersAction::PendingChanged(inflight.borrow().snapshot()));
                match result {
                    Ok(()) => {
                        log::info!("{mutation:?} applied");
                        dispatcher.dispatch(UsersAction::MutationSucceeded(success));
                    }
                    Err(err) => {
                        if err.is_unauthorized() {
                            app_dispatch.set(AppState::signed_out());
                        }
                        dispatcher.dispatch(UsersAction::MutationFailed(format!("{failure}: {err}")));
                    }
                }
            });
        })
    };

    let on_search = {
        let dispatcher = state.dispatcher();
        Callback::from(move |value: String| dispatcher.dispatch(UsersAction::Search(value)))
    };
    let on_page_change = {
        let dispatcher = state.dispatcher();
        Callback::from(move |page: u32| dispatcher.dispatch(UsersAction::GoToPage(page)))
    };
    let on_role_change = {
        let inflight = inflight.clone();
        let launch = launch.clone();
        Callback::from(move |(id, role): (Uuid, UserRole)| {
            let claimed = claim(UserMutation::Role { id, role }, &mut inflight.borrow_mut());
            if let Some(mutation) = claimed {
                launch.emit(mutation);
            }
        })
    };
    let on_delete = {
        let dispatcher = state.dispatcher();
        Callback::from(move |user: User| dispatcher.dispatch(UsersAction::RequestDelete(user)))
    };
    let on_toggle_ban = {
        let dispatcher = state.dispatcher();
        Callback::from(move |user: User| dispatcher.dispatch(UsersAction::RequestBan(user)))
    };
    let on_confirm = {
        let state = state.clone();
        Callback::from(move |()| {
            let claimed = claim_confirmed(&state.gate, &mut inflight.borrow_mut());
            let Some(mutation) = claimed else {
                return;
            };
            state.dispatch(UsersAction::CloseConfirmation);
            launch.emit(mutation);
        })
    };
    let on_cancel = {
        let dispatcher = state.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(UsersAction::CloseConfirmation))
    };
    let on_dismiss = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(UsersAction::DismissMessages))
    };

    let dialog_busy = state
        .gate
        .pending_action()
        .is_some_and(|action| state.pending.contains(&action.target()));

    html! {
        <div class="space-y-4">
            <div class="flex flex-wrap items-center justify-between gap-4">
                <h1 class="text-2xl font-bold">{ i18n.t("users.title") }</h1>
                <span class="text-sm text-base-content/70">
                    { i18n.t("users.total").replace("{count}", &state.total.to_string()) }
                </span>
            </div>
            <UserSearchBar value={state.search.clone()} on_change={on_search} />
            if let Some(message) = &state.error {
                <div class="alert alert-error" role="alert">
                    <span>{ message.clone() }</span>
                    <button type="button" class="btn btn-ghost btn-xs" onclick={on_dismiss.clone()}>{ i18n.t("users.dismiss") }</button>
                </div>
            }
            if let Some(message) = &state.notice {
                <div class="alert alert-success" role="status">
                    <span>{ message.clone() }</span>
                    <button type="button" class="btn btn-ghost btn-xs" onclick={on_dismiss}>{ i18n.t("users.dismiss") }</button>
                </div>
            }
            <div class="card bg-base-200 shadow">
                <UserTable
                    users={state.users.clone()}
                    pending={state.pending.clone()}
                    {current_user_id}
                    disabled={state.is_loading}
                    revision={state.revision}
                    {on_role_change}
                    {on_delete}
                    {on_toggle_ban}
                />
            </div>
            <UserPagination
                current_page={state.pagination.current_page()}
                total_pages={state.pagination.total_pages()}
                is_loading={state.is_loading}
                {on_page_change}
            />
            <UserConfirmationDialogs
                gate={state.gate.clone()}
                busy={dialog_busy}
                {on_confirm}
                {on_cancel}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(n: u128, is_banned: bool) -> User {
        User {
            id: Uuid::from_u128(n),
            email: format!("rider{n}@example.com"),
            role: UserRole::User,
            is_banned,
        }
    }

    fn reduce(state: UsersState, actions: Vec<UsersAction>) -> UsersState {
        let mut state = Rc::new(state);
        for action in actions {
            state = state.reduce(action);
        }
        (*state).clone()
    }

    fn loaded(total: u64, page: u32) -> UsersState {
        reduce(
            UsersState::default(),
            vec![
                UsersAction::FetchStarted(1),
                UsersAction::FetchSucceeded {
                    seq: 1,
                    page: UserPage {
                        users: vec![user(1, false)],
                        total,
                    },
                    page_size: 10,
                },
                UsersAction::GoToPage(page),
            ],
        )
    }

    #[test]
    fn fetch_sets_page_count() {
        let state = loaded(42, 1);
        assert_eq!(state.pagination.total_pages(), 5);
        assert_eq!(state.total, 42);
        assert!(!state.is_loading);
    }

    #[test]
    fn stale_fetch_results_are_ignored() {
        let state = reduce(
            UsersState::default(),
            vec![
                UsersAction::FetchStarted(1),
                UsersAction::FetchStarted(2),
                UsersAction::FetchSucceeded {
                    seq: 1,
                    page: UserPage {
                        users: vec![user(1, false)],
                        total: 1,
                    },
                    page_size: 10,
                },
            ],
        );
        assert!(state.users.is_empty());
        assert!(state.is_loading);
    }

    #[test]
    fn search_resets_to_first_page() {
        let state = reduce(loaded(42, 4), vec![UsersAction::Search("ops".into())]);
        assert_eq!(state.pagination.current_page(), 1);
        assert_eq!(state.search, "ops");
    }

    #[test]
    fn paging_is_ignored_while_loading() {
        let state = reduce(
            loaded(42, 2),
            vec![UsersAction::FetchStarted(9), UsersAction::GoToPage(4)],
        );
        assert_eq!(state.pagination.current_page(), 2);
    }

    #[test]
    fn paging_stays_in_range() {
        assert_eq!(loaded(42, 99).pagination.current_page(), 5);
        assert_eq!(loaded(42, 0).pagination.current_page(), 1);
    }

    #[test]
    fn only_one_confirmation_opens() {
        let state = reduce(
            UsersState::default(),
            vec![
                UsersAction::RequestDelete(user(1, false)),
                UsersAction::RequestBan(user(2, false)),
            ],
        );
        assert_eq!(
            state.gate.user_to_delete().map(|target| target.id),
            Some(Uuid::from_u128(1))
        );
        assert!(state.gate.user_to_ban().is_none());
    }

    #[test]
    fn ban_request_records_current_state() {
        let state = reduce(
            UsersState::default(),
            vec![UsersAction::RequestBan(user(3, true))],
        );
        assert_eq!(
            state.gate.pending_action().map(UserMutation::from),
            Some(UserMutation::Ban {
                id: Uuid::from_u128(3),
                banned: false
            })
        );
    }

    #[test]
    fn successful_mutation_reloads_and_failure_keeps_page() {
        let base = loaded(12, 2);
        let ok = reduce(
            base.clone(),
            vec![UsersAction::MutationSucceeded("User deleted.".into())],
        );
        assert_eq!(ok.reload, base.reload + 1);
        assert_eq!(ok.notice.as_deref(), Some("User deleted."));

        let failed = reduce(
            base.clone(),
            vec![UsersAction::MutationFailed("Could not delete user".into())],
        );
        assert_eq!(failed.reload, base.reload);
        assert_eq!(failed.users, base.users);
        assert!(failed.error.is_some());
    }

    #[test]
    fn failed_role_change_rebuilds_the_rows() {
        let base = loaded(12, 1);
        let ok = reduce(
            base.clone(),
            vec![UsersAction::MutationSucceeded("Role updated.".into())],
        );
        assert_eq!(ok.revision, base.revision);

        let failed = reduce(
            base.clone(),
            vec![
                UsersAction::MutationFailed("Could not change role: forbidden".into()),
                UsersAction::DismissMessages,
            ],
        );
        assert_ne!(failed.revision, base.revision);
        assert_eq!(failed.users, base.users);
        assert!(failed.error.is_none());
    }

    #[test]
    fn load_failure_keeps_the_message_it_was_given() {
        let state = reduce(
            UsersState::default(),
            vec![
                UsersAction::FetchStarted(1),
                UsersAction::FetchFailed {
                    seq: 1,
                    message: "Could not load users: timed out".into(),
                },
            ],
        );
        assert_eq!(state.error.as_deref(), Some("Could not load users: timed out"));
        assert!(!state.is_loading);
    }

    #[test]
    fn double_confirm_starts_one_mutation() {
        let mut gate = ConfirmationGate::default();
        gate.request_delete(Uuid::from_u128(7), "rider7@example.com");
        let mut inflight = InFlight::default();

        assert_eq!(
            claim_confirmed(&gate, &mut inflight),
            Some(UserMutation::Delete {
                id: Uuid::from_u128(7)
            })
        );
        assert_eq!(claim_confirmed(&gate, &mut inflight), None);

        inflight.finish(&Uuid::from_u128(7));
        assert!(claim_confirmed(&gate, &mut inflight).is_some());
    }

    #[test]
    fn idle_gate_confirms_nothing() {
        let mut inflight = InFlight::default();
        assert_eq!(claim_confirmed(&ConfirmationGate::Idle, &mut inflight), None);
        assert!(inflight.snapshot().is_empty());
    }

    #[test]
    fn role_change_waits_for_a_running_ban() {
        let id = Uuid::from_u128(8);
        let mut inflight = InFlight::default();
        assert!(claim(UserMutation::Ban { id, banned: true }, &mut inflight).is_some());
        assert_eq!(
            claim(
                UserMutation::Role {
                    id,
                    role: UserRole::Admin
                },
                &mut inflight
            ),
            None
        );
        assert!(
            claim(
                UserMutation::Delete {
                    id: Uuid::from_u128(9)
                },
                &mut inflight
            )
            .is_some()
        );
    }

    #[test]
    fn deleting_the_last_row_on_the_last_page_moves_back() {
        let state = reduce(
            loaded(11, 2),
            vec![
                UsersAction::FetchStarted(2),
                UsersAction::FetchSucceeded {
                    seq: 2,
                    page: UserPage {
                        users: Vec::new(),
                        total: 10,
                    },
                    page_size: 10,
                },
            ],
        );
        assert_eq!(state.pagination.current_page(), 1);
    }
}
