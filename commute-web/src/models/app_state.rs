use shared::models::Session;
use yewdux::{Context, Store};

use crate::session;

/// Global client state shared through the yewdux store.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AppState {
    pub session: Option<Session>,
}

impl AppState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_admin)
    }

    /// Stores a fresh session and keeps it across reloads.
    pub fn signed_in(session: Session) -> Self {
        session::persist(&session);
        Self {
            session: Some(session),
        }
    }

    /// Drops the session everywhere it is kept.
    pub fn signed_out() -> Self {
        session::clear();
        Self::default()
    }
}

impl Store for AppState {
    fn new(_cx: &Context) -> Self {
        Self {
            session: session::restore(),
        }
    }

    fn should_notify(&self, old: &Self) -> bool {
        self != old
    }
}
