//! Persists the signed-in session in local storage between visits.

use chrono::Utc;
use gloo_storage::{LocalStorage, Storage};
use shared::models::Session;

use crate::api::BackendClient;

pub const SESSION_STORAGE_KEY: &str = "commute.session";

/// Loads the stored session, discarding it once expired.
pub fn restore() -> Option<Session> {
    let session: Session = LocalStorage::get(SESSION_STORAGE_KEY).ok()?;
    if session.is_expired(Utc::now()) {
        log::info!("stored session expired, signing out");
        LocalStorage::delete(SESSION_STORAGE_KEY);
        return None;
    }
    BackendClient::shared().set_access_token(Some(session.access_token.clone()));
    Some(session)
}

pub fn persist(session: &Session) {
    if let Err(err) = LocalStorage::set(SESSION_STORAGE_KEY, session) {
        log::error!("unable to persist session: {err}");
    }
}

pub fn clear() {
    BackendClient::shared().set_access_token(None);
    LocalStorage::delete(SESSION_STORAGE_KEY);
}
