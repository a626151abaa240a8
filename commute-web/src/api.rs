use crate::config::FrontendConfig;
use chrono::Utc;
use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{
    DashboardStats, DeleteUserRequest, ErrorResponse, Hub, NewStop, Session, SetBanRequest,
    SignInRequest, Stop, TokenResponse, UpdateRoleRequest, User, UserPage, UserQuery, UserRole,
};
use shared::pagination::parse_content_range_total;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use uuid::Uuid;

const API_KEY_HEADER: &str = "apikey";
const CONTENT_RANGE_HEADER: &str = "content-range";

thread_local! {
    static SHARED_CLIENT: OnceCell<BackendClient> = OnceCell::new();
}

/// Failure of a backend call, as surfaced to the UI.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unable to reach the server: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("your session has expired, please sign in again")]
    Unauthorized,
    #[error("{body}")]
    Backend { status: StatusCode, body: ErrorResponse },
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

/// Client for the hosted backend's auth, row and procedure endpoints.
#[derive(Clone, Debug)]
pub struct BackendClient {
    base_url: String,
    anon_key: String,
    client: Client,
    access_token: Arc<Mutex<Option<String>>>,
}

impl BackendClient {
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            client: Client::new(),
            access_token: Arc::new(Mutex::new(None)),
        }
    }

    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| {
                let config = FrontendConfig::new();
                Self::new(config.backend_url(), config.anon_key())
            })
            .clone()
        })
    }

    pub fn rest_url(&self, path: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn set_access_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.access_token.lock() {
            *guard = token;
        }
    }

    pub fn current_access_token(&self) -> Option<String> {
        self.access_token
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().cloned())
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let bearer = self
            .current_access_token()
            .unwrap_or_else(|| self.anon_key.clone());
        request
            .header(API_KEY_HEADER, &self.anon_key)
            .bearer_auth(bearer)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = self.authorize(request).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::UNAUTHORIZED {
            log::warn!("backend rejected the session token");
            return Err(ApiError::Unauthorized);
        }
        let text = response.text().await.unwrap_or_default();
        let body = ErrorResponse::from_backend_body(&text, &format!("Request failed: {status}"));
        log::error!("backend call failed ({status}): {body}");
        Err(ApiError::Backend { status, body })
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    /// Sign in with email/password credentials.
    ///
    /// Credential failures come back as `400` from the token endpoint and are
    /// reported as [`ApiError::Backend`].
    pub async fn sign_in(&self, payload: &SignInRequest) -> Result<Session, ApiError> {
        let url = self.auth_url("token");
        let request = self
            .client
            .post(url)
            .query(&[("grant_type", "password")])
            .json(payload);
        let token: TokenResponse = self.send_json(request).await?;
        let session = Session::from_token(token, Utc::now());
        self.set_access_token(Some(session.access_token.clone()));
        log::info!("signed in as {}", session.user.email);
        Ok(session)
    }

    /// Terminate the current session. The local token is dropped either way.
    pub async fn sign_out(&self) -> Result<(), ApiError> {
        let url = self.auth_url("logout");
        let result = self.send(self.client.post(url)).await.map(|_| ());
        self.set_access_token(None);
        result
    }

    /// One page of users matching `query`, with the filtered total.
    pub async fn list_users(&self, query: &UserQuery) -> Result<UserPage, ApiError> {
        let url = self.rest_url("profiles");
        let request = self
            .client
            .get(url)
            .query(&query.to_params())
            .header("Prefer", "count=exact");
        let response = self.send(request).await?;
        let total = response
            .headers()
            .get(CONTENT_RANGE_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_content_range_total);
        let users: Vec<User> = response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        let total = total.unwrap_or(query.offset() + users.len() as u64);
        Ok(UserPage { users, total })
    }

    pub async fn update_role(&self, id: Uuid, role: UserRole) -> Result<(), ApiError> {
        let url = self.rest_url("profiles");
        let request = self
            .client
            .patch(url)
            .query(&[("id", format!("eq.{id}"))])
            .json(&UpdateRoleRequest { role });
        self.send(request).await.map(|_| ())
    }

    pub async fn set_banned(&self, id: Uuid, banned: bool) -> Result<(), ApiError> {
        let url = self.rest_url("rpc/set_user_ban");
        let request = self.client.post(url).json(&SetBanRequest {
            target_id: id,
            banned,
        });
        self.send(request).await.map(|_| ())
    }

    pub async fn delete_user(&self, id: Uuid) -> Result<(), ApiError> {
        let url = self.rest_url("rpc/delete_user");
        let request = self
            .client
            .post(url)
            .json(&DeleteUserRequest { target_id: id });
        self.send(request).await.map(|_| ())
    }

    /// Hubs ordered by name, each with its stops embedded.
    pub async fn list_hubs(&self) -> Result<Vec<Hub>, ApiError> {
        let url = self.rest_url("hubs");
        let request = self.client.get(url).query(&[
            ("select", "id,name,city,stops(*)"),
            ("order", "name.asc"),
        ]);
        self.send_json(request).await
    }

    pub async fn create_stop(&self, stop: &NewStop) -> Result<Stop, ApiError> {
        let url = self.rest_url("stops");
        let request = self
            .client
            .post(url)
            .header("Prefer", "return=representation")
            .json(stop);
        let mut created: Vec<Stop> = self.send_json(request).await?;
        created
            .pop()
            .ok_or_else(|| ApiError::Decode("stop insert returned no rows".to_string()))
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        let url = self.rest_url("rpc/admin_dashboard_stats");
        self.send_json(self.client.post(url).json(&serde_json::json!({})))
            .await
    }
}
