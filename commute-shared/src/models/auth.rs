use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserRole;

/// Email/password credentials for the password grant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Role claims carried in the backend's app metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppMetadata {
    #[serde(default)]
    pub role: Option<UserRole>,
}

/// User object returned alongside a token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub app_metadata: AppMetadata,
}

/// Response of the token endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: TokenUser,
}

/// The signed-in account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
    pub role: UserRole,
}

/// An authenticated session kept by the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    /// Expiry as seconds since the Unix epoch.
    pub expires_at: i64,
    pub user: SessionUser,
}

impl Session {
    /// Builds a session from a token response received at `now`.
    #[must_use]
    pub fn from_token(token: TokenResponse, now: DateTime<Utc>) -> Self {
        let expires_at = token
            .expires_at
            .unwrap_or_else(|| now.timestamp() + token.expires_in);
        let TokenUser {
            id,
            email,
            app_metadata,
        } = token.user;
        Self {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
            expires_at,
            user: SessionUser {
                id,
                email: email.unwrap_or_default(),
                role: app_metadata.role.unwrap_or_default(),
            },
        }
    }

    #[must_use]
    pub fn expires_at_utc(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.expires_at, 0).single()
    }

    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at_utc().is_none_or(|expiry| expiry <= now)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.role == UserRole::Admin
    }
}
