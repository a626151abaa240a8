use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Role assignment for a commuter account.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    /// Every role, in the order the role picker lists them.
    pub const ALL: [Self; 2] = [Self::User, Self::Admin];

    /// Return the canonical string representation stored by the backend.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            _ => Err("unknown user role"),
        }
    }
}

/// A commuter account as listed in the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: Uuid,

    /// The user's email address.
    pub email: String,

    /// The user's role.
    #[serde(default)]
    pub role: UserRole,

    /// Whether the account is currently banned.
    #[serde(default)]
    pub is_banned: bool,
}

/// One page of users plus the size of the full filtered result set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPage {
    pub users: Vec<User>,
    pub total: u64,
}

/// Body for a role mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateRoleRequest {
    pub role: UserRole,
}

/// Body for the ban/unban remote procedure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetBanRequest {
    pub target_id: Uuid,
    pub banned: bool,
}

/// Body for the delete remote procedure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteUserRequest {
    pub target_id: Uuid,
}

/// Columns requested when listing users.
pub const USER_COLUMNS: &str = "id,email,role,is_banned";

/// Filter and page coordinates for a user listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserQuery {
    pub search: String,
    pub page: u32,
    pub page_size: u32,
}

impl UserQuery {
    #[must_use]
    pub fn new(search: impl Into<String>, page: u32, page_size: u32) -> Self {
        Self {
            search: search.into(),
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Zero-based row offset of the first user on the page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page.max(1) - 1) * u64::from(self.page_size)
    }

    /// Search term with the characters the row filter grammar reserves removed
    /// and `ilike` wildcards escaped so they match literally.
    ///
    /// Returns `None` when nothing searchable is left.
    #[must_use]
    pub fn search_term(&self) -> Option<String> {
        let cleaned: String = self
            .search
            .chars()
            .filter(|c| !matches!(c, ',' | '(' | ')' | '*'))
            .collect();
        let cleaned = cleaned.trim();
        if cleaned.is_empty() {
            return None;
        }
        let mut escaped = String::with_capacity(cleaned.len());
        for c in cleaned.chars() {
            // `%` and `_` are pattern characters to `ilike`.
            if matches!(c, '%' | '_' | '\\') {
                escaped.push('\\');
            }
            escaped.push(c);
        }
        Some(escaped)
    }

    /// Query-string pairs for the row listing endpoint.
    #[must_use]
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("select", USER_COLUMNS.to_string()),
            ("order", "email.asc".to_string()),
            ("offset", self.offset().to_string()),
            ("limit", self.page_size.to_string()),
        ];
        if let Some(term) = self.search_term() {
            params.push(("email", format!("ilike.*{term}*")));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_role_roundtrip() {
        for (text, role) in [("user", UserRole::User), ("admin", UserRole::Admin)] {
            assert_eq!(role.as_str(), text);
            assert_eq!(role.to_string(), text);
            assert_eq!(UserRole::from_str(text).unwrap(), role);
        }
    }

    #[test]
    fn user_role_invalid() {
        assert!(UserRole::from_str("driver").is_err());
    }

    #[test]
    fn user_defaults_missing_columns() {
        let json = r#"{"id":"f47ac10b-58cc-4372-a567-0e02b2c3d479","email":"rider@example.com"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, UserRole::User);
        assert!(!user.is_banned);
    }

    #[test]
    fn user_reads_backend_row() {
        let json = r#"{"id":"f47ac10b-58cc-4372-a567-0e02b2c3d479","email":"ops@example.com","role":"admin","is_banned":true}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, UserRole::Admin);
        assert!(user.is_banned);
        assert_eq!(user.email, "ops@example.com");
    }

    #[test]
    fn query_offset_follows_page() {
        assert_eq!(UserQuery::new("", 1, 10).offset(), 0);
        assert_eq!(UserQuery::new("", 3, 10).offset(), 20);
        assert_eq!(UserQuery::new("", 0, 10).offset(), 0);
    }

    #[test]
    fn query_without_search_has_no_filter() {
        let params = UserQuery::new("   ", 2, 25).to_params();
        assert!(params.iter().all(|(key, _)| *key != "email"));
        assert!(params.contains(&("offset", "25".to_string())));
        assert!(params.contains(&("limit", "25".to_string())));
        assert!(params.contains(&("select", USER_COLUMNS.to_string())));
    }

    #[test]
    fn query_search_is_sanitized() {
        let query = UserQuery::new(" jo*hn,(x) ", 1, 10);
        assert_eq!(query.search_term().as_deref(), Some("johnx"));
        let params = query.to_params();
        assert!(params.contains(&("email", "ilike.*johnx*".to_string())));
    }

    #[test]
    fn like_wildcards_in_search_match_literally() {
        let query = UserQuery::new("a_b%", 1, 10);
        assert_eq!(query.search_term().as_deref(), Some(r"a\_b\%"));
        assert!(
            query
                .to_params()
                .contains(&("email", r"ilike.*a\_b\%*".to_string()))
        );
        assert_eq!(
            UserQuery::new(r"back\slash", 1, 5).search_term().as_deref(),
            Some(r"back\\slash")
        );
    }

    #[test]
    fn query_of_only_reserved_characters_is_empty() {
        assert_eq!(UserQuery::new("*,()", 1, 10).search_term(), None);
    }
}
