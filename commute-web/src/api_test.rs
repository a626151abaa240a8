//! Tests for the backend client
//!
//! Covers endpoint URL construction, the access-token slot shared between
//! clones, and how failures are classified for the UI.

#[cfg(test)]
mod tests {
    use crate::api::{ApiError, BackendClient};
    use reqwest::StatusCode;
    use shared::models::ErrorResponse;

    #[test]
    fn test_base_url_is_normalized() {
        let client = BackendClient::new("https://project.example.co/", "anon");
        assert_eq!(
            client.rest_url("profiles"),
            "https://project.example.co/rest/v1/profiles"
        );
        assert_eq!(
            client.auth_url("/token"),
            "https://project.example.co/auth/v1/token"
        );
    }

    #[test]
    fn test_procedure_urls() {
        let client = BackendClient::new("http://localhost:54321", "anon");
        assert_eq!(
            client.rest_url("rpc/set_user_ban"),
            "http://localhost:54321/rest/v1/rpc/set_user_ban"
        );
    }

    #[test]
    fn test_access_token_is_shared_between_clones() {
        let client = BackendClient::new("http://localhost:54321", "anon");
        assert_eq!(client.current_access_token(), None);

        let clone = client.clone();
        clone.set_access_token(Some("jwt".to_string()));
        assert_eq!(client.current_access_token().as_deref(), Some("jwt"));

        client.set_access_token(None);
        assert_eq!(clone.current_access_token(), None);
    }

    #[test]
    fn test_error_classification() {
        assert!(ApiError::Unauthorized.is_unauthorized());

        let backend = ApiError::Backend {
            status: StatusCode::FORBIDDEN,
            body: ErrorResponse::new("permission denied for table profiles"),
        };
        assert!(!backend.is_unauthorized());
        assert_eq!(backend.to_string(), "permission denied for table profiles");

        let decode = ApiError::Decode("missing field `id`".to_string());
        assert!(decode.to_string().starts_with("unexpected response"));
    }
}
