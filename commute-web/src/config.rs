//! Frontend configuration module
//!
//! Values are baked in at compile time from `COMMUTE_*` environment
//! variables so the static bundle needs no runtime configuration endpoint.

const DEFAULT_BACKEND_URL: &str = "http://localhost:54321";
const DEFAULT_PAGE_SIZE: u32 = 10;
const DEFAULT_SUPPORT_EMAIL: &str = "support@commute.example";

/// Frontend configuration for the hosted backend and site details
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Base URL of the hosted backend project
    pub backend_url: String,
    /// Public (anonymous) API key sent with every request
    pub anon_key: String,
    /// Rows per page in admin listings
    pub page_size: u32,
    /// Contact address shown on the marketing pages
    pub support_email: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            backend_url: option_env!("COMMUTE_BACKEND_URL")
                .unwrap_or(DEFAULT_BACKEND_URL)
                .trim_end_matches('/')
                .to_string(),
            anon_key: option_env!("COMMUTE_BACKEND_ANON_KEY")
                .unwrap_or_default()
                .to_string(),
            page_size: parse_page_size(option_env!("COMMUTE_PAGE_SIZE")),
            support_email: option_env!("COMMUTE_SUPPORT_EMAIL")
                .unwrap_or(DEFAULT_SUPPORT_EMAIL)
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn support_email(&self) -> &str {
        &self.support_email
    }
}

fn parse_page_size(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|size| (1..=100).contains(size))
        .unwrap_or(DEFAULT_PAGE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_config_default() {
        let config = FrontendConfig::default();
        assert!(config.backend_url().starts_with("http"));
        assert!(!config.backend_url().ends_with('/'));
        assert!(config.page_size() >= 1);
        assert!(config.support_email().contains('@'));
    }

    #[test]
    fn page_size_falls_back_on_invalid_values() {
        assert_eq!(parse_page_size(None), DEFAULT_PAGE_SIZE);
        assert_eq!(parse_page_size(Some("abc")), DEFAULT_PAGE_SIZE);
        assert_eq!(parse_page_size(Some("0")), DEFAULT_PAGE_SIZE);
        assert_eq!(parse_page_size(Some("500")), DEFAULT_PAGE_SIZE);
        assert_eq!(parse_page_size(Some(" 25 ")), 25);
    }

    #[test]
    fn test_frontend_config_clone() {
        let config1 = FrontendConfig::new();
        let config2 = config1.clone();
        assert_eq!(config1, config2);
    }
}
