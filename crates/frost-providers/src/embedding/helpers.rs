//! Common helpers for embedding providers

/// Constructor normalisation shared by API-backed providers
pub mod constructor {
    /// Trim surrounding whitespace from an API key
    pub fn validate_api_key(api_key: &str) -> String {
        api_key.trim().to_string()
    }

    /// Trim a base URL and drop trailing slashes; blank URLs become `None`
    pub fn validate_url(url: Option<String>) -> Option<String> {
        url.map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
    }
}
