//! Application Configuration
//!
//! Resolves the API base URL and the login SDK app id once at startup.
//! Values come from build-time environment variables, with a local storage
//! override for the API base so a deployed bundle can point at a different
//! server.

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8082/api/v1";

const API_BASE_STORAGE_KEY: &str = "pillbox_api_url";

/// Configuration resolved once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Base URL for the medication API, without trailing slash
    pub api_base: String,
    /// App id for the messaging-platform login SDK; `None` disables login
    pub login_app_id: Option<String>,
}

impl AppConfig {
    /// Resolve configuration from build-time env and local storage.
    pub fn load() -> Self {
        let build_default = option_env!("PILLBOX_API_URL").unwrap_or(DEFAULT_API_BASE);
        let api_base = stored_api_base().unwrap_or_else(|| build_default.to_string());

        Self {
            api_base: normalize_base(&api_base),
            login_app_id: option_env!("PILLBOX_LIFF_ID").map(str::to_string),
        }
    }
}

/// Read the local storage override for the API base, if any
fn stored_api_base() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(API_BASE_STORAGE_KEY).ok()?
}

/// Normalize: remove trailing slash
fn normalize_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_trailing_slash() {
        assert_eq!(
            normalize_base("http://localhost:8082/api/v1/"),
            "http://localhost:8082/api/v1"
        );
    }

    #[test]
    fn test_normalize_keeps_clean_url() {
        assert_eq!(normalize_base(DEFAULT_API_BASE), DEFAULT_API_BASE);
    }
}
