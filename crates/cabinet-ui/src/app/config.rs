//! Browser-side configuration: API endpoint discovery and locale choice.
//!
//! # Design
//! - The API origin is derived from the page URL so the same build works in
//!   development and behind a reverse proxy.
//! - Locale preference persists in local storage and falls back to the
//!   browser language, then to the French default.

use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;

/// Local storage key holding the preferred locale code.
pub(crate) const LOCALE_KEY: &str = "cabinet.locale";

/// Dev-server ports that proxy to the backend on port 8080.
const DEV_PORTS: [&str; 2] = ["3000", "5173"];

/// Resolve the API base URL from the current window location.
///
/// When served from a dev server the backend listens on 8080 of the same
/// host; otherwise the API is same-origin under the current URL.
pub(crate) fn api_base_url() -> String {
    let location = window().location();
    let origin = location.origin().unwrap_or_else(|_| String::new());
    match location.port() {
        Ok(port) if DEV_PORTS.contains(&port.as_str()) => {
            let host = location.hostname().unwrap_or_else(|_| "localhost".to_string());
            let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
            format!("{protocol}//{host}:8080")
        }
        _ => origin,
    }
}

/// Load the preferred locale: stored choice, then browser language, then default.
pub(crate) fn load_locale() -> LocaleCode {
    if let Ok(code) = LocalStorage::get::<String>(LOCALE_KEY) {
        if let Some(locale) = LocaleCode::from_lang_tag(&code) {
            return locale;
        }
    }
    window()
        .navigator()
        .language()
        .and_then(|tag| LocaleCode::from_lang_tag(&tag))
        .unwrap_or(DEFAULT_LOCALE)
}
