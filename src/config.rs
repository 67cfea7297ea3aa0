//! Frontend Configuration
//!
//! Compile-time settings. The API address can be overridden at build time:
//! `VOLUNTEER_API_URL=https://api.example.org trunk build`.

use log::LevelFilter;

/// Backend address used when `VOLUNTEER_API_URL` is not set
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Console log level
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Demo identities used when entering each role view
pub const DEMO_VOLUNTEER_ID: u32 = 1;
pub const DEMO_ORGANIZATION_ID: u32 = 11;
pub const DEMO_COORDINATOR_ID: u32 = 18;

/// Message attached to every application
pub const APPLICATION_MESSAGE: &str = "Chętnie pomogę w tej inicjatywie!";

/// Number of initiatives previewed on the home page
pub const HOME_PREVIEW_COUNT: usize = 4;

/// Category filter options
pub const CATEGORIES: &[&str] = &[
    "Pomoc społeczna",
    "Ekologia",
    "Kultura",
    "Edukacja",
    "Sport",
    "Opieka nad zwierzętami",
    "Pomoc seniorom",
];

/// Location (district) filter options
pub const LOCATIONS: &[&str] = &[
    "Stare Miasto",
    "Kazimierz",
    "Podgórze",
    "Krowodrza",
    "Nowa Huta",
    "Dębniki",
    "Prądnik Biały",
];

/// Base URL of the backend API, without a trailing slash
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("VOLUNTEER_API_URL").unwrap_or(DEFAULT_API_URL))
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_trailing_slashes() {
        assert_eq!(normalize_base_url("https://api.example.org///"), "https://api.example.org");
        assert_eq!(normalize_base_url("  http://localhost:9000 "), "http://localhost:9000");
    }

    #[test]
    fn test_normalize_empty_falls_back() {
        assert_eq!(normalize_base_url(""), DEFAULT_API_URL);
        assert_eq!(normalize_base_url("/"), DEFAULT_API_URL);
    }

    #[test]
    fn test_base_url_has_no_trailing_slash() {
        assert!(!api_base_url().ends_with('/'));
    }
}
