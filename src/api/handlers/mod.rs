pub mod health;
pub use self::health::health;

pub mod auth;

// common functions for the handlers
use regex::Regex;

/// Basic `local@domain.tld` format check shared by the auth handlers.
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").map_or(false, |re| re.is_match(email))
}

// axum handler for the service banner
pub async fn root() -> &'static str {
    concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"))
}
