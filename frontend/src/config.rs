use log::Level;

pub const BRAND: &str = "Macch";
pub const COMPANY: &str = "Macch AI";
pub const PUBLIC_SITE_URL: &str = "https://macch.ai";
pub const PRIVACY_EMAIL: &str = "privacidad@macch.ai";
pub const LEGAL_EMAIL: &str = "legal@macch.ai";
pub const LAST_UPDATED: &str = "Noviembre 2025";

// Reveal observer defaults: trigger once 10% of the element has cleared
// the bottom 50px of the viewport.
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_BOTTOM_MARGIN_PX: f64 = -50.0;

#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8080"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    PUBLIC_SITE_URL
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
