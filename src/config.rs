use log::Level;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug // Verbose navigation logs when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

pub fn get_contact_email() -> &'static str {
    "hello@loqaly.ru"
}

/// Anchor every "get a demo" button scrolls to.
pub const DEMO_PATH: &str = "/#contact";
