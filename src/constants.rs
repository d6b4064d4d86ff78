//! Fixed parameters of the kiosk unit

/// Highest add-on strength a customer can request in a single drink
pub const MAX_ADD_ON_LEVEL: u8 = 5;

/// Lowest add-on strength, meaning the add-on is skipped entirely
pub const MIN_ADD_ON_LEVEL: u8 = 0;

/// Port the kiosk GUI binds to when KIOSK_PORT is not set
pub const DEFAULT_PORT: u16 = 5000;

/// Address the kiosk GUI binds to when KIOSK_HOST is not set
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Directory with the screen templates when KIOSK_TEMPLATES_DIR is not set
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";
