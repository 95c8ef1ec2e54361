//! Absence defaults
//!
//! The value every facade operation produces when the host cannot resolve a
//! handle, does not know an identifier, or refuses an argument. Engine
//! subsystems treat these as ordinary outcomes.

/// Width/height of an unresolvable view
pub const SCREEN_DIMENSION: u32 = 0;

/// Paused state of an unresolvable view
pub const PAUSED: bool = false;

/// Scrollability of an unresolvable view
pub const CAN_SCROLL: bool = false;

/// Popup permission of an unknown plugin (fail closed)
pub const POPUPS_ALLOWED: bool = false;

/// Cookie switch when the host cannot answer
pub const COOKIES_ENABLED: bool = false;

/// Cookie string for an unresolvable or malformed URL
pub const COOKIES: &str = "";

/// Signed key for an unsupported strength index
pub const SIGNED_PUBLIC_KEY: &str = "";

/// File name for an unresolvable content URI
pub const CONTENT_FILE_NAME: &str = "";
