/// Name of the single table holding café rows
pub const CAFE_TABLE: &str = "Cafe Data";

/// Default anti-forgery token lifetime in seconds (1 hour)
pub const DEFAULT_CSRF_TIME_LIMIT_SECS: i64 = 3600;

/// Default upper bound on pooled store connections
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Route the add and delete handlers redirect to on success
pub const CAFES_ROUTE: &str = "/cafes";

// =============================================================================
// Rating Choices
// =============================================================================

/// Coffee quality, one to five cups
pub const COFFEE_CHOICES: [&str; 5] = [
    "\u{2615}\u{fe0f}",
    "\u{2615}\u{fe0f}\u{2615}\u{fe0f}",
    "\u{2615}\u{fe0f}\u{2615}\u{fe0f}\u{2615}\u{fe0f}",
    "\u{2615}\u{fe0f}\u{2615}\u{fe0f}\u{2615}\u{fe0f}\u{2615}\u{fe0f}",
    "\u{2615}\u{fe0f}\u{2615}\u{fe0f}\u{2615}\u{fe0f}\u{2615}\u{fe0f}\u{2615}\u{fe0f}",
];

/// Wi-Fi strength, none ("✘") or one to five arms
pub const WIFI_CHOICES: [&str; 6] = [
    "✘",
    "💪",
    "💪💪",
    "💪💪💪",
    "💪💪💪💪",
    "💪💪💪💪💪",
];

/// Power outlet availability, one to five plugs
pub const POWER_CHOICES: [&str; 5] = ["🔌", "🔌🔌", "🔌🔌🔌", "🔌🔌🔌🔌", "🔌🔌🔌🔌🔌"];

// =============================================================================
// Error Messages
// =============================================================================

/// Shown when an insert collides with an existing name or location
pub const ERR_DUPLICATE_CAFE: &str = "A café with this name or location already exists.";

/// Shown when the store cannot be reached
pub const ERR_STORE_UNAVAILABLE: &str =
    "The café database is currently unavailable. Please try again later.";

pub const ERR_CSRF_MISSING: &str = "The CSRF token is missing.";
pub const ERR_CSRF_INVALID: &str = "The CSRF token is invalid.";
pub const ERR_CSRF_EXPIRED: &str = "The CSRF token has expired.";
