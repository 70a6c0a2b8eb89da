pub const SITE_NAME: &str = "Open ML Catalog";

/// Delay between the last keystroke in a search box and the query being sent.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

pub const DEFAULT_PER_PAGE: u64 = 20;

/// Element id of the avatar file input on the dashboard.
pub const AVATAR_INPUT_ID: &str = "avatar-input";

/// Deepest result offset the search cluster pages to.
pub const MAX_RESULT_WINDOW: u64 = 10_000;
