//! Shared constants.

/// Durable-storage key holding the access token. Presence of this entry is
/// the sole source of truth for "authenticated" on cold start.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Durable-storage key holding the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// Default base URL of the campaign backend.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Channels the dashboard offers in its filter controls and forms.
pub const KNOWN_CHANNELS: [&str; 4] = ["TV", "Radio", "Social Media", "Search Engine"];

/// Date format used by the backend and by all user-facing date fields.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
