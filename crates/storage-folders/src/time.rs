//! Time utilities for settings files.

/// Current time as an RFC 3339 string (UTC).
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}
