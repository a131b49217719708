/// Parse a player id taken from a path or query segment.
///
/// Returns `None` for a missing, blank or non-numeric id. Range checks are left
/// to the caller so that `0` and negatives can be rejected with the same error
/// as a missing id.
pub fn parse_player_id(raw: Option<&str>) -> Option<i64> {
    let value = raw?.trim();
    if value.is_empty() {
        return None;
    }

    value.parse::<i64>().ok()
}

/// Parse a loosely written boolean flag (`1`, `true`, `yes`, `on`).
pub fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
