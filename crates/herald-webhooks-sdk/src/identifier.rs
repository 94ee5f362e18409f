//! Canonical identifier handling.
//!
//! Herald resources are identified by UUIDs, but several API surfaces hand
//! them out URI-qualified (for example
//! `herald:///apps/staging/24f43c32-4d95-11e4-b3a2-0aa94b0003fe`). The
//! helpers here reduce either form to the bare canonical identifier.

use std::sync::LazyLock;

use regex::Regex;

/// Canonical identifier shape: five hyphen-separated hex groups (8-4-4-4-12).
static UUID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$").unwrap()
});

/// Reduce a possibly URI-qualified identifier to its canonical UUID.
///
/// Takes the segment after the last `/` (the whole input when no `/` is
/// present) and checks it against the canonical shape. The matching segment
/// is returned with its original casing; anything that does not match yields
/// `None`.
///
/// # Examples
///
/// ```
/// use herald_webhooks_sdk::identifier::to_uuid;
///
/// let id = "24f43c32-4d95-11e4-b3a2-0aa94b0003fe";
/// assert_eq!(to_uuid(id), Some(id));
///
/// let qualified = "herald:///apps/staging/24f43c32-4d95-11e4-b3a2-0aa94b0003fe";
/// assert_eq!(to_uuid(qualified), Some(id));
///
/// assert_eq!(to_uuid("not-an-identifier"), None);
/// ```
pub fn to_uuid(value: &str) -> Option<&str> {
    let candidate = match value.rfind('/') {
        Some(index) => &value[index + 1..],
        None => value,
    };

    UUID_PATTERN.is_match(candidate).then_some(candidate)
}

#[cfg(test)]
#[path = "identifier_tests.rs"]
mod tests;
