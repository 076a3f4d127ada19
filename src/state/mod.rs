//! Pure site state: records, filter values, and the view models derived from
//! them.
//!
//! DESIGN
//! ======
//! Nothing in this module touches the DOM. Event handlers produce the next
//! filter value and the components render whatever these functions return,
//! so every filtering rule is testable on the host.

pub mod link;
pub mod nav;
pub mod projects;
pub mod publications;
pub mod reveal;
pub mod theme;

use serde::Deserialize;

/// Deserialize a field that may be missing or `null`, treating both as the
/// type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Lowercase helper shared by the free-text filters.
pub(crate) fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Case-insensitive substring test of `query` against the space-joined
/// `parts`. An empty query matches everything.
pub(crate) fn haystack_contains<'a>(parts: impl IntoIterator<Item = &'a str>, query: &str) -> bool {
    let haystack = normalize(&parts.into_iter().collect::<Vec<_>>().join(" "));
    haystack.contains(&normalize(query))
}
