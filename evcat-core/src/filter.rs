//! Pure derivation of the visible event list.
//!
//! These functions have no side effects and are safe to call on every
//! render/update; the visible list is always recomputed from the canonical
//! collection rather than stored.

use crate::event::Event;
use std::collections::BTreeSet;

/// The subset of `events` matching the search term and category filter,
/// in collection order.
///
/// A record is kept when its title contains `search_term` case-insensitively
/// (empty term keeps all) and its categories contain `category` exactly
/// (`None` or empty keeps all).
pub fn visible<'a>(
    events: &'a [Event],
    search_term: &str,
    category: Option<&str>,
) -> Vec<&'a Event> {
    let needle = search_term.to_lowercase();
    events
        .iter()
        .filter(|event| needle.is_empty() || event.title.to_lowercase().contains(&needle))
        .filter(|event| match category {
            Some(cat) if !cat.is_empty() => event.categories.iter().any(|c| c == cat),
            _ => true,
        })
        .collect()
}

/// The union of every record's categories, used to populate filter choices.
pub fn distinct_categories(events: &[Event]) -> BTreeSet<String> {
    events
        .iter()
        .flat_map(|event| event.categories.iter().cloned())
        .collect()
}
