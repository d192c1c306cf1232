//! # Filter Engine
//!
//! Case-insensitive substring match on item names. Runs on every query
//! keystroke, so it lowercases the query once and walks the store in order.

use crate::core::item::Item;

/// Indices into `items` of every entry whose name contains `query`,
/// ignoring case. Order follows the store.
pub fn filter_indices(items: &[Item], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..items.len()).collect();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.name.to_lowercase().contains(&needle))
        .map(|(index, _)| index)
        .collect()
}

/// The filtered view itself, borrowed from the store.
pub fn filter<'a>(items: &'a [Item], query: &str) -> Vec<&'a Item> {
    filter_indices(items, query)
        .into_iter()
        .map(|index| &items[index])
        .collect()
}
