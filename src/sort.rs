use crate::types::{Listed, SortMode};

/// Return a copy of `items` ordered by `mode`.
///
/// The sort is stable: items that compare equal keep their relative order.
/// `items` itself is left untouched.
pub fn sort_items<T: Listed + Clone>(items: &[T], mode: SortMode) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| mode.compare(a, b));
    tracing::debug!(%mode, count = sorted.len(), "sorted items");
    sorted
}
