//! Comparators behind every [`SortMode`](crate::types::SortMode).
//!
//! Both functions return an [`Ordering`] for the requested direction. They work out
//! the ascending answer first and reverse it for descending, so
//! `compare(a, b, Ascending) == compare(a, b, Descending).reverse()` holds for every pair.

use crate::name::{ClassifiedFilename, classify};
use crate::types::SortDirection;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Natural filename comparison: `file2` before `file10`, digit-led names before
/// letter-led ones, and more zero padding first when digit-led values tie.
///
/// Total over all strings, empty ones included.
///
/// # Examples
///
/// ```rust
/// use itemsort::compare::compare_filenames;
/// use itemsort::types::SortDirection;
/// use std::cmp::Ordering;
///
/// assert_eq!(
///     compare_filenames("img2.png", "img10.png", SortDirection::Ascending),
///     Ordering::Less
/// );
/// assert_eq!(
///     compare_filenames("007.txt", "07.txt", SortDirection::Descending),
///     Ordering::Greater
/// );
/// ```
pub fn compare_filenames(a: &str, b: &str, direction: SortDirection) -> Ordering {
    direction.apply(natural_ascending(a, b))
}

/// Timestamp comparison; ascending puts the earlier record first.
pub fn compare_by_created_at(
    a: &DateTime<Utc>,
    b: &DateTime<Utc>,
    direction: SortDirection,
) -> Ordering {
    direction.apply(a.cmp(b))
}

/// Lexicographic collation used for prefixes and the final fallback.
///
/// Case-folded comparison first, raw code points second, so the result is a total
/// order that only reports `Equal` for identical strings.
/// Case-only differences put uppercase first (`Banana < banana`), unlike most locales.
pub fn collate(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.chars().map(|c| c.to_ascii_lowercase()));
    folded.then_with(|| a.cmp(b))
}

fn natural_ascending(a: &str, b: &str) -> Ordering {
    let (ca, cb) = (classify(a), classify(b));

    let decided = match (ca.has_letter_prefix(), cb.has_letter_prefix()) {
        // Digit-led (or letter-free) names come first.
        (false, true) => Some(Ordering::Less),
        (true, false) => Some(Ordering::Greater),
        (true, true) => letter_branch(&ca, &cb),
        (false, false) => digit_branch(&ca, &cb),
    };

    decided.unwrap_or_else(|| collate(a, b))
}

fn letter_branch(a: &ClassifiedFilename<'_>, b: &ClassifiedFilename<'_>) -> Option<Ordering> {
    let prefix = collate(a.leading_letters, b.leading_letters);
    if prefix.is_ne() {
        return Some(prefix);
    }

    match (a.number_after_prefix, b.number_after_prefix) {
        (None, Some(_)) => Some(Ordering::Less),
        (Some(_), None) => Some(Ordering::Greater),
        // Zero padding only breaks ties in the digit branch.
        (Some(na), Some(nb)) => Some(na.cmp_value(&nb)).filter(|o| o.is_ne()),
        (None, None) => None,
    }
}

fn digit_branch(a: &ClassifiedFilename<'_>, b: &ClassifiedFilename<'_>) -> Option<Ordering> {
    let (Some(na), Some(nb)) = (a.number_after_prefix, b.number_after_prefix) else {
        return None;
    };

    let by_value = na.cmp_value(&nb);
    if by_value.is_ne() {
        return Some(by_value);
    }

    // More leading zeros first: `007` < `07` < `7`.
    Some(b.leading_zero_count.cmp(&a.leading_zero_count)).filter(|o| o.is_ne())
}
