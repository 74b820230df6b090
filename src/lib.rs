//! Natural filename ordering for flat item lists.
//!
//! Records are loaded through a [`types::RecordSource`], then reordered with
//! [`sort::sort_items`] by creation time or by the natural filename comparator in
//! [`compare`], which reads `img2` before `img10`.

pub mod compare;
pub mod consts;
pub mod fs;
pub mod name;
pub mod sort;
pub mod types;

pub use compare::{compare_by_created_at, compare_filenames};
pub use sort::sort_items;
pub use types::{CsvSource, CsvStrSource, Listed, Record, RecordSource, SortDirection, SortMode};
