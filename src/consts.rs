use regex::Regex;
use std::sync::LazyLock;

/// Matches the leading run of ASCII letters, e.g. `img` in `img10.png`.
pub static LETTER_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]+").unwrap());

/// Matches a leading run of ASCII digits only (`\d` would also match non-ASCII digits).
pub static DIGIT_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+").unwrap());

/// Matches the zero padding at the start of a digit run.
pub static LEADING_ZEROS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^0+").unwrap());

/// File looked up in the working directory when no `--file` is given.
pub const DEFAULT_ITEMS_FILE: &str = "items.csv";

pub const FILENAME_COLUMN: &str = "filename";
pub const CREATED_AT_COLUMN: &str = "createdAt";
