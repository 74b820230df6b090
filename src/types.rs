use crate::compare::{compare_by_created_at, compare_filenames};
use crate::consts::{CREATED_AT_COLUMN, FILENAME_COLUMN};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use eyre::{Result, WrapErr, eyre};
use serde::{Deserialize, Serialize};
use std::{
    cmp::Ordering,
    fmt,
    fs::File,
    io::Read,
    path::PathBuf,
    str::FromStr,
};

/// Which way a comparator should order its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Turn an ascending ordering into one for this direction.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// How a list of items should be ordered.
///
/// Parses from `created-asc`, `created-desc`, `filename-asc` and `filename-desc`,
/// or from the long forms such as `filename-ascending`.
///
/// # Examples
///
/// ```rust
/// use itemsort::types::{SortDirection, SortMode};
///
/// let mode: SortMode = "filename-desc".parse().unwrap();
/// assert_eq!(mode, SortMode::FilenameDescending);
/// assert_eq!(mode.direction(), SortDirection::Descending);
/// assert_eq!(mode.to_string(), "filename-desc");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Earliest `createdAt` first.
    #[default]
    CreatedAscending,
    /// Latest `createdAt` first.
    CreatedDescending,
    /// Natural filename order.
    FilenameAscending,
    /// Natural filename order, reversed.
    FilenameDescending,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::CreatedAscending,
        SortMode::CreatedDescending,
        SortMode::FilenameAscending,
        SortMode::FilenameDescending,
    ];

    pub fn direction(self) -> SortDirection {
        match self {
            SortMode::CreatedAscending | SortMode::FilenameAscending => SortDirection::Ascending,
            SortMode::CreatedDescending | SortMode::FilenameDescending => {
                SortDirection::Descending
            }
        }
    }

    /// Compare two items with the comparator and direction this mode selects.
    pub fn compare<T: Listed + ?Sized>(self, a: &T, b: &T) -> Ordering {
        match self {
            SortMode::CreatedAscending | SortMode::CreatedDescending => {
                compare_by_created_at(&a.created_at(), &b.created_at(), self.direction())
            }
            SortMode::FilenameAscending | SortMode::FilenameDescending => {
                compare_filenames(a.filename(), b.filename(), self.direction())
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::CreatedAscending => "created-asc",
            SortMode::CreatedDescending => "created-desc",
            SortMode::FilenameAscending => "filename-asc",
            SortMode::FilenameDescending => "filename-desc",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "created-asc" | "created-ascending" => Ok(SortMode::CreatedAscending),
            "created-desc" | "created-descending" => Ok(SortMode::CreatedDescending),
            "filename-asc" | "filename-ascending" => Ok(SortMode::FilenameAscending),
            "filename-desc" | "filename-descending" => Ok(SortMode::FilenameDescending),
            other => Err(eyre!(
                "unknown sort mode `{other}` (expected one of: created-asc, created-desc, filename-asc, filename-desc)"
            )),
        }
    }
}

/// What a sortable item has to expose: a filename and a creation timestamp.
pub trait Listed {
    fn filename(&self) -> &str;
    fn created_at(&self) -> DateTime<Utc>;
}

/// One item from the record store.
///
/// Serializes with the store's column names, so a list of records renders as
/// `[{"filename": "a2.txt", "createdAt": "2024-01-01T00:00:00Z"}, ...]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Display name of the item; never empty.
    pub filename: String,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
}

impl Listed for Record {
    fn filename(&self) -> &str {
        &self.filename
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// A source of records.
///
/// Implementations load records from some storage medium. `list()` returns them
/// in storage order; callers sort them afterwards with [`crate::sort::sort_items`].
pub trait RecordSource {
    /// Load every record.
    fn list(&self) -> Result<Vec<Record>>;
}

/// A `RecordSource` that reads a CSV file from disk.
///
/// The file must have a header row with `filename` and `createdAt` columns, in
/// any order. Other columns are ignored and blank lines are skipped.
///
/// # Examples
///
/// ```rust,ignore
/// use itemsort::types::{CsvSource, RecordSource};
///
/// let src = CsvSource::new("items.csv");
/// for record in src.list().expect("read items") {
///     println!("{} {}", record.created_at, record.filename);
/// }
/// ```
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for CsvSource {
    fn list(&self) -> Result<Vec<Record>> {
        let file = File::open(&self.path)
            .wrap_err_with(|| format!("failed to open {}", self.path.display()))?;
        let records = parse_records(file)
            .wrap_err_with(|| format!("failed to read records from {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), count = records.len(), "loaded records");
        Ok(records)
    }
}

/// A `RecordSource` over CSV text already in memory. Same format as [`CsvSource`].
pub struct CsvStrSource<'a> {
    source: &'a str,
}

impl<'a> CsvStrSource<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }
}

impl RecordSource for CsvStrSource<'_> {
    fn list(&self) -> Result<Vec<Record>> {
        let records = parse_records(self.source.as_bytes())?;
        tracing::debug!(count = records.len(), "parsed in-memory records");
        Ok(records)
    }
}

fn parse_records<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers().wrap_err("failed to read header row")?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| eyre!("missing `{name}` column in header"))
    };
    let filename_idx = column(FILENAME_COLUMN)?;
    let created_idx = column(CREATED_AT_COLUMN)?;
    tracing::trace!(?headers, filename_idx, created_idx);

    let mut out = Vec::new();
    for row in reader.records() {
        let row = row.wrap_err("malformed CSV row")?;
        let line = row.position().map_or(0, |p| p.line());

        let filename = row.get(filename_idx).unwrap_or_default();
        if filename.trim().is_empty() {
            return Err(eyre!("line {line}: empty `{FILENAME_COLUMN}`"));
        }
        let raw_created = row.get(created_idx).unwrap_or_default();
        let created_at = parse_created_at(raw_created.trim())
            .wrap_err_with(|| format!("line {line}: bad `{CREATED_AT_COLUMN}`"))?;

        tracing::trace!(line, filename, %created_at);
        out.push(Record {
            filename: filename.to_string(),
            created_at,
        });
    }

    Ok(out)
}

/// Accepted layouts for timestamps without an offset; they are read as UTC.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a `createdAt` value: RFC 3339, a naive date-time in UTC, or a bare date.
pub fn parse_created_at(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    for layout in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, layout) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::default()).and_utc());
    }
    Err(eyre!("unrecognized timestamp {value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_mode_parses_short_and_long_forms() {
        assert_eq!("created-asc".parse::<SortMode>().unwrap(), SortMode::CreatedAscending);
        assert_eq!(
            "filename-ascending".parse::<SortMode>().unwrap(),
            SortMode::FilenameAscending
        );
        assert_eq!(" created-desc ".parse::<SortMode>().unwrap(), SortMode::CreatedDescending);
        assert!("name-asc".parse::<SortMode>().is_err());
    }

    #[test]
    fn sort_mode_display_round_trips() {
        for mode in SortMode::ALL {
            assert_eq!(mode.to_string().parse::<SortMode>().unwrap(), mode);
        }
        assert_eq!(SortMode::default(), SortMode::CreatedAscending);
    }

    #[test]
    fn parse_created_at_formats() {
        let expected: DateTime<Utc> = "2024-03-05T10:20:30Z".parse().unwrap();
        assert_eq!(parse_created_at("2024-03-05T10:20:30Z").unwrap(), expected);
        assert_eq!(parse_created_at("2024-03-05T12:20:30+02:00").unwrap(), expected);
        assert_eq!(parse_created_at("2024-03-05T10:20:30").unwrap(), expected);
        assert_eq!(parse_created_at("2024-03-05 10:20:30").unwrap(), expected);

        let midnight: DateTime<Utc> = "2024-03-05T00:00:00Z".parse().unwrap();
        assert_eq!(parse_created_at("2024-03-05").unwrap(), midnight);

        assert!(parse_created_at("yesterday").is_err());
        assert!(parse_created_at("").is_err());
    }

    #[test]
    fn str_source_any_column_order_and_blank_lines() {
        let csv = "createdAt,size,filename\n\
                   2024-01-02T00:00:00Z,10,b2.txt\n\
                   \n\
                   2024-01-01T00:00:00Z,20,a10.txt\n";
        let records = CsvStrSource::new(csv).list().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].filename, "b2.txt");
        assert_eq!(records[1].filename, "a10.txt");
        assert_eq!(
            records[1].created_at,
            "2024-01-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap()
        );
    }

    #[test]
    fn str_source_skips_blank_lines_before_header() {
        let records = CsvStrSource::new("\n\nfilename,createdAt\na.txt,2024-01-01\n")
            .list()
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].filename, "a.txt");
    }

    #[test]
    fn str_source_header_only_is_empty() {
        let records = CsvStrSource::new("filename,createdAt\n").list().unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn str_source_keeps_filename_whitespace() {
        let csv = " filename , createdAt \n\" 2.txt\", 2024-01-01 \n";
        let records = CsvStrSource::new(csv).list().unwrap();
        assert_eq!(records[0].filename, " 2.txt");
        assert_eq!(
            records[0].created_at,
            "2024-01-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap()
        );
    }

    #[test]
    fn str_source_missing_column() {
        let err = CsvStrSource::new("filename,size\na.txt,1\n").list().unwrap_err();
        assert!(format!("{err:#}").contains("createdAt"), "{err:#}");
    }

    #[test]
    fn str_source_rejects_empty_filename_and_bad_timestamp() {
        let err = CsvStrSource::new("filename,createdAt\n ,2024-01-01\n")
            .list()
            .unwrap_err();
        assert!(format!("{err:#}").contains("empty `filename`"), "{err:#}");

        let err = CsvStrSource::new("filename,createdAt\na.txt,soon\n")
            .list()
            .unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("line 2"), "{msg}");
        assert!(msg.contains("soon"), "{msg}");
    }

    #[test]
    fn record_serializes_with_store_column_names() {
        let record = Record {
            filename: "a2.txt".to_string(),
            created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "filename": "a2.txt", "createdAt": "2024-01-01T00:00:00Z" })
        );
    }
}
