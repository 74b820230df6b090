use crate::consts::{DIGIT_RUN_RE, LEADING_ZEROS_RE, LETTER_PREFIX_RE};
use std::cmp::Ordering;

/// A run of ASCII digits taken from a filename, e.g. `007` in `007.txt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitRun<'a> {
    /// The digits exactly as written, zero padding included.
    pub digits: &'a str,
}

impl<'a> DigitRun<'a> {
    /// The run without its zero padding. `"000"` yields `""`.
    fn significant(&self) -> &'a str {
        self.digits.trim_start_matches('0')
    }

    /// Integer value of the run, or `None` if it does not fit in a `u64`.
    pub fn value(&self) -> Option<u64> {
        self.digits.parse().ok()
    }

    /// Compare two runs by integer value. Exact for runs of any length.
    pub fn cmp_value(&self, other: &DigitRun<'_>) -> Ordering {
        let (a, b) = (self.significant(), other.significant());
        a.len().cmp(&b.len()).then_with(|| a.cmp(b))
    }
}

/// A filename split into the parts the natural comparator looks at.
///
/// `img010.png` classifies as letters `img`, digit run `010`, one leading zero.
/// `007.txt` has no letters, digit run `007`, two leading zeros.
/// `.hidden` has neither letters nor a digit run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedFilename<'a> {
    /// Maximal leading run of ASCII letters, or empty.
    pub leading_letters: &'a str,
    /// Digits right after `leading_letters` (or at the start when there are no letters).
    pub number_after_prefix: Option<DigitRun<'a>>,
    /// Count of `0` at the start of the digit run; 0 when there is no run.
    pub leading_zero_count: usize,
}

impl ClassifiedFilename<'_> {
    pub fn has_letter_prefix(&self) -> bool {
        !self.leading_letters.is_empty()
    }
}

/// Classify `filename` for natural ordering. Never fails; `""` has no letters and no digits.
pub fn classify(filename: &str) -> ClassifiedFilename<'_> {
    let leading_letters = LETTER_PREFIX_RE
        .find(filename)
        .map_or("", |m| m.as_str());
    let rest = &filename[leading_letters.len()..];

    let number_after_prefix = DIGIT_RUN_RE
        .find(rest)
        .map(|m| DigitRun { digits: m.as_str() });
    let leading_zero_count = number_after_prefix
        .and_then(|run| LEADING_ZEROS_RE.find(run.digits))
        .map_or(0, |m| m.len());

    let classified = ClassifiedFilename {
        leading_letters,
        number_after_prefix,
        leading_zero_count,
    };
    tracing::trace!(
        filename,
        ?classified,
        value = ?number_after_prefix.and_then(|run| run.value())
    );
    classified
}
