//! Month table and timestamp normalization.
//!
//! Controller timestamps arrive as `"Mon D HH:MM:SS YYYY"` and leave as
//! `"YYYY-MM-DD HH:MM:SS"`.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

/// Three-letter month abbreviation to two-digit month number. Shared,
/// read-only, initialized once; lookup is case-sensitive on the
/// capitalized form the controller emits.
const MONTHS: &[(&str, &str)] = &[
    ("Jan", "01"),
    ("Feb", "02"),
    ("Mar", "03"),
    ("Apr", "04"),
    ("May", "05"),
    ("Jun", "06"),
    ("Jul", "07"),
    ("Aug", "08"),
    ("Sep", "09"),
    ("Oct", "10"),
    ("Nov", "11"),
    ("Dec", "12"),
];

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<month>\w+)\s+(?P<day>\d+)\s+(?P<time>(\d{1,2}:){2}\d{1,2})\s+(?P<year>\d{4})")
        .expect("date regex")
});

/// Convert `"Mon D HH:MM:SS YYYY"` into `"YYYY-MM-DD HH:MM:SS"`.
///
/// Returns `None` when the input does not carry that shape — the record
/// cannot be meaningfully dated, so the caller drops the line. A month
/// name missing from the table is passed through unconverted with a
/// diagnostic: the caller gets a record with a malformed date column
/// rather than losing the line.
pub fn normalize(raw: &str) -> Option<String> {
    let caps = DATE_RE.captures(raw)?;

    let year = caps.name("year")?.as_str();
    let time = caps.name("time")?.as_str();
    let month = caps.name("month")?.as_str();
    let day = caps.name("day")?.as_str();

    let month = match MONTHS.iter().find(|(name, _)| *name == month) {
        Some(&(_, number)) => number,
        None => {
            warn!("month {:?} not in month table, emitting unconverted", month);
            month
        }
    };

    Some(format!("{}-{}-{:0>2} {}", year, month, day, time))
}
