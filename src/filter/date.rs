//! Date range filter
//!
//! Accepted expressions:
//! - `YYYY-MM-DD`: that whole local calendar day, `[midnight, next midnight)`
//! - `<N<unit>`: younger than N units (`min_date = now - N units`)
//! - `>N<unit>`: older than N units (`max_date = now - N units`)
//!
//! Units are `h`, `d`, `w`, `m` (30 days) and `y` (365 days).

use crate::error::{DjiError, DjiResult};
use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::{Bound, RangeBounds};

static AGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<op>[<>])(?P<count>\d+)(?P<unit>[A-Za-z]+)$").expect("age pattern is valid")
});
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern is valid"));

/// Hours per relative-age unit
const AGE_UNIT_HOURS: &[(&str, i64)] = &[
    ("h", 1),
    ("d", 24),
    ("w", 7 * 24),
    ("m", 30 * 24),
    ("y", 365 * 24),
];

/// Creation-time interval; at least one bound is always set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFilter {
    lower: Bound<DateTime<Local>>,
    upper: Bound<DateTime<Local>>,
}

impl DateFilter {
    /// Parse an expression relative to the current time
    pub fn parse(expr: &str) -> DjiResult<Self> {
        Self::parse_at(expr, Local::now())
    }

    /// Parse an expression relative to `now`
    pub fn parse_at(expr: &str, now: DateTime<Local>) -> DjiResult<Self> {
        let expr = expr.trim();
        if expr.is_empty() {
            return Err(DjiError::value("date filter must not be empty"));
        }

        if DATE_RE.is_match(expr) {
            return Self::calendar_day(expr);
        }

        let caps = AGE_RE.captures(expr).ok_or_else(|| {
            DjiError::value(format!(
                "invalid date filter: {} (expected YYYY-MM-DD, <N[hdwmy] or >N[hdwmy])",
                expr
            ))
        })?;

        let count: i64 = caps["count"]
            .parse()
            .map_err(|_| DjiError::value(format!("age out of range: {}", expr)))?;
        if count == 0 {
            return Err(DjiError::value(format!("age must be non-zero: {}", expr)));
        }

        let unit = &caps["unit"];
        let hours = AGE_UNIT_HOURS
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, hours)| *hours)
            .ok_or_else(|| DjiError::value(format!("unrecognized age unit '{}' in {}", unit, expr)))?;

        let cutoff = count
            .checked_mul(hours)
            .and_then(Duration::try_hours)
            .and_then(|age| now.checked_sub_signed(age))
            .ok_or_else(|| DjiError::value(format!("age out of range: {}", expr)))?;

        Ok(match &caps["op"] {
            "<" => Self {
                lower: Bound::Included(cutoff),
                upper: Bound::Unbounded,
            },
            _ => Self {
                lower: Bound::Unbounded,
                upper: Bound::Included(cutoff),
            },
        })
    }

    fn calendar_day(expr: &str) -> DjiResult<Self> {
        let date = NaiveDate::parse_from_str(expr, "%Y-%m-%d")
            .map_err(|e| DjiError::value(format!("invalid date {}: {}", expr, e)))?;
        let start = local_midnight(date)
            .ok_or_else(|| DjiError::value(format!("invalid date {}: no local midnight", expr)))?;
        let end = date
            .succ_opt()
            .and_then(local_midnight)
            .ok_or_else(|| DjiError::value(format!("invalid date {}: out of range", expr)))?;

        Ok(Self {
            lower: Bound::Included(start),
            upper: Bound::Excluded(end),
        })
    }

    pub fn min_date(&self) -> Option<DateTime<Local>> {
        match self.lower {
            Bound::Included(t) | Bound::Excluded(t) => Some(t),
            Bound::Unbounded => None,
        }
    }

    pub fn max_date(&self) -> Option<DateTime<Local>> {
        match self.upper {
            Bound::Included(t) | Bound::Excluded(t) => Some(t),
            Bound::Unbounded => None,
        }
    }

    /// Check whether a creation time falls inside the interval
    pub fn matches(&self, created: &DateTime<Local>) -> bool {
        (self.lower, self.upper).contains(created)
    }
}

fn local_midnight(date: NaiveDate) -> Option<DateTime<Local>> {
    Local.from_local_datetime(&date.and_hms_opt(0, 0, 0)?).earliest()
}
