//! Declarative clip selection by creation date or ordinal index

pub mod date;
pub mod index;

pub use date::DateFilter;
pub use index::IndexFilter;

use crate::domain::model::FileEntry;
use crate::error::{DjiError, DjiResult};
use chrono::{DateTime, Local};

/// The filter active for one operation. Date and index filters are
/// mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Dates(DateFilter),
    Indices(IndexFilter),
}

impl Selection {
    /// Build a selection from optional user expressions
    pub fn from_exprs(date: Option<&str>, index: Option<&str>) -> DjiResult<Self> {
        Self::from_exprs_at(date, index, Local::now())
    }

    /// Build a selection, resolving relative ages against `now`
    pub fn from_exprs_at(
        date: Option<&str>,
        index: Option<&str>,
        now: DateTime<Local>,
    ) -> DjiResult<Self> {
        match (date, index) {
            (Some(_), Some(_)) => Err(DjiError::usage(
                "a date filter and an index filter cannot be combined",
            )),
            (Some(date), None) => Ok(Selection::Dates(DateFilter::parse_at(date, now)?)),
            (None, Some(index)) => Ok(Selection::Indices(IndexFilter::parse(index)?)),
            (None, None) => Ok(Selection::All),
        }
    }

    /// Date filter to push down into the inventory scan
    pub fn date_filter(&self) -> Option<&DateFilter> {
        match self {
            Selection::Dates(filter) => Some(filter),
            _ => None,
        }
    }

    pub fn matches(&self, entry: &FileEntry) -> bool {
        match self {
            Selection::All => true,
            Selection::Dates(filter) => filter.matches(&entry.created),
            Selection::Indices(filter) => filter.matches(entry.index),
        }
    }

    /// Keep only matching entries, preserving order
    pub fn apply(&self, entries: Vec<FileEntry>) -> Vec<FileEntry> {
        match self {
            Selection::All => entries,
            _ => entries.into_iter().filter(|entry| self.matches(entry)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    fn entry(index: Option<u64>, age_hours: i64) -> FileEntry {
        FileEntry {
            base_name: format!("DJI_{:04}", index.unwrap_or(0)),
            extension: ".MP4".to_string(),
            created: now() - Duration::hours(age_hours),
            size_bytes: 0,
            index,
            proxy_file: None,
            subtitle_file: None,
        }
    }

    #[test]
    fn test_both_filters_is_usage_error() {
        let err = Selection::from_exprs_at(Some("<1d"), Some("1-3"), now()).unwrap_err();
        assert!(matches!(err, DjiError::Usage { .. }));
    }

    #[test]
    fn test_both_filters_rejected_even_when_malformed() {
        let err = Selection::from_exprs_at(Some("bogus"), Some("bogus"), now()).unwrap_err();
        assert!(matches!(err, DjiError::Usage { .. }));
    }

    #[test]
    fn test_no_filter_selects_all() {
        let selection = Selection::from_exprs_at(None, None, now()).unwrap();
        assert_eq!(selection, Selection::All);
        assert_eq!(selection.apply(vec![entry(None, 1), entry(Some(2), 1)]).len(), 2);
    }

    #[test]
    fn test_index_selection() {
        let selection = Selection::from_exprs_at(None, Some("2-3"), now()).unwrap();
        assert!(selection.date_filter().is_none());
        let kept = selection.apply(vec![entry(Some(1), 0), entry(Some(2), 0), entry(None, 0), entry(Some(3), 0)]);
        let indices: Vec<Option<u64>> = kept.iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![Some(2), Some(3)]);
    }

    #[test]
    fn test_date_selection() {
        let selection = Selection::from_exprs_at(Some("<1d"), None, now()).unwrap();
        assert!(selection.date_filter().is_some());
        assert!(selection.matches(&entry(Some(1), 2)));
        assert!(!selection.matches(&entry(Some(1), 72)));
    }

    #[test]
    fn test_invalid_expression_propagates_value_error() {
        assert!(matches!(
            Selection::from_exprs_at(None, Some("4-2"), now()),
            Err(DjiError::Value { .. })
        ));
        assert!(matches!(
            Selection::from_exprs_at(Some("<0d"), None, now()),
            Err(DjiError::Value { .. })
        ));
    }
}
