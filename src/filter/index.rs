//! Ordinal index filter: `1-4,7` selects clips 1, 2, 3, 4 and 7

use crate::error::{DjiError, DjiResult};
use std::ops::RangeInclusive;

/// Ordinal indices kept as sorted, disjoint inclusive ranges, so a range
/// like `0-4294967295` costs one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexFilter {
    ranges: Vec<RangeInclusive<u64>>,
}

impl IndexFilter {
    /// Parse a comma-separated list of indices and inclusive `A-B` ranges
    pub fn parse(expr: &str) -> DjiResult<Self> {
        let mut ranges = Vec::new();
        for token in expr.split(',') {
            let token = token.trim();
            let invalid = || DjiError::value(format!("invalid index token: '{}'", token));

            match token.split_once('-') {
                Some((start, end)) => {
                    let start = parse_index(start).ok_or_else(invalid)?;
                    let end = parse_index(end).ok_or_else(invalid)?;
                    if start > end {
                        return Err(DjiError::value(format!(
                            "invalid index range '{}': start is greater than end",
                            token
                        )));
                    }
                    ranges.push(start..=end);
                }
                None => {
                    let index = parse_index(token).ok_or_else(invalid)?;
                    ranges.push(index..=index);
                }
            }
        }

        Ok(Self {
            ranges: merge_ranges(ranges),
        })
    }

    pub fn ranges(&self) -> &[RangeInclusive<u64>] {
        &self.ranges
    }

    /// Number of selected indices
    pub fn len(&self) -> u128 {
        self.ranges
            .iter()
            .map(|range| u128::from(*range.end() - *range.start()) + 1)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn matches(&self, index: Option<u64>) -> bool {
        index.is_some_and(|index| {
            let candidate = self.ranges.partition_point(|range| *range.end() < index);
            self.ranges
                .get(candidate)
                .is_some_and(|range| range.contains(&index))
        })
    }
}

/// Sort by start and fold overlapping or adjacent ranges together
fn merge_ranges(mut ranges: Vec<RangeInclusive<u64>>) -> Vec<RangeInclusive<u64>> {
    ranges.sort_unstable_by_key(|range| (*range.start(), *range.end()));
    let mut merged: Vec<RangeInclusive<u64>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if *range.start() <= last.end().saturating_add(1) => {
                if range.end() > last.end() {
                    *last = *last.start()..=*range.end();
                }
            }
            _ => merged.push(range),
        }
    }
    merged
}

/// Digits only; signs, blanks and nested dashes are rejected
fn parse_index(token: &str) -> Option<u64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
