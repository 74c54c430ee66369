//! Core data types for the collaboration engine
//!
//! `Record` is what the input layer produces; everything else is built by the
//! engine from a fresh slice of records on every run.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::consts::ONGOING;
use crate::error::{DateField, EngineError};
use crate::utils::DateParser;

/// One assignment row as read from the input (dates still unparsed)
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Record {
    /// 1-based data row in the input, blank rows included
    pub(crate) row: usize,
    pub(crate) employee_id: String,
    pub(crate) project_id: String,
    pub(crate) date_from: String,
    /// `None`, empty, or `null` (any case) means the assignment is ongoing
    pub(crate) date_to: Option<String>,
}

impl Record {
    #[cfg(test)]
    pub(crate) fn new(
        employee_id: impl Into<String>,
        project_id: impl Into<String>,
        date_from: impl Into<String>,
        date_to: Option<&str>,
    ) -> Self {
        Self {
            row: 0,
            employee_id: employee_id.into(),
            project_id: project_id.into(),
            date_from: date_from.into(),
            date_to: date_to.map(str::to_string),
        }
    }

    pub(crate) fn is_ongoing(&self) -> bool {
        match self.date_to.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(s) => s.eq_ignore_ascii_case(ONGOING),
        }
    }

    /// Parse both dates; errors carry the record's input row
    pub(crate) fn resolve(&self, parser: &DateParser) -> Result<Assignment, EngineError> {
        let start = parser
            .parse(&self.date_from)
            .ok_or_else(|| self.malformed(DateField::From, &self.date_from))?;

        let end = if self.is_ongoing() {
            None
        } else {
            let raw = self.date_to.as_deref().unwrap_or_default();
            Some(
                parser
                    .parse(raw)
                    .ok_or_else(|| self.malformed(DateField::To, raw))?,
            )
        };

        Ok(Assignment {
            employee_id: self.employee_id.clone(),
            project_id: self.project_id.clone(),
            start,
            end,
        })
    }

    fn malformed(&self, field: DateField, value: &str) -> EngineError {
        EngineError::MalformedDate {
            row: self.row,
            employee_id: self.employee_id.clone(),
            project_id: self.project_id.clone(),
            field,
            value: value.to_string(),
        }
    }
}

/// A record with parsed dates
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Assignment {
    pub(crate) employee_id: String,
    pub(crate) project_id: String,
    pub(crate) start: NaiveDate,
    /// `None` while the assignment is ongoing
    pub(crate) end: Option<NaiveDate>,
}

impl Assignment {
    pub(crate) fn effective_end(&self, today: NaiveDate) -> NaiveDate {
        self.end.unwrap_or(today)
    }
}

/// Unordered employee pair; the smaller identifier is always stored first
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub(crate) struct PairKey {
    first: String,
    second: String,
}

impl PairKey {
    /// Returns `None` for a self-pair
    pub(crate) fn new(a: &str, b: &str) -> Option<Self> {
        if a == b {
            return None;
        }
        let (first, second) = if a < b { (a, b) } else { (b, a) };
        Some(Self {
            first: first.to_string(),
            second: second.to_string(),
        })
    }

    pub(crate) fn first(&self) -> &str {
        &self.first
    }

    pub(crate) fn second(&self) -> &str {
        &self.second
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}

/// Overlap days a pair accumulated on one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct CollaborationEntry {
    pub(crate) project: String,
    pub(crate) days: i64,
}

/// All projects shared by one pair, in first-seen order
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PairCollaboration {
    pub(crate) pair: PairKey,
    pub(crate) entries: Vec<CollaborationEntry>,
}

impl PairCollaboration {
    pub(crate) fn total_days(&self) -> i64 {
        self.entries.iter().map(|e| e.days).sum()
    }
}

/// Frozen pair -> entries mapping, iterated in pair insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CollaborationMap {
    pairs: Vec<PairCollaboration>,
}

impl CollaborationMap {
    pub(super) fn from_pairs(pairs: Vec<PairCollaboration>) -> Self {
        Self { pairs }
    }

    pub(crate) fn len(&self) -> usize {
        self.pairs.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &PairCollaboration> {
        self.pairs.iter()
    }

    #[cfg(test)]
    pub(crate) fn get(&self, pair: &PairKey) -> Option<&[CollaborationEntry]> {
        self.pairs
            .iter()
            .find(|p| &p.pair == pair)
            .map(|p| p.entries.as_slice())
    }

    /// Pairs by descending total; equal totals keep insertion order
    pub(crate) fn ranked(&self) -> Vec<&PairCollaboration> {
        let mut ranked: Vec<_> = self.pairs.iter().collect();
        ranked.sort_by_key(|p| std::cmp::Reverse(p.total_days()));
        ranked
    }
}

/// The pair with the largest collaboration total
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TopPairResult {
    /// `None` when nobody overlapped
    pub(crate) pair: Option<PairKey>,
    pub(crate) total_days: i64,
    pub(crate) entries: Vec<CollaborationEntry>,
}

impl TopPairResult {
    pub(crate) fn is_empty(&self) -> bool {
        self.pair.is_none()
    }
}

/// Counters reported alongside a result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct RunStats {
    pub(crate) records: usize,
    pub(crate) projects: usize,
    pub(crate) pairs_evaluated: usize,
}

/// Everything one engine run produces
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Collaboration {
    pub(crate) map: CollaborationMap,
    pub(crate) top: TopPairResult,
    pub(crate) stats: RunStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    // --- Record ---

    #[test]
    fn record_ongoing_sentinels() {
        assert!(Record::new("1", "P", "2023-01-01", None).is_ongoing());
        assert!(Record::new("1", "P", "2023-01-01", Some("")).is_ongoing());
        assert!(Record::new("1", "P", "2023-01-01", Some("  ")).is_ongoing());
        assert!(Record::new("1", "P", "2023-01-01", Some("null")).is_ongoing());
        assert!(Record::new("1", "P", "2023-01-01", Some("NULL")).is_ongoing());
        assert!(Record::new("1", "P", "2023-01-01", Some("Null")).is_ongoing());
        assert!(!Record::new("1", "P", "2023-01-01", Some("2023-02-01")).is_ongoing());
    }

    #[test]
    fn record_resolve_parses_dates() {
        let parser = DateParser::default();
        let a = Record::new("7", "P1", "2023-01-01", Some("2023-01-10"))
            .resolve(&parser)
            .unwrap();
        assert_eq!(a.start, d(2023, 1, 1));
        assert_eq!(a.end, Some(d(2023, 1, 10)));
        assert_eq!(a.employee_id, "7");
        assert_eq!(a.project_id, "P1");
    }

    #[test]
    fn record_resolve_ongoing_has_no_end() {
        let parser = DateParser::default();
        let a = Record::new("7", "P1", "2023-01-01", Some("NULL"))
            .resolve(&parser)
            .unwrap();
        assert_eq!(a.end, None);
        assert_eq!(a.effective_end(d(2023, 3, 1)), d(2023, 3, 1));
    }

    #[test]
    fn record_resolve_bad_start_is_error() {
        let parser = DateParser::default();
        let record = Record {
            row: 4,
            ..Record::new("7", "P1", "yesterday", None)
        };
        let err = record.resolve(&parser).unwrap_err();
        let EngineError::MalformedDate { row, field, value, .. } = err;
        assert_eq!(row, 4);
        assert_eq!(field, DateField::From);
        assert_eq!(value, "yesterday");
    }

    #[test]
    fn record_resolve_bad_end_is_error() {
        let parser = DateParser::default();
        let err = Record::new("7", "P1", "2023-01-01", Some("2023-13-45"))
            .resolve(&parser)
            .unwrap_err();
        let EngineError::MalformedDate { field, value, .. } = err;
        assert_eq!(field, DateField::To);
        assert_eq!(value, "2023-13-45");
    }

    // --- PairKey ---

    #[test]
    fn pair_key_is_order_independent() {
        assert_eq!(PairKey::new("143", "218"), PairKey::new("218", "143"));
        let key = PairKey::new("b", "a").unwrap();
        assert_eq!(key.first(), "a");
        assert_eq!(key.second(), "b");
        assert_eq!(key.to_string(), "a-b");
    }

    #[test]
    fn pair_key_rejects_self_pair() {
        assert!(PairKey::new("42", "42").is_none());
    }

    #[test]
    fn pair_key_with_dashes_stays_structural() {
        // "a-b" + "c" and "a" + "b-c" render alike but are different pairs
        let left = PairKey::new("a-b", "c").unwrap();
        let right = PairKey::new("a", "b-c").unwrap();
        assert_eq!(left.to_string(), right.to_string());
        assert_ne!(left, right);
    }

    // --- CollaborationMap ---

    fn entry(project: &str, days: i64) -> CollaborationEntry {
        CollaborationEntry {
            project: project.to_string(),
            days,
        }
    }

    fn map_of(pairs: Vec<PairCollaboration>) -> CollaborationMap {
        CollaborationMap::from_pairs(pairs)
    }

    #[test]
    fn collaboration_map_get_and_ranked() {
        let ab = PairKey::new("a", "b").unwrap();
        let ac = PairKey::new("a", "c").unwrap();
        let bc = PairKey::new("b", "c").unwrap();
        let map = map_of(vec![
            PairCollaboration {
                pair: ab.clone(),
                entries: vec![entry("P1", 3)],
            },
            PairCollaboration {
                pair: ac.clone(),
                entries: vec![entry("P1", 4), entry("P2", 6)],
            },
            PairCollaboration {
                pair: bc.clone(),
                entries: vec![entry("P2", 3)],
            },
        ]);

        assert_eq!(map.len(), 3);
        assert_eq!(map.get(&ac).unwrap().len(), 2);
        assert!(map.get(&PairKey::new("x", "y").unwrap()).is_none());

        let ranked: Vec<_> = map.ranked().into_iter().map(|p| p.pair.clone()).collect();
        assert_eq!(ranked, vec![ac, ab, bc]);
    }

    #[test]
    fn pair_collaboration_total_sums_entries() {
        let pc = PairCollaboration {
            pair: PairKey::new("a", "b").unwrap(),
            entries: vec![entry("P1", 10), entry("P2", 3)],
        };
        assert_eq!(pc.total_days(), 13);
    }

    #[test]
    fn top_pair_default_is_empty() {
        let top = TopPairResult::default();
        assert!(top.is_empty());
        assert_eq!(top.total_days, 0);
        assert!(top.entries.is_empty());
    }
}
