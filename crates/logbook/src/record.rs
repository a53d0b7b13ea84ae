//! Core types for log persistence and querying.
//!
//! This module provides:
//! - [`LogRecord`] — The unit of persistence
//! - [`QueryFilter`] — Caller-supplied query parameters, all optional
//! - [`Predicate`] — The fully-resolved store-level selection condition
//! - [`SortOrder`] — Result ordering by timestamp

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Default severity label applied when a query names no level.
pub const DEFAULT_LEVEL: &str = "info";

/// Default maximum number of records a query returns.
pub const DEFAULT_SIZE: usize = 10;

/// Default lookback window, in days, when a query names no lower bound.
pub const DEFAULT_LOOKBACK_DAYS: i64 = 7;

/// A single persisted log record.
///
/// Records are immutable once persisted: there is no update or delete
/// operation anywhere in this crate. The severity label is free-form — the
/// store enforces no enumeration, so `"info"`, `"error"`, or any other string
/// a caller chooses is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Free-form severity label, e.g. `"info"` or `"error"`.
    pub level: String,
    /// Arbitrary text payload.
    pub message: String,
    /// When the record was written.
    pub timestamp: DateTime<Utc>,
}

impl LogRecord {
    /// Creates a record with all three fields set.
    #[must_use]
    pub fn new(
        level: impl Into<String>,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            level: level.into(),
            message: message.into(),
            timestamp,
        }
    }
}

/// Result ordering by record timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first.
    #[serde(alias = "asc")]
    Ascending,
    /// Newest first.
    #[default]
    #[serde(alias = "desc")]
    Descending,
}

impl SortOrder {
    /// Sorts records by timestamp in this direction.
    ///
    /// The sort is stable, so records with equal timestamps keep their
    /// store-native relative order.
    pub fn sort(self, records: &mut [LogRecord]) {
        match self {
            Self::Ascending => records.sort_by(|a, b| a.timestamp.cmp(&b.timestamp)),
            Self::Descending => records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
        }
    }
}

/// Caller-supplied query parameters.
///
/// Every field is optional; [`QueryFilter::resolve`] fills in the defaults:
/// `from` = now minus [`DEFAULT_LOOKBACK_DAYS`] days, `until` = now, `level` =
/// [`DEFAULT_LEVEL`], `size` = [`DEFAULT_SIZE`], `order` = newest first.
///
/// The level filter is always applied — there is no way to query across all
/// levels. Callers wanting records of another severity must name it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryFilter {
    /// Inclusive lower bound on timestamp.
    #[serde(default)]
    pub from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on timestamp.
    #[serde(default)]
    pub until: Option<DateTime<Utc>>,
    /// Exact-match severity filter.
    #[serde(default)]
    pub level: Option<String>,
    /// Maximum number of records returned.
    #[serde(default)]
    pub size: Option<usize>,
    /// Result ordering.
    #[serde(default)]
    pub order: Option<SortOrder>,
}

impl QueryFilter {
    /// Creates an empty filter; every parameter takes its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the inclusive lower timestamp bound.
    #[must_use]
    pub const fn with_from(mut self, from: DateTime<Utc>) -> Self {
        self.from = Some(from);
        self
    }

    /// Sets the inclusive upper timestamp bound.
    #[must_use]
    pub const fn with_until(mut self, until: DateTime<Utc>) -> Self {
        self.until = Some(until);
        self
    }

    /// Sets the severity filter.
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    /// Sets the maximum result count.
    #[must_use]
    pub const fn with_size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the result ordering.
    #[must_use]
    pub const fn with_order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Applies defaults relative to `now` and produces the store-level query.
    #[must_use]
    pub fn resolve(&self, now: DateTime<Utc>) -> ResolvedQuery {
        ResolvedQuery {
            predicate: Predicate {
                from: self
                    .from
                    .unwrap_or_else(|| now - Duration::days(DEFAULT_LOOKBACK_DAYS)),
                until: self.until.unwrap_or(now),
                level: self
                    .level
                    .clone()
                    .unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
            },
            order: self.order.unwrap_or_default(),
            limit: self.size.unwrap_or(DEFAULT_SIZE),
        }
    }
}

/// A fully-resolved selection condition for the store.
///
/// Matches records with `timestamp ∈ [from, until]` (both bounds inclusive)
/// and `level == predicate.level`. Every backend filters with this same rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    /// Inclusive lower bound on timestamp.
    pub from: DateTime<Utc>,
    /// Inclusive upper bound on timestamp.
    pub until: DateTime<Utc>,
    /// Exact-match severity label.
    pub level: String,
}

impl Predicate {
    /// Checks whether a record satisfies this predicate.
    #[must_use]
    pub fn matches(&self, record: &LogRecord) -> bool {
        record.timestamp >= self.from
            && record.timestamp <= self.until
            && record.level == self.level
    }
}

/// A [`QueryFilter`] with all defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedQuery {
    /// Store-level selection condition.
    pub predicate: Predicate,
    /// Result ordering.
    pub order: SortOrder,
    /// Maximum result count.
    pub limit: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_at(level: &str, offset_secs: i64) -> LogRecord {
        LogRecord::new(level, "message", Utc::now() - Duration::seconds(offset_secs))
    }

    // ===========================================
    // LogRecord Tests
    // ===========================================

    #[test]
    fn record_new_sets_all_fields() {
        let now = Utc::now();
        let record = LogRecord::new("error", "disk full", now);

        assert_eq!(record.level, "error");
        assert_eq!(record.message, "disk full");
        assert_eq!(record.timestamp, now);
    }

    #[test]
    fn record_accepts_empty_strings() {
        let record = LogRecord::new("", "", Utc::now());
        assert!(record.level.is_empty());
        assert!(record.message.is_empty());
    }

    #[test]
    fn record_level_is_free_form() {
        let record = LogRecord::new("catastrophic", "m", Utc::now());
        assert_eq!(record.level, "catastrophic");
    }

    #[test]
    fn record_serialization_roundtrip() {
        let record = LogRecord::new("info", "hello", Utc::now());
        let json = serde_json::to_string(&record).expect("serialize");
        let parsed: LogRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(record, parsed);
    }

    #[test]
    fn record_wire_shape_has_three_fields() {
        let record = LogRecord::new("info", "hello", Utc::now());
        let value = serde_json::to_value(&record).expect("serialize");
        let obj = value.as_object().expect("object");

        assert_eq!(obj.len(), 3);
        assert!(obj.contains_key("level"));
        assert!(obj.contains_key("message"));
        assert!(obj.contains_key("timestamp"));
    }

    // ===========================================
    // QueryFilter Tests
    // ===========================================

    #[test]
    fn filter_resolve_applies_defaults() {
        let now = Utc::now();
        let resolved = QueryFilter::new().resolve(now);

        assert_eq!(resolved.predicate.from, now - Duration::days(7));
        assert_eq!(resolved.predicate.until, now);
        assert_eq!(resolved.predicate.level, "info");
        assert_eq!(resolved.limit, 10);
        assert_eq!(resolved.order, SortOrder::Descending);
    }

    #[test]
    fn filter_resolve_keeps_explicit_values() {
        let now = Utc::now();
        let from = now - Duration::hours(1);
        let filter = QueryFilter::new()
            .with_from(from)
            .with_until(now)
            .with_level("error")
            .with_size(5)
            .with_order(SortOrder::Ascending);

        let resolved = filter.resolve(now);
        assert_eq!(resolved.predicate.from, from);
        assert_eq!(resolved.predicate.until, now);
        assert_eq!(resolved.predicate.level, "error");
        assert_eq!(resolved.limit, 5);
        assert_eq!(resolved.order, SortOrder::Ascending);
    }

    #[test]
    fn filter_deserializes_from_partial_document() {
        let filter: QueryFilter =
            serde_json::from_str(r#"{"level": "error", "size": 3}"#).expect("deserialize");

        assert_eq!(filter.level.as_deref(), Some("error"));
        assert_eq!(filter.size, Some(3));
        assert!(filter.from.is_none());
        assert!(filter.until.is_none());
        assert!(filter.order.is_none());
    }

    #[test]
    fn filter_deserializes_order_aliases() {
        let filter: QueryFilter =
            serde_json::from_str(r#"{"order": "asc"}"#).expect("deserialize");
        assert_eq!(filter.order, Some(SortOrder::Ascending));

        let filter: QueryFilter =
            serde_json::from_str(r#"{"order": "descending"}"#).expect("deserialize");
        assert_eq!(filter.order, Some(SortOrder::Descending));
    }

    #[test]
    fn filter_default_matches_new() {
        assert_eq!(QueryFilter::default(), QueryFilter::new());
    }

    // ===========================================
    // Predicate Tests
    // ===========================================

    #[test]
    fn predicate_bounds_are_inclusive() {
        let now = Utc::now();
        let predicate = Predicate {
            from: now - Duration::seconds(10),
            until: now,
            level: "info".to_string(),
        };

        let at_from = LogRecord::new("info", "m", now - Duration::seconds(10));
        let at_until = LogRecord::new("info", "m", now);
        let before = LogRecord::new("info", "m", now - Duration::seconds(11));
        let after = LogRecord::new("info", "m", now + Duration::seconds(1));

        assert!(predicate.matches(&at_from));
        assert!(predicate.matches(&at_until));
        assert!(!predicate.matches(&before));
        assert!(!predicate.matches(&after));
    }

    #[test]
    fn predicate_level_is_exact_match() {
        let now = Utc::now();
        let predicate = Predicate {
            from: now - Duration::hours(1),
            until: now,
            level: "info".to_string(),
        };

        assert!(predicate.matches(&record_at("info", 10)));
        assert!(!predicate.matches(&record_at("error", 10)));
        assert!(!predicate.matches(&record_at("INFO", 10)));
    }

    #[test]
    fn predicate_point_window_matches_exact_instant_only() {
        let t0 = Utc::now();
        let predicate = Predicate {
            from: t0,
            until: t0,
            level: "info".to_string(),
        };

        assert!(predicate.matches(&LogRecord::new("info", "m", t0)));
        assert!(!predicate.matches(&LogRecord::new("info", "m", t0 + Duration::seconds(1))));
        assert!(!predicate.matches(&LogRecord::new("info", "m", t0 - Duration::seconds(1))));
    }

    // ===========================================
    // SortOrder Tests
    // ===========================================

    #[test]
    fn sort_descending_newest_first() {
        let mut records = vec![record_at("info", 30), record_at("info", 10), record_at("info", 20)];
        SortOrder::Descending.sort(&mut records);

        for pair in records.windows(2) {
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }
    }

    #[test]
    fn sort_ascending_oldest_first() {
        let mut records = vec![record_at("info", 10), record_at("info", 30), record_at("info", 20)];
        SortOrder::Ascending.sort(&mut records);

        for pair in records.windows(2) {
            assert!(pair[0].timestamp <= pair[1].timestamp);
        }
    }

    #[test]
    fn sort_is_stable_for_equal_timestamps() {
        let now = Utc::now();
        let mut records = vec![
            LogRecord::new("info", "first", now),
            LogRecord::new("info", "second", now),
        ];
        SortOrder::Descending.sort(&mut records);

        assert_eq!(records[0].message, "first");
        assert_eq!(records[1].message, "second");
    }

    #[test]
    fn sort_order_default_is_descending() {
        assert_eq!(SortOrder::default(), SortOrder::Descending);
    }
}
