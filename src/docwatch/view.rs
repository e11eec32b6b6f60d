//! # View Projection
//!
//! Read-only views over the document sequence: filtering by name and ordering
//! for display. Projections always work on a copy; the store's insertion order
//! is never touched.

use crate::model::Document;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    ExpirationAsc,
    ExpirationDesc,
    NameAsc,
    NameDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::ExpirationAsc,
        SortKey::ExpirationDesc,
        SortKey::NameAsc,
        SortKey::NameDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::ExpirationAsc => "expiration-asc",
            SortKey::ExpirationDesc => "expiration-desc",
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
        }
    }

    /// Primary field in the requested direction, the other field ascending on ties.
    pub fn compare(self, a: &Document, b: &Document) -> Ordering {
        match self {
            SortKey::ExpirationAsc => by_expiration(a, b).then_with(|| by_name(a, b)),
            SortKey::ExpirationDesc => by_expiration(b, a).then_with(|| by_name(a, b)),
            SortKey::NameAsc => by_name(a, b).then_with(|| by_expiration(a, b)),
            SortKey::NameDesc => by_name(b, a).then_with(|| by_expiration(a, b)),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<_> = SortKey::ALL.iter().map(|k| k.as_str()).collect();
                format!("Unknown sort key '{}' (expected one of: {})", s, valid.join(", "))
            })
    }
}

fn by_expiration(a: &Document, b: &Document) -> Ordering {
    a.expiration.cmp(&b.expiration)
}

fn by_name(a: &Document, b: &Document) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

/// Case-insensitive substring match on the name. Blank filter text matches everything.
pub fn matches_filter(document: &Document, filter_text: &str) -> bool {
    let needle = filter_text.trim().to_lowercase();
    needle.is_empty() || document.name.to_lowercase().contains(&needle)
}

/// Filters then sorts a copy of `records`. The sort is stable.
pub fn project(records: &[Document], filter_text: &str, sort_key: SortKey) -> Vec<Document> {
    let mut view: Vec<Document> = records
        .iter()
        .filter(|doc| matches_filter(doc, filter_text))
        .cloned()
        .collect();
    view.sort_by(|a, b| sort_key.compare(a, b));
    view
}

/// Documents that are in `Alert` or `Expired` state on `today`, most urgent first.
pub fn alerts(records: &[Document], today: NaiveDate) -> Vec<Document> {
    let mut urgent: Vec<(i64, Document)> = records
        .iter()
        .filter_map(|doc| {
            let report = doc.status_on(today);
            report
                .status
                .needs_attention()
                .then(|| (report.remaining_days, doc.clone()))
        })
        .collect();
    urgent.sort_by(|(days_a, a), (days_b, b)| days_a.cmp(days_b).then_with(|| by_name(a, b)));
    urgent.into_iter().map(|(_, doc)| doc).collect()
}
