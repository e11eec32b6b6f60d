//! # Display Indexing
//!
//! Documents are identified by a UUID assigned when they are created, and every
//! store operation is keyed by that id. UUIDs are not something anyone wants to
//! type, so listings number their rows (1, 2, 3...) and users refer to documents
//! by those numbers.
//!
//! A display index is always resolved against the *canonical listing*: all
//! documents, unfiltered, in the configured default sort order. Filtered views
//! (`list --search`) show the canonical number of each row, so a number seen in
//! any listing means the same document everywhere.
//!
//! Selectors accepted on the command line:
//!
//! - `3`: a single display index
//! - `2-4`: a range of display indexes (inclusive)
//! - `1f0c9a`: an id prefix (at least 4 hex digits; hyphens allowed, so a full
//!   UUID works too). An all-digit string is always read as an index.
//!
//! Resolution happens once, up front, against a snapshot of the store. After
//! that, commands work on ids only, so removing document 2 cannot shift what
//! "3" meant halfway through a multi-document command.

use crate::model::Document;
use crate::status::StatusReport;
use crate::view::{self, SortKey};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const MIN_ID_PREFIX: usize = 4;
const MAX_RANGE_LEN: usize = 10_000;

/// A user input naming one document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DocumentSelector {
    Index(usize),
    IdPrefix(String),
}

impl fmt::Display for DocumentSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSelector::Index(i) => write!(f, "{}", i),
            DocumentSelector::IdPrefix(p) => write!(f, "{}", p),
        }
    }
}

impl FromStr for DocumentSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<usize>() {
            return Ok(DocumentSelector::Index(n));
        }

        let hex: String = s.chars().filter(|c| *c != '-').collect();
        if hex.len() >= MIN_ID_PREFIX && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Ok(DocumentSelector::IdPrefix(hex.to_ascii_lowercase()));
        }

        Err(format!("Invalid document selector: {}", s))
    }
}

/// Parses `"3"`, `"2-4"` or an id prefix into one or more selectors.
pub fn parse_selector_or_range(s: &str) -> Result<Vec<DocumentSelector>, String> {
    if let Some((start, end)) = s.trim().split_once('-') {
        if let (Ok(start), Ok(end)) = (start.parse::<usize>(), end.parse::<usize>()) {
            if start > end {
                return Err(format!(
                    "Invalid range: start ({}) must be <= end ({})",
                    start, end
                ));
            }
            if end - start >= MAX_RANGE_LEN {
                return Err(format!(
                    "Invalid range: {}-{} spans more than {} documents",
                    start, end, MAX_RANGE_LEN
                ));
            }
            return Ok((start..=end).map(DocumentSelector::Index).collect());
        }
    }
    DocumentSelector::from_str(s).map(|sel| vec![sel])
}

pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<DocumentSelector>, String> {
    let mut selectors = Vec::new();
    for input in inputs {
        selectors.extend(parse_selector_or_range(input.as_ref())?);
    }
    Ok(selectors)
}

/// A document as it appears in a listing: canonical number plus derived status.
#[derive(Debug, Clone)]
pub struct DisplayDocument {
    pub index: usize,
    pub document: Document,
    pub report: StatusReport,
}

/// Numbers every document in canonical order (1-based).
pub fn index_documents(
    documents: &[Document],
    sort_key: SortKey,
    today: NaiveDate,
) -> Vec<DisplayDocument> {
    view::project(documents, "", sort_key)
        .into_iter()
        .enumerate()
        .map(|(i, document)| DisplayDocument {
            index: i + 1,
            report: document.status_on(today),
            document,
        })
        .collect()
}

/// Outcome of resolving one selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(Uuid),
    Missing,
    Ambiguous(usize),
}

/// Resolves a selector against a canonical listing.
pub fn resolve(listing: &[DisplayDocument], selector: &DocumentSelector) -> Resolution {
    match selector {
        DocumentSelector::Index(n) => listing
            .iter()
            .find(|dd| dd.index == *n)
            .map(|dd| Resolution::Found(dd.document.id))
            .unwrap_or(Resolution::Missing),
        DocumentSelector::IdPrefix(prefix) => {
            let hits: Vec<_> = listing
                .iter()
                .filter(|dd| dd.document.id.simple().to_string().starts_with(prefix.as_str()))
                .collect();
            match hits.as_slice() {
                [] => Resolution::Missing,
                [only] => Resolution::Found(only.document.id),
                many => Resolution::Ambiguous(many.len()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocumentDraft;

    fn doc(name: &str, expiration: &str) -> Document {
        Document::new(
            DocumentDraft::new(name, expiration, "10")
                .validate()
                .unwrap(),
        )
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    }

    #[test]
    fn parses_indexes_and_prefixes() {
        assert_eq!("3".parse::<DocumentSelector>(), Ok(DocumentSelector::Index(3)));
        assert_eq!("1234".parse::<DocumentSelector>(), Ok(DocumentSelector::Index(1234)));
        assert_eq!(
            "AbCd12".parse::<DocumentSelector>(),
            Ok(DocumentSelector::IdPrefix("abcd12".into()))
        );
        assert_eq!(
            "67e55044-10b1-426f".parse::<DocumentSelector>(),
            Ok(DocumentSelector::IdPrefix("67e5504410b1426f".into()))
        );
        assert!("abc".parse::<DocumentSelector>().is_err());
        assert!("passport".parse::<DocumentSelector>().is_err());
    }

    #[test]
    fn parses_ranges() {
        assert_eq!(
            parse_selector_or_range("2-4").unwrap(),
            vec![
                DocumentSelector::Index(2),
                DocumentSelector::Index(3),
                DocumentSelector::Index(4)
            ]
        );
        assert!(parse_selector_or_range("4-2").is_err());
        assert_eq!(parse_selector_or_range("1-10000").unwrap().len(), 10_000);
        assert_eq!(
            parse_selectors(&["1", "3-3"]).unwrap(),
            vec![DocumentSelector::Index(1), DocumentSelector::Index(3)]
        );
    }

    #[test]
    fn oversized_ranges_are_rejected() {
        assert!(parse_selector_or_range("1-18446744073709551615").is_err());
        assert!(parse_selector_or_range("1-1000000000").is_err());
        assert!(parse_selector_or_range("1-10001").is_err());
        assert!(parse_selectors(&["2", "5-99999999"]).is_err());
    }

    #[test]
    fn indexes_follow_sort_order() {
        let docs = vec![doc("Later", "2027-01-01"), doc("Sooner", "2026-02-01")];
        let listing = index_documents(&docs, SortKey::ExpirationAsc, today());
        assert_eq!(listing[0].index, 1);
        assert_eq!(listing[0].document.name, "Sooner");
        assert_eq!(listing[1].document.name, "Later");

        let listing = index_documents(&docs, SortKey::NameAsc, today());
        assert_eq!(listing[0].document.name, "Later");
    }

    #[test]
    fn resolves_by_index_and_prefix() {
        let docs = vec![doc("A", "2027-01-01"), doc("B", "2026-02-01")];
        let listing = index_documents(&docs, SortKey::ExpirationAsc, today());

        assert_eq!(
            resolve(&listing, &DocumentSelector::Index(1)),
            Resolution::Found(docs[1].id)
        );
        assert_eq!(
            resolve(&listing, &DocumentSelector::Index(3)),
            Resolution::Missing
        );
        assert_eq!(
            resolve(&listing, &DocumentSelector::Index(0)),
            Resolution::Missing
        );

        let prefix = docs[0].id.simple().to_string()[..12].to_string();
        assert_eq!(
            resolve(&listing, &DocumentSelector::IdPrefix(prefix)),
            Resolution::Found(docs[0].id)
        );
    }

    #[test]
    fn shared_prefix_is_ambiguous() {
        let mut a = doc("A", "2027-01-01");
        let mut b = doc("B", "2026-02-01");
        a.id = Uuid::parse_str("abcd0000-0000-4000-8000-000000000001").unwrap();
        b.id = Uuid::parse_str("abcd0000-0000-4000-8000-000000000002").unwrap();
        let listing = index_documents(&[a, b], SortKey::ExpirationAsc, today());
        assert_eq!(
            resolve(&listing, &DocumentSelector::IdPrefix("abcd".into())),
            Resolution::Ambiguous(2)
        );
    }
}
