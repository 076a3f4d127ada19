//! Publication records, the publication filter, and the list view model.
//!
//! The filter is a conjunction of three facets: year (or all years), type
//! membership in the checked set, and a case-insensitive substring match of
//! the query against title, venue, and keywords.

#[cfg(test)]
#[path = "publications_test.rs"]
mod publications_test;

use std::collections::BTreeSet;

use super::haystack_contains;
use super::link::{Link, present_links};

/// `<option>` value of the year select that disables the year facet.
pub const ALL_YEARS_VALUE: &str = "all";

/// One entry of `data/publications.json`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PublicationRecord {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub authors: Vec<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub venue: String,
    pub year: i32,
    /// Empty when the record has no type; such records never pass the type
    /// facet.
    #[serde(rename = "type", default, deserialize_with = "super::null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub doi: Option<String>,
    #[serde(default)]
    pub pdf: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

impl PublicationRecord {
    /// Whether this record passes every facet of `filter`.
    pub fn matches(&self, filter: &PublicationFilter) -> bool {
        if !filter.year.matches(self.year) {
            return false;
        }
        if !filter.types.contains(&self.kind) {
            return false;
        }
        let keywords = self.keywords.join(" ");
        haystack_contains([self.title.as_str(), self.venue.as_str(), keywords.as_str()], &filter.query)
    }

    pub fn links(&self) -> Vec<Link> {
        present_links([
            ("DOI", self.doi.as_deref()),
            ("PDF", self.pdf.as_deref()),
            ("Code", self.code.as_deref()),
        ])
    }
}

/// Year facet of the publication filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum YearFilter {
    #[default]
    All,
    Year(i32),
}

impl YearFilter {
    /// Parse a year `<select>` value. Anything that is not a year, including
    /// the `all` sentinel, disables the facet.
    pub fn from_value(value: &str) -> Self {
        value.trim().parse().map_or(Self::All, Self::Year)
    }

    pub fn matches(self, year: i32) -> bool {
        match self {
            Self::All => true,
            Self::Year(selected) => selected == year,
        }
    }
}

/// Filter state for the publication list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PublicationFilter {
    pub query: String,
    pub year: YearFilter,
    /// Checked publication types. An empty set hides every record.
    pub types: BTreeSet<String>,
}

impl PublicationFilter {
    /// Build the filter from raw control values: search text, year select
    /// value, and the values of the checked type boxes.
    pub fn from_controls(query: &str, year_value: &str, checked_types: impl IntoIterator<Item = String>) -> Self {
        Self {
            query: query.to_owned(),
            year: YearFilter::from_value(year_value),
            types: checked_types.into_iter().collect(),
        }
    }

    /// Like [`Self::from_controls`], for a page that may have no type
    /// checkboxes at all. `None` means no checkboxes exist, in which case every
    /// type present in `records` is active.
    pub fn from_page_controls(
        query: &str,
        year_value: &str,
        checked_types: Option<Vec<String>>,
        records: &[PublicationRecord],
    ) -> Self {
        match checked_types {
            Some(checked) => Self::from_controls(query, year_value, checked),
            None => Self::from_controls(query, year_value, kind_options(records)),
        }
    }
}

/// Distinct years present in `records`, newest first.
pub fn year_options(records: &[PublicationRecord]) -> Vec<i32> {
    let years: BTreeSet<i32> = records.iter().map(|p| p.year).collect();
    years.into_iter().rev().collect()
}

/// Distinct publication types present in `records`. Untyped records
/// contribute nothing.
pub fn kind_options(records: &[PublicationRecord]) -> BTreeSet<String> {
    records
        .iter()
        .filter(|p| !p.kind.is_empty())
        .map(|p| p.kind.clone())
        .collect()
}

/// Records passing `filter`, in their original order.
pub fn filter_publications<'a>(records: &'a [PublicationRecord], filter: &PublicationFilter) -> Vec<&'a PublicationRecord> {
    records.iter().filter(|p| p.matches(filter)).collect()
}

/// A rendered row of the publication list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicationEntry {
    pub title: String,
    pub meta: String,
    pub links: Vec<Link>,
}

impl From<&PublicationRecord> for PublicationEntry {
    fn from(p: &PublicationRecord) -> Self {
        let authors = p.authors.join(", ");
        Self {
            title: p.title.clone(),
            meta: format!(" \u{2014} {authors} \u{2022} {} \u{2022} {} \u{2022} {}", p.venue, p.year, p.kind),
            links: p.links(),
        }
    }
}

/// The full list contents for `filter`. Rendering replaces the previous list
/// with exactly these entries.
pub fn publication_entries(records: &[PublicationRecord], filter: &PublicationFilter) -> Vec<PublicationEntry> {
    filter_publications(records, filter)
        .into_iter()
        .map(PublicationEntry::from)
        .collect()
}
