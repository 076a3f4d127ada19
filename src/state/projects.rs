//! Project records, the single-select tag filter, and gallery card models.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use std::collections::BTreeSet;

use super::haystack_contains;
use super::link::{Link, present_links};

/// Chip label of the sentinel that disables the tag facet.
pub const ALL_TAGS_LABEL: &str = "All";

/// One entry of `data/projects.json`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProjectRecord {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub paper: Option<String>,
}

impl ProjectRecord {
    pub fn matches(&self, filter: &ProjectFilter) -> bool {
        if !filter.tag.matches(&self.tags) {
            return false;
        }
        let tags = self.tags.join(" ");
        haystack_contains([self.title.as_str(), self.description.as_str(), tags.as_str()], &filter.query)
    }

    pub fn links(&self) -> Vec<Link> {
        present_links([
            ("Demo", self.demo.as_deref()),
            ("Code", self.code.as_deref()),
            ("Paper", self.paper.as_deref()),
        ])
    }
}

/// The active tag chip.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_TAGS_LABEL,
            Self::Tag(tag) => tag,
        }
    }

    pub fn matches(&self, tags: &[String]) -> bool {
        match self {
            Self::All => true,
            Self::Tag(active) => tags.iter().any(|t| t == active),
        }
    }
}

/// Filter state for the project gallery.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub query: String,
    pub tag: TagFilter,
}

/// Chip options: the `All` sentinel followed by every distinct tag, ascending.
pub fn tag_options(records: &[ProjectRecord]) -> Vec<TagFilter> {
    let tags: BTreeSet<&str> = records.iter().flat_map(|p| p.tags.iter().map(String::as_str)).collect();
    std::iter::once(TagFilter::All)
        .chain(tags.into_iter().map(|t| TagFilter::Tag(t.to_owned())))
        .collect()
}

/// Records passing `filter`, in their original order.
pub fn filter_projects<'a>(records: &'a [ProjectRecord], filter: &ProjectFilter) -> Vec<&'a ProjectRecord> {
    records.iter().filter(|p| p.matches(filter)).collect()
}

/// A rendered gallery card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    /// Inline `style` value painting the thumbnail behind an accent gradient.
    pub thumb_style: String,
    pub links: Vec<Link>,
}

impl ProjectCard {
    pub fn new(p: &ProjectRecord, placeholder_thumbnail: &str) -> Self {
        let thumbnail = p
            .thumbnail
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(placeholder_thumbnail);
        Self {
            title: p.title.clone(),
            description: p.description.clone(),
            tags: p.tags.clone(),
            thumb_style: thumb_style(thumbnail),
            links: p.links(),
        }
    }
}

/// The full grid contents for `filter`.
pub fn project_cards(records: &[ProjectRecord], filter: &ProjectFilter, placeholder_thumbnail: &str) -> Vec<ProjectCard> {
    filter_projects(records, filter)
        .into_iter()
        .map(|p| ProjectCard::new(p, placeholder_thumbnail))
        .collect()
}

fn thumb_style(url: &str) -> String {
    format!(
        "background-image: linear-gradient(135deg, var(--accent), transparent), url('{}')",
        escape_css_string(url)
    )
}

/// Escape `raw` for use inside a single-quoted CSS string.
fn escape_css_string(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\a "),
            '\r' => out.push_str("\\d "),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out
}
