//! Default DOM anchors, storage keys, and data paths for the site.
//!
//! These mirror the markup contract of the static pages. Override them
//! through [`crate::config::SiteConfig`] rather than editing call sites.

// =============================================================================
// THEME
// =============================================================================

/// `localStorage` key holding the resolved theme (`"light"` or `"dark"`).
pub const THEME_STORAGE_KEY: &str = "theme";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
/// Class applied to `<html>` when the light theme is active.
pub const LIGHT_CLASS: &str = "light";
pub const PREFERS_LIGHT_QUERY: &str = "(prefers-color-scheme: light)";

// =============================================================================
// NAVIGATION
// =============================================================================

pub const NAV_TOGGLE_ID: &str = "nav-toggle";
pub const NAV_LIST_ID: &str = "nav-list";
pub const NAV_OPEN_CLASS: &str = "open";

// =============================================================================
// REVEAL
// =============================================================================

pub const REVEAL_SELECTOR: &str = ".reveal";
pub const VISIBLE_CLASS: &str = "visible";
/// Fraction of an element that must be in the viewport before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.12;

// =============================================================================
// FOOTER
// =============================================================================

pub const FOOTER_YEAR_ID: &str = "year";

// =============================================================================
// PUBLICATIONS
// =============================================================================

pub const PUBLICATIONS_PATH: &str = "data/publications.json";
pub const PUBS_LIST_ID: &str = "pubs-list";
pub const PUBS_SEARCH_ID: &str = "pubs-search";
pub const PUBS_YEAR_ID: &str = "pubs-year";
pub const PUBS_TYPE_SELECTOR: &str = "input[name=\"type\"]";

// =============================================================================
// PROJECTS
// =============================================================================

pub const PROJECTS_PATH: &str = "data/projects.json";
pub const PROJECTS_GRID_ID: &str = "projects-grid";
pub const PROJECTS_TAGS_ID: &str = "projects-tags";
pub const PROJECTS_SEARCH_ID: &str = "projects-search";
pub const PLACEHOLDER_THUMBNAIL: &str = "assets/placeholder.svg";
