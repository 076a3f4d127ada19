//! Site configuration: which DOM anchors and data files each enhancement
//! binds to.
//!
//! DESIGN
//! ======
//! Every field is a `&'static str` (or a plain number) so the whole config is
//! `Copy` and can be moved into event-listener closures without cloning.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts;

/// Top-level configuration handed to [`crate::app::run`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SiteConfig {
    pub theme: ThemeConfig,
    pub nav: NavConfig,
    pub reveal: RevealConfig,
    pub footer_year_id: &'static str,
    pub publications: PublicationsConfig,
    pub projects: ProjectsConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme: ThemeConfig::default(),
            nav: NavConfig::default(),
            reveal: RevealConfig::default(),
            footer_year_id: consts::FOOTER_YEAR_ID,
            publications: PublicationsConfig::default(),
            projects: ProjectsConfig::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeConfig {
    pub storage_key: &'static str,
    pub toggle_id: &'static str,
    pub light_class: &'static str,
    pub prefers_light_query: &'static str,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: consts::THEME_STORAGE_KEY,
            toggle_id: consts::THEME_TOGGLE_ID,
            light_class: consts::LIGHT_CLASS,
            prefers_light_query: consts::PREFERS_LIGHT_QUERY,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavConfig {
    pub toggle_id: &'static str,
    pub list_id: &'static str,
    pub open_class: &'static str,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            toggle_id: consts::NAV_TOGGLE_ID,
            list_id: consts::NAV_LIST_ID,
            open_class: consts::NAV_OPEN_CLASS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    pub selector: &'static str,
    pub visible_class: &'static str,
    /// Intersection ratio in `0.0..=1.0`.
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: consts::REVEAL_SELECTOR,
            visible_class: consts::VISIBLE_CLASS,
            threshold: consts::REVEAL_THRESHOLD,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicationsConfig {
    pub data_path: &'static str,
    pub list_id: &'static str,
    pub search_id: &'static str,
    pub year_id: &'static str,
    pub type_selector: &'static str,
}

impl Default for PublicationsConfig {
    fn default() -> Self {
        Self {
            data_path: consts::PUBLICATIONS_PATH,
            list_id: consts::PUBS_LIST_ID,
            search_id: consts::PUBS_SEARCH_ID,
            year_id: consts::PUBS_YEAR_ID,
            type_selector: consts::PUBS_TYPE_SELECTOR,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectsConfig {
    pub data_path: &'static str,
    pub grid_id: &'static str,
    pub tags_id: &'static str,
    pub search_id: &'static str,
    pub placeholder_thumbnail: &'static str,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            data_path: consts::PROJECTS_PATH,
            grid_id: consts::PROJECTS_GRID_ID,
            tags_id: consts::PROJECTS_TAGS_ID,
            search_id: consts::PROJECTS_SEARCH_ID,
            placeholder_thumbnail: consts::PLACEHOLDER_THUMBNAIL,
        }
    }
}
