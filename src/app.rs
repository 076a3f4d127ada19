//! Page start-up: binds every enhancement to the current document.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use crate::components::{project_gallery, publication_list};
use crate::config::SiteConfig;
use crate::util::{footer, nav, reveal, theme};

/// WASM entry point, run once when the module is instantiated.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    run(SiteConfig::default());
}

/// Initialise each enhancement independently. A component whose anchors are
/// missing from the page is skipped without affecting the others.
pub fn run(config: SiteConfig) {
    theme::init(config.theme);
    nav::init(config.nav);
    footer::init(config.footer_year_id);
    reveal::init(config.reveal);
    publication_list::init(config.publications);
    project_gallery::init(config.projects);
}
