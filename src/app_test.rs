#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn run_is_noop_outside_browser() {
    run(SiteConfig::default());
}

#[test]
fn run_accepts_custom_anchors() {
    let mut config = SiteConfig::default();
    config.publications.list_id = "papers";
    config.projects.data_path = "static/projects.json";
    run(config);
}
