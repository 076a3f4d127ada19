//! Outbound link row shared by publication entries and project cards.

use leptos::prelude::*;

use crate::state::link::Link;

/// Anchors opening in a new tab, one per present link.
#[component]
pub fn ExternalLinks(links: Vec<Link>) -> impl IntoView {
    links
        .into_iter()
        .map(|link| {
            view! {
                <a href=link.href target="_blank" rel="noopener">
                    {link.label}
                </a>
            }
        })
        .collect::<Vec<_>>()
}
