//! Project gallery with single-select tag chips and free-text search.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page provides the grid, the chip bar, and the search box. Chips and
//! cards are both rendered here from one [`ProjectFilter`] signal.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::external_links::ExternalLinks;
use crate::config::ProjectsConfig;
use crate::state::projects::{ProjectCard, ProjectFilter, ProjectRecord, TagFilter, project_cards};

/// Fetch the projects and mount the gallery. Does nothing unless the grid,
/// chip bar, and search box are all present.
pub fn init(config: ProjectsConfig) {
    #[cfg(feature = "csr")]
    {
        use crate::net::fetch::load_or_empty;
        use crate::util::dom;

        let (Some(grid), Some(tags), Some(search)) = (
            dom::typed_by_id::<web_sys::HtmlElement>(config.grid_id),
            dom::typed_by_id::<web_sys::HtmlElement>(config.tags_id),
            dom::typed_by_id::<web_sys::HtmlInputElement>(config.search_id),
        ) else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            let records: Vec<ProjectRecord> = load_or_empty("Projects", config.data_path).await;
            log::debug!("loaded {} projects", records.len());
            mount(grid, tags, search, records, config);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }
}

#[cfg(feature = "csr")]
fn mount(
    grid: web_sys::HtmlElement,
    tags: web_sys::HtmlElement,
    search: web_sys::HtmlInputElement,
    records: Vec<ProjectRecord>,
    config: ProjectsConfig,
) {
    use crate::state::projects::tag_options;
    use crate::util::dom;

    let options: Arc<[TagFilter]> = tag_options(&records).into();
    let records: Arc<[ProjectRecord]> = records.into();

    grid.set_inner_html("");
    tags.set_inner_html("");
    leptos::mount::mount_to(grid, move || {
        let filter = RwSignal::new(ProjectFilter { query: search.value(), tag: TagFilter::All });

        let input = search.clone();
        dom::listen(&search, "input", move |_| {
            let query = input.value();
            filter.update(|f| f.query = query);
        });

        leptos::mount::mount_to(tags, move || view! { <TagChips options=options filter=filter/> }).forget();

        view! {
            <ProjectCards
                records=records
                filter=filter.read_only()
                placeholder=config.placeholder_thumbnail
            />
        }
    })
    .forget();
}

/// Chip bar: `All` plus one chip per tag. Clicking a chip makes it the only
/// active tag.
#[component]
pub fn TagChips(options: Arc<[TagFilter]>, filter: RwSignal<ProjectFilter>) -> impl IntoView {
    let active = Memo::new(move |_| filter.with(|f| f.tag.clone()));

    move || {
        let current = active.get();
        options
            .iter()
            .cloned()
            .map(|tag| {
                let class = if tag == current { "chip active" } else { "chip" };
                let label = tag.label().to_owned();
                view! {
                    <button class=class on:click=move |_| filter.update(|f| f.tag = tag.clone())>
                        {label}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    }
}

/// The card grid for the current filter, fully replaced on each change.
#[component]
pub fn ProjectCards(
    records: Arc<[ProjectRecord]>,
    filter: ReadSignal<ProjectFilter>,
    placeholder: &'static str,
) -> impl IntoView {
    move || {
        filter
            .with(|f| project_cards(&records, f, placeholder))
            .into_iter()
            .map(|card| view! { <ProjectCardView card=card/> })
            .collect::<Vec<_>>()
    }
}

/// Cards are inserted after the reveal observer has run, so they carry the
/// `visible` class from the start.
#[component]
fn ProjectCardView(card: ProjectCard) -> impl IntoView {
    view! {
        <article class="project-card reveal visible">
            <div class="project-thumb" style=card.thumb_style></div>
            <div class="project-body">
                <h3 class="project-title">{card.title}</h3>
                <p class="project-desc">{card.description}</p>
                <div class="project-tags">
                    {card.tags.into_iter().map(|t| view! { <span>{t}</span> }).collect::<Vec<_>>()}
                </div>
                <div class="project-links">
                    <ExternalLinks links=card.links/>
                </div>
            </div>
        </article>
    }
}
