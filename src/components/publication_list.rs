//! Filterable publication list.
//!
//! SYSTEM CONTEXT
//! ==============
//! The search box, year select, and type checkboxes belong to the page
//! markup. This module reads them into a [`PublicationFilter`] on every
//! change and renders the list into `#pubs-list`.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::external_links::ExternalLinks;
use crate::config::PublicationsConfig;
use crate::state::publications::{PublicationEntry, PublicationFilter, PublicationRecord, publication_entries};

/// Fetch the publications and mount the list. Does nothing when the page has
/// no publication list.
pub fn init(config: PublicationsConfig) {
    #[cfg(feature = "csr")]
    {
        use crate::net::fetch::load_or_empty;
        use crate::util::dom;

        let Some(list) = dom::typed_by_id::<web_sys::HtmlElement>(config.list_id) else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            let records: Vec<PublicationRecord> = load_or_empty("Publications", config.data_path).await;
            log::debug!("loaded {} publications", records.len());
            mount(list, records, config);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }
}

#[cfg(feature = "csr")]
fn mount(list: web_sys::HtmlElement, records: Vec<PublicationRecord>, config: PublicationsConfig) {
    use crate::state::publications::year_options;

    let years = year_options(&records);
    let records: Arc<[PublicationRecord]> = records.into();
    let controls = PublicationControls::find(config, Arc::clone(&records));
    controls.append_years(&years);

    list.set_inner_html("");
    leptos::mount::mount_to(list, move || {
        let filter = RwSignal::new(controls.read());
        controls.on_change(move |next| filter.set(next));
        view! { <PublicationItems records=records filter=filter.read_only()/> }
    })
    .forget();
}

/// Handles to the page's publication filter controls. Any of them may be
/// missing.
#[cfg(feature = "csr")]
#[derive(Clone)]
struct PublicationControls {
    search: Option<web_sys::HtmlInputElement>,
    year: Option<web_sys::HtmlSelectElement>,
    types: Vec<web_sys::HtmlInputElement>,
    records: Arc<[PublicationRecord]>,
}

#[cfg(feature = "csr")]
impl PublicationControls {
    fn find(config: PublicationsConfig, records: Arc<[PublicationRecord]>) -> Self {
        use crate::util::dom;

        Self {
            search: dom::typed_by_id(config.search_id),
            year: dom::typed_by_id(config.year_id),
            types: dom::query_all(config.type_selector),
            records,
        }
    }

    fn read(&self) -> PublicationFilter {
        use crate::state::publications::ALL_YEARS_VALUE;

        let query = self.search.as_ref().map(web_sys::HtmlInputElement::value).unwrap_or_default();
        let year = self
            .year
            .as_ref()
            .map_or_else(|| ALL_YEARS_VALUE.to_owned(), web_sys::HtmlSelectElement::value);
        let checked = (!self.types.is_empty()).then(|| {
            self.types
                .iter()
                .filter(|b| b.checked())
                .map(web_sys::HtmlInputElement::value)
                .collect()
        });
        PublicationFilter::from_page_controls(&query, &year, checked, &self.records)
    }

    /// Append one `<option>` per year after the markup's `all` option.
    fn append_years(&self, years: &[i32]) {
        let Some(select) = &self.year else {
            return;
        };
        for year in years {
            let label = year.to_string();
            if let Ok(option) = web_sys::HtmlOptionElement::new_with_text_and_value(&label, &label) {
                let _ = select.append_child(&option);
            }
        }
    }

    /// Call `apply` with a freshly read filter whenever any control changes.
    fn on_change(&self, apply: impl Fn(PublicationFilter) + Clone + 'static) {
        use crate::util::dom;

        let bind = |target: &web_sys::EventTarget, event: &str| {
            let controls = self.clone();
            let apply = apply.clone();
            dom::listen(target, event, move |_| apply(controls.read()));
        };
        if let Some(search) = &self.search {
            bind(AsRef::<web_sys::EventTarget>::as_ref(search), "input");
        }
        if let Some(year) = &self.year {
            bind(AsRef::<web_sys::EventTarget>::as_ref(year), "change");
        }
        for checkbox in &self.types {
            bind(AsRef::<web_sys::EventTarget>::as_ref(checkbox), "change");
        }
    }
}

/// The rendered list for the current filter, fully replaced on each change.
#[component]
pub fn PublicationItems(records: Arc<[PublicationRecord]>, filter: ReadSignal<PublicationFilter>) -> impl IntoView {
    move || {
        filter
            .with(|f| publication_entries(&records, f))
            .into_iter()
            .map(|entry| view! { <PublicationItem entry=entry/> })
            .collect::<Vec<_>>()
    }
}

#[component]
fn PublicationItem(entry: PublicationEntry) -> impl IntoView {
    view! {
        <li>
            <span class="pub-title">{entry.title}</span>
            <span class="pub-meta">{entry.meta}</span>
            <span class="pub-links">
                <ExternalLinks links=entry.links/>
            </span>
        </li>
    }
}
