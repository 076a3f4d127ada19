//! Leptos views for the data-backed lists.
//!
//! DESIGN
//! ======
//! Each list mounts into a container the page already provides. Views are
//! reactive closures over a filter signal, so any filter change re-renders
//! the whole list from the pure view models in [`crate::state`]. Record text
//! is inserted as text nodes and attributes, never as raw markup.

pub mod external_links;
pub mod project_gallery;
pub mod publication_list;
