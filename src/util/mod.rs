//! Browser glue for the page-level enhancements.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each `init` binds one behaviour to elements owned by the page markup. A
//! missing element means the feature is not on this page and the `init`
//! returns without doing anything. Host builds compile every `init` to a
//! no-op.

#[cfg(feature = "csr")]
pub mod dom;
pub mod footer;
pub mod nav;
pub mod reveal;
pub mod theme;
