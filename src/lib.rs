//! # folio
//!
//! Leptos + WASM enhancement layer for a static personal/academic website.
//!
//! The pages are plain HTML. This crate binds behaviour to them at load
//! time: a persisted light/dark theme, the mobile nav disclosure, one-shot
//! scroll reveals, the footer year, and filterable publication and project
//! lists rendered from `data/*.json`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | WASM start hook and per-page initialisation |
//! | [`config`] | DOM anchors, data paths, and thresholds |
//! | [`state`] | Records, filters, and view models (pure, host-testable) |
//! | [`net`] | JSON data loading and [`net::error::FetchError`] |
//! | [`components`] | Leptos views for the two lists |
//! | [`util`] | `web-sys` glue for theme, nav, reveal, and footer |
//!
//! Browser code is behind the `csr` feature; without it every binding is a
//! no-op and the crate builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod consts;
pub mod net;
pub mod state;
pub mod util;
