//! Loading the site's JSON data files.

pub mod error;
pub mod fetch;
