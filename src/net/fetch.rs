//! JSON fetch helpers for the site's data files.
//!
//! Browser build (`csr`): real HTTP GETs via `gloo-net`.
//! Host build: every fetch fails with [`FetchError::Unavailable`], which the
//! components treat like any other failure.
//!
//! ERROR HANDLING
//! ==============
//! [`fetch_json`] reports why a load failed. [`load_or_empty`] is the policy
//! every list applies at its boundary: a document that cannot be loaded or
//! is not an array yields no records, and a record that does not fit the
//! schema is skipped. Both are logged as warnings, never retried, and never
//! surface in the page.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use serde::de::DeserializeOwned;

use super::error::FetchError;

/// GET `path` and parse the body as `T`.
///
/// # Errors
///
/// Returns [`FetchError::Status`] for a non-success response,
/// [`FetchError::Transport`] when the request or body read fails, and
/// [`FetchError::Parse`] when the body is not valid JSON for `T`.
pub async fn fetch_json<T: DeserializeOwned>(path: &str) -> Result<T, FetchError> {
    #[cfg(feature = "csr")]
    {
        let transport = |e: gloo_net::Error| FetchError::Transport { path: path.to_owned(), message: e.to_string() };
        let resp = gloo_net::http::Request::get(path).send().await.map_err(transport)?;
        if !resp.ok() {
            return Err(FetchError::Status { path: path.to_owned(), status: resp.status() });
        }
        let body = resp.text().await.map_err(transport)?;
        parse_body(path, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(FetchError::Unavailable { path: path.to_owned() })
    }
}

#[cfg(any(test, feature = "csr"))]
fn parse_body<T: DeserializeOwned>(path: &str, body: &str) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Parse { path: path.to_owned(), message: e.to_string() })
}

/// Unwrap a list load, logging a warning and falling back to no records.
pub fn or_empty<T>(label: &str, result: Result<Vec<T>, FetchError>) -> Vec<T> {
    match result {
        Ok(records) => records,
        Err(e) => {
            leptos::logging::warn!("{label} missing: {e}");
            Vec::new()
        }
    }
}

/// Deserialize each array element on its own. Elements that do not fit `T`
/// are skipped with a warning so one bad record cannot empty the list.
pub fn parse_records<T: DeserializeOwned>(path: &str, values: Vec<serde_json::Value>) -> Vec<T> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                leptos::logging::warn!("skipping record {index} in {path}: {e}");
                None
            }
        })
        .collect()
}

/// Fetch a JSON array of records, degrading to an empty list when the
/// document cannot be loaded and dropping individual malformed records.
pub async fn load_or_empty<T: DeserializeOwned>(label: &str, path: &str) -> Vec<T> {
    let values = or_empty(label, fetch_json::<Vec<serde_json::Value>>(path).await);
    parse_records(path, values)
}
