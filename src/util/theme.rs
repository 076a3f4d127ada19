//! Theme initialization and toggle.
//!
//! Reads the stored preference from `localStorage`, falls back to the
//! `prefers-color-scheme` media query, and applies the result as a class on
//! the `<html>` element. Clicking the toggle flips the class and writes the
//! resolved theme back. Requires a browser environment.

use crate::config::ThemeConfig;
#[cfg(feature = "csr")]
use crate::state::theme::{Theme, ThemeHost};

/// The live document root plus `localStorage`.
#[cfg(feature = "csr")]
struct BrowserTheme {
    window: web_sys::Window,
    root: web_sys::Element,
    config: ThemeConfig,
}

#[cfg(feature = "csr")]
impl BrowserTheme {
    fn new(config: ThemeConfig) -> Option<Self> {
        let window = web_sys::window()?;
        let root = window.document()?.document_element()?;
        Some(Self { window, root, config })
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        self.window.local_storage().ok().flatten()
    }
}

#[cfg(feature = "csr")]
impl ThemeHost for BrowserTheme {
    fn stored_theme(&self) -> Option<String> {
        self.storage()?.get_item(self.config.storage_key).ok().flatten()
    }

    fn store_theme(&mut self, theme: Theme) {
        if let Some(storage) = self.storage() {
            let _ = storage.set_item(self.config.storage_key, theme.as_str());
        }
    }

    fn system_prefers_light(&self) -> bool {
        self.window
            .match_media(self.config.prefers_light_query)
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }

    fn has_light_marker(&self) -> bool {
        self.root.class_list().contains(self.config.light_class)
    }

    fn set_light_marker(&mut self, on: bool) {
        let _ = self.root.class_list().toggle_with_force(self.config.light_class, on);
    }
}

/// Apply the startup theme and bind the toggle button if it exists.
pub fn init(config: ThemeConfig) {
    #[cfg(feature = "csr")]
    {
        use crate::state::theme;
        use crate::util::dom;

        let Some(mut host) = BrowserTheme::new(config) else {
            return;
        };
        let initial = theme::initialize(&mut host);
        log::debug!("theme resolved to {}", initial.as_str());

        let Some(toggle) = dom::element_by_id(config.toggle_id) else {
            return;
        };
        dom::listen(&toggle, "click", move |_| {
            theme::toggle(&mut host);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }
}
