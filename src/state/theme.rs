//! Resolved light/dark theme and the toggle rules over a [`ThemeHost`].
//!
//! TRADE-OFFS
//! ==========
//! A missing storage entry or media query is "no preference", never an
//! error, so hosts report plain `Option`/`bool` values.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// The single active colour mode after reconciling stored and system
/// preferences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// A stored value wins over the system signal; any stored value other
    /// than `"light"` means dark. An empty stored value counts as none.
    pub fn resolve(stored: Option<&str>, system_prefers_light: bool) -> Self {
        let is_light = stored
            .filter(|value| !value.is_empty())
            .map_or(system_prefers_light, |value| value == "light");
        Self::from_light_marker(is_light)
    }

    pub fn from_light_marker(is_light: bool) -> Self {
        if is_light { Self::Light } else { Self::Dark }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_light(self) -> bool {
        self == Self::Light
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Where the theme is read from and written to: a persisted preference, the
/// system colour-scheme signal, and the marker on the document root.
pub trait ThemeHost {
    fn stored_theme(&self) -> Option<String>;
    fn store_theme(&mut self, theme: Theme);
    fn system_prefers_light(&self) -> bool;
    fn has_light_marker(&self) -> bool;
    fn set_light_marker(&mut self, on: bool);
}

/// Resolve the startup theme and apply it to the root marker. Nothing is
/// persisted until the user toggles.
pub fn initialize(host: &mut impl ThemeHost) -> Theme {
    let theme = Theme::resolve(host.stored_theme().as_deref(), host.system_prefers_light());
    host.set_light_marker(theme.is_light());
    theme
}

/// Flip the root marker and persist the resulting theme.
pub fn toggle(host: &mut impl ThemeHost) -> Theme {
    let next = Theme::from_light_marker(host.has_light_marker()).toggled();
    host.set_light_marker(next.is_light());
    host.store_theme(next);
    next
}
