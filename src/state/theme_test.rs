use super::*;

#[derive(Default)]
struct MemoryHost {
    stored: Option<String>,
    prefers_light: bool,
    light_marker: bool,
}

impl ThemeHost for MemoryHost {
    fn stored_theme(&self) -> Option<String> {
        self.stored.clone()
    }

    fn store_theme(&mut self, theme: Theme) {
        self.stored = Some(theme.as_str().to_owned());
    }

    fn system_prefers_light(&self) -> bool {
        self.prefers_light
    }

    fn has_light_marker(&self) -> bool {
        self.light_marker
    }

    fn set_light_marker(&mut self, on: bool) {
        self.light_marker = on;
    }
}

// =============================================================
// Theme::resolve
// =============================================================

#[test]
fn stored_preference_wins_over_system() {
    assert_eq!(Theme::resolve(Some("dark"), true), Theme::Dark);
    assert_eq!(Theme::resolve(Some("light"), false), Theme::Light);
}

#[test]
fn missing_preference_falls_back_to_system() {
    assert_eq!(Theme::resolve(None, true), Theme::Light);
    assert_eq!(Theme::resolve(None, false), Theme::Dark);
}

#[test]
fn empty_stored_value_falls_back_to_system() {
    assert_eq!(Theme::resolve(Some(""), true), Theme::Light);
    assert_eq!(Theme::resolve(Some(""), false), Theme::Dark);
}

#[test]
fn unknown_stored_value_means_dark() {
    assert_eq!(Theme::resolve(Some("sepia"), true), Theme::Dark);
}

#[test]
fn toggled_flips_and_strings_round_trip() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::resolve(Some(Theme::Light.as_str()), false), Theme::Light);
    assert_eq!(Theme::resolve(Some(Theme::Dark.as_str()), true), Theme::Dark);
}

// =============================================================
// initialize / toggle
// =============================================================

#[test]
fn initialize_applies_marker_without_persisting() {
    let mut host = MemoryHost { prefers_light: true, ..MemoryHost::default() };
    assert_eq!(initialize(&mut host), Theme::Light);
    assert!(host.light_marker);
    assert!(host.stored.is_none());
}

#[test]
fn toggle_persists_resolved_theme() {
    let mut host = MemoryHost::default();
    initialize(&mut host);
    assert_eq!(toggle(&mut host), Theme::Light);
    assert!(host.light_marker);
    assert_eq!(host.stored.as_deref(), Some("light"));
}

#[test]
fn toggling_twice_restores_marker_and_stored_value() {
    let mut host = MemoryHost { stored: Some("light".to_owned()), ..MemoryHost::default() };
    initialize(&mut host);
    let (marker, stored) = (host.light_marker, host.stored.clone());

    toggle(&mut host);
    toggle(&mut host);

    assert_eq!(host.light_marker, marker);
    assert_eq!(host.stored, stored);
}
