#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Open/closed state of the mobile navigation list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub open: bool,
}

impl NavState {
    /// Flip the disclosure and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Value for the trigger's `aria-expanded` attribute.
    pub fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}
