//! Mobile navigation disclosure.

use crate::config::NavConfig;

/// Bind the nav toggle: each click flips the list's open class and mirrors
/// it into `aria-expanded` on the button.
pub fn init(config: NavConfig) {
    #[cfg(feature = "csr")]
    {
        use crate::state::nav::NavState;
        use crate::util::dom;

        let (Some(button), Some(list)) = (dom::element_by_id(config.toggle_id), dom::element_by_id(config.list_id))
        else {
            return;
        };
        let mut nav = NavState { open: list.class_list().contains(config.open_class) };
        let trigger = button.clone();
        dom::listen(&button, "click", move |_| {
            let open = nav.toggle();
            let _ = list.class_list().toggle_with_force(config.open_class, open);
            let _ = trigger.set_attribute("aria-expanded", nav.aria_expanded());
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }
}
