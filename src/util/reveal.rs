//! One-shot reveal of `.reveal` elements as they scroll into view.
//!
//! DESIGN
//! ======
//! A single `IntersectionObserver` watches every tagged element. The first
//! report at or above the threshold marks the element visible and stops
//! observing it, so an element is never un-revealed and the observer drains
//! as the page is scrolled.

use crate::config::RevealConfig;

/// Observe every element matching the configured selector.
pub fn init(config: RevealConfig) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        use crate::state::reveal::crosses_threshold;
        use crate::util::dom;

        let targets = dom::query_all::<web_sys::Element>(config.selector);
        if targets.is_empty() {
            return;
        }

        let on_intersect = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !crosses_threshold(entry.is_intersecting(), entry.intersection_ratio(), config.threshold) {
                        continue;
                    }
                    let target = entry.target();
                    let _ = target.class_list().add_1(config.visible_class);
                    observer.unobserve(&target);
                }
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&wasm_bindgen::JsValue::from_f64(config.threshold));
        let Ok(observer) =
            web_sys::IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
        else {
            leptos::logging::warn!("IntersectionObserver unavailable; revealing all elements");
            for el in &targets {
                let _ = el.class_list().add_1(config.visible_class);
            }
            return;
        };
        for el in &targets {
            observer.observe(el);
        }
        on_intersect.forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }
}
