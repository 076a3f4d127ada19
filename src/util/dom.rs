//! Small `web-sys` helpers shared by the enhancement modules.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

pub fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn element_by_id(id: &str) -> Option<web_sys::Element> {
    document()?.get_element_by_id(id)
}

/// Look up `id` and cast it to a concrete element type.
pub fn typed_by_id<T: JsCast>(id: &str) -> Option<T> {
    element_by_id(id)?.dyn_into::<T>().ok()
}

/// Every element matching `selector` that casts to `T`, in document order.
pub fn query_all<T: JsCast>(selector: &str) -> Vec<T> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Attach `handler` to `event` on `target` for the lifetime of the page.
pub fn listen(target: &web_sys::EventTarget, event: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    let _ = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
    cb.forget();
}
