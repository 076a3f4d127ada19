/// Write the current calendar year into the footer element, if present.
pub fn init(year_id: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(el) = crate::util::dom::element_by_id(year_id) else {
            return;
        };
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = year_id;
    }
}
