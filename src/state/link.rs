#[cfg(test)]
#[path = "link_test.rs"]
mod link_test;

/// An outbound link rendered under a publication or project card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: String,
}

/// Build the links whose targets are present, keeping the given order.
///
/// Blank URLs count as absent.
pub fn present_links<'a>(candidates: impl IntoIterator<Item = (&'static str, Option<&'a str>)>) -> Vec<Link> {
    candidates
        .into_iter()
        .filter_map(|(label, href)| {
            let href = href?.trim();
            (!href.is_empty()).then(|| Link { label, href: href.to_owned() })
        })
        .collect()
}
