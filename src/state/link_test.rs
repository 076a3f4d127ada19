use super::*;

#[test]
fn present_links_skips_missing_targets() {
    let links = present_links([("DOI", Some("https://doi.org/x")), ("PDF", None), ("Code", Some("https://git"))]);
    assert_eq!(
        links,
        vec![
            Link { label: "DOI", href: "https://doi.org/x".to_owned() },
            Link { label: "Code", href: "https://git".to_owned() },
        ]
    );
}

#[test]
fn present_links_treats_blank_as_absent() {
    let links = present_links([("Demo", Some("   ")), ("Paper", Some(""))]);
    assert!(links.is_empty());
}

#[test]
fn present_links_trims_whitespace() {
    let links = present_links([("PDF", Some(" paper.pdf "))]);
    assert_eq!(links[0].href, "paper.pdf");
}
