use super::*;

fn record(title: &str, year: i32, kind: &str) -> PublicationRecord {
    PublicationRecord {
        title: title.to_owned(),
        authors: vec!["X".to_owned()],
        venue: "V".to_owned(),
        year,
        kind: kind.to_owned(),
        keywords: Vec::new(),
        doi: None,
        pdf: None,
        code: None,
    }
}

fn all_types() -> Vec<String> {
    vec!["paper".to_owned(), "talk".to_owned(), "preprint".to_owned()]
}

fn sample() -> Vec<PublicationRecord> {
    let mut graphs = record("Graph Kernels", 2019, "paper");
    graphs.keywords = vec!["Spectral".to_owned(), "learning".to_owned()];
    let mut talk = record("Invited Talk", 2021, "talk");
    talk.venue = "NeurIPS Workshop".to_owned();
    vec![
        graphs,
        talk,
        record("Sparse Models", 2021, "preprint"),
        record("Dense Models", 2019, "paper"),
    ]
}

// =============================================================
// Deserialization
// =============================================================

#[test]
fn record_deserializes_with_optional_fields_absent() {
    let value = serde_json::json!({ "title": "A", "year": 2020, "type": "paper" });
    let p: PublicationRecord = serde_json::from_value(value).unwrap();
    assert_eq!(p.title, "A");
    assert_eq!(p.kind, "paper");
    assert!(p.authors.is_empty());
    assert!(p.keywords.is_empty());
    assert!(p.venue.is_empty());
    assert!(p.links().is_empty());
}

#[test]
fn record_ignores_unknown_fields() {
    let value = serde_json::json!({
        "title": "A", "year": 2020, "type": "paper", "citations": 12, "pdf": "a.pdf"
    });
    let p: PublicationRecord = serde_json::from_value(value).unwrap();
    assert_eq!(p.pdf.as_deref(), Some("a.pdf"));
}

#[test]
fn record_treats_null_lists_and_text_as_absent() {
    let value = serde_json::json!({
        "title": "A", "year": 2020, "type": "paper",
        "authors": null, "venue": null, "keywords": null, "doi": null
    });
    let p: PublicationRecord = serde_json::from_value(value).unwrap();
    assert!(p.authors.is_empty());
    assert!(p.venue.is_empty());
    assert!(p.keywords.is_empty());
    assert!(p.doi.is_none());
}

#[test]
fn record_without_type_or_title_still_deserializes() {
    let p: PublicationRecord = serde_json::from_value(serde_json::json!({ "year": 2021 })).unwrap();
    assert!(p.title.is_empty());
    assert!(p.kind.is_empty());
}

#[test]
fn untyped_record_is_hidden_by_type_facet() {
    let records = vec![record("A", 2020, "paper"), record("B", 2021, "")];
    let filter = PublicationFilter::from_controls("", ALL_YEARS_VALUE, all_types());
    let titles: Vec<_> = filter_publications(&records, &filter).iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["A"]);
}

// =============================================================
// YearFilter
// =============================================================

#[test]
fn year_filter_parses_select_values() {
    assert_eq!(YearFilter::from_value(ALL_YEARS_VALUE), YearFilter::All);
    assert_eq!(YearFilter::from_value("2020"), YearFilter::Year(2020));
    assert_eq!(YearFilter::from_value(""), YearFilter::All);
}

#[test]
fn year_filter_all_bypasses_year() {
    assert!(YearFilter::All.matches(1999));
    assert!(YearFilter::Year(2020).matches(2020));
    assert!(!YearFilter::Year(2020).matches(2021));
}

// =============================================================
// year_options
// =============================================================

#[test]
fn year_options_are_unique_and_descending() {
    let years = year_options(&sample());
    assert_eq!(years, vec![2021, 2019]);
    assert!(years.windows(2).all(|w| w[0] > w[1]));
}

#[test]
fn year_options_empty_for_no_records() {
    assert!(year_options(&[]).is_empty());
}

#[test]
fn kind_options_collects_distinct_types() {
    let kinds: Vec<_> = kind_options(&sample()).into_iter().collect();
    assert_eq!(kinds, vec!["paper", "preprint", "talk"]);
}

#[test]
fn kind_options_ignores_untyped_records() {
    let kinds = kind_options(&[record("A", 2020, ""), record("B", 2020, "talk")]);
    assert_eq!(kinds.into_iter().collect::<Vec<_>>(), vec!["talk"]);
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn scenario_year_facet_selects_single_record() {
    let records = vec![
        PublicationRecord { authors: vec!["X".to_owned()], ..record("A", 2020, "paper") },
        PublicationRecord { authors: vec!["Y".to_owned()], ..record("B", 2021, "talk") },
    ];
    let filter = PublicationFilter::from_controls("", "2020", ["paper".to_owned(), "talk".to_owned()]);
    let shown = filter_publications(&records, &filter);
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].title, "A");
}

#[test]
fn empty_query_yields_facet_only_set() {
    let records = sample();
    let filter = PublicationFilter::from_controls("", ALL_YEARS_VALUE, ["paper".to_owned()]);
    let titles: Vec<_> = filter_publications(&records, &filter).iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Graph Kernels", "Dense Models"]);
}

#[test]
fn query_matches_title_venue_and_keywords_case_insensitively() {
    let records = sample();
    let by_keyword = PublicationFilter::from_controls("SPECTRAL", ALL_YEARS_VALUE, all_types());
    assert_eq!(filter_publications(&records, &by_keyword).len(), 1);

    let by_venue = PublicationFilter::from_controls("neurips", ALL_YEARS_VALUE, all_types());
    assert_eq!(filter_publications(&records, &by_venue)[0].title, "Invited Talk");

    let by_title = PublicationFilter::from_controls("models", ALL_YEARS_VALUE, all_types());
    assert_eq!(filter_publications(&records, &by_title).len(), 2);
}

#[test]
fn query_does_not_match_authors() {
    let records = sample();
    let filter = PublicationFilter::from_controls("x", ALL_YEARS_VALUE, all_types());
    assert!(filter_publications(&records, &filter).is_empty());
}

#[test]
fn unchecked_types_hide_records() {
    let records = sample();
    let filter = PublicationFilter::from_controls("", ALL_YEARS_VALUE, Vec::new());
    assert!(filter_publications(&records, &filter).is_empty());
}

#[test]
fn page_without_type_boxes_activates_every_type_in_data() {
    let records = sample();
    let filter = PublicationFilter::from_page_controls("", ALL_YEARS_VALUE, None, &records);
    assert_eq!(filter.types, kind_options(&records));
    assert_eq!(filter_publications(&records, &filter).len(), records.len());
}

#[test]
fn page_with_type_boxes_uses_only_checked_values() {
    let records = sample();
    let none_checked = PublicationFilter::from_page_controls("", ALL_YEARS_VALUE, Some(Vec::new()), &records);
    assert!(filter_publications(&records, &none_checked).is_empty());

    let talks = PublicationFilter::from_page_controls("", "2021", Some(vec!["talk".to_owned()]), &records);
    let titles: Vec<_> = filter_publications(&records, &talks).iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Invited Talk"]);
}

#[test]
fn filtered_count_matches_predicate_count_for_every_facet_combination() {
    let records = sample();
    let years = ["all", "2019", "2020", "2021"];
    let type_sets: [&[&str]; 4] = [&[], &["paper"], &["talk", "preprint"], &["paper", "talk", "preprint"]];
    let queries = ["", "models", "graph", "zzz"];
    for year in years {
        for types in type_sets {
            for query in queries {
                let filter =
                    PublicationFilter::from_controls(query, year, types.iter().map(|t| (*t).to_owned()));
                let expected = records.iter().filter(|p| p.matches(&filter)).count();
                assert_eq!(publication_entries(&records, &filter).len(), expected);
            }
        }
    }
}

// =============================================================
// Entries
// =============================================================

#[test]
fn entry_shows_comma_joined_authors_and_meta() {
    let mut p = record("A", 2020, "paper");
    p.authors = vec!["Ada".to_owned(), "Grace".to_owned()];
    p.doi = Some("https://doi.org/10/abc".to_owned());
    p.code = Some("https://github.com/a/b".to_owned());
    let entry = PublicationEntry::from(&p);
    assert_eq!(entry.title, "A");
    assert_eq!(entry.meta, " \u{2014} Ada, Grace \u{2022} V \u{2022} 2020 \u{2022} paper");
    let labels: Vec<_> = entry.links.iter().map(|l| l.label).collect();
    assert_eq!(labels, vec!["DOI", "Code"]);
}

#[test]
fn entries_keep_original_order() {
    let records = sample();
    let filter = PublicationFilter::from_controls("", ALL_YEARS_VALUE, all_types());
    let titles: Vec<_> = publication_entries(&records, &filter).into_iter().map(|e| e.title).collect();
    assert_eq!(titles, vec!["Graph Kernels", "Invited Talk", "Sparse Models", "Dense Models"]);
}
