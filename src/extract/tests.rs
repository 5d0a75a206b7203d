use std::sync::Arc;

use super::rows::build_record;
use super::*;
use crate::config::SECTION_ANCHOR;
use crate::model::ExtractionCounts;

const CASUALTY_TABLE: &str = r##"<table class="wikitable sortable">
<tbody><tr>
<th>Breakdown</th>
<th>Casualties</th>
<th>Time period</th>
<th>Source</th>
</tr>
<tr>
<th rowspan="2">Civilians killed</th>
<td>100–200</td>
<td>1 Jan 2022 to 1 Feb 2023</td>
<td>OHCHR<sup class="reference"><a href="#cite_note-1">[1]</a></sup></td>
</tr>
<tr>
<td>300</td>
<td>1 Feb 2023 to present</td>
<td>AP</td>
</tr>
<tr>
<th rowspan="2">Ukrainian military killed<sup>[a]</sup></th>
<td>15,000</td>
<td>24 February 2022 – 8 December 2022</td>
<td>Ukrainian Ministry of Defence</td>
</tr>
<tr>
<td>17,000</td>
<td>24 February 2022 – 8 December 2022</td>
<td>Russian Ministry of Defence</td>
</tr>
</tbody></table>"##;

fn document_with(section_body: &str) -> String {
    format!(
        "<html><body>\n<h2>{SECTION_ANCHOR}</h2>\n<div class=\"hatnote\">See also</div>\n{section_body}\n<p>Later paragraph.</p>\n</body></html>"
    )
}

fn extractor() -> CasualtyTableExtractor {
    CasualtyTableExtractor::new().expect("extractor")
}

fn citations() -> CitationStripper {
    CitationStripper::new().expect("citation stripper")
}

#[test]
fn strip_removes_bracketed_markers_and_keeps_whitespace() {
    let stripper = citations();
    assert_eq!(stripper.strip(Some("OHCHR[1][note 2]")), "OHCHR");
    assert_eq!(stripper.strip(Some("at least  42 [citation needed] dead")), "at least  42  dead");
    assert_eq!(stripper.strip(Some("no markers")), "no markers");
    assert_eq!(stripper.strip(None), "");
}

#[test]
fn strip_is_idempotent() {
    let stripper = citations();
    let samples = [
        "plain",
        "a[1]b[2]c",
        "[[nested]]",
        "a[b[c]d]e",
        "open [ only",
        "close ] only",
        "[x]\n[y",
        "",
    ];

    for sample in samples {
        let once = stripper.strip(Some(sample));
        let twice = stripper.strip(Some(&once));
        assert_eq!(once, twice, "sample {sample:?}");
    }
}

#[test]
fn locate_requires_section_anchor() {
    let locator = TableLocator::new().expect("locator");
    let document = format!("<html><body>{CASUALTY_TABLE}<p>x</p></body></html>");

    assert_eq!(locator.locate(&document), None);

    let extraction = extractor().extract_records(&document);
    assert!(!extraction.table_found);
    assert!(extraction.records.is_empty());
}

#[test]
fn locate_collapses_line_breaks_and_returns_table_markup() {
    let locator = TableLocator::new().expect("locator");
    let document = document_with(&CASUALTY_TABLE.replace('\n', "\r\n"));

    let table = locator.locate(&document).expect("table located");
    assert!(table.starts_with("<table class=\"wikitable sortable\">"));
    assert!(table.ends_with("</table>"));
    assert!(!table.contains('\n'));
    assert!(!table.contains('\r'));
}

#[test]
fn locate_skips_tables_without_breakdown_signature() {
    let locator = TableLocator::new().expect("locator");
    let unrelated = "<table class=\"infobox\"><tbody><tr><th>Date</th><th>Event</th></tr>\
        <tr><td>1 Jan</td><td>Something</td></tr></tbody></table>";
    let document = document_with(&format!("{unrelated}\n{CASUALTY_TABLE}"));

    let table = locator.locate(&document).expect("table located");
    assert!(table.starts_with("<table class=\"wikitable sortable\">"));
    assert!(!table.contains("infobox"));
}

#[test]
fn locate_stops_at_next_paragraph() {
    let locator = TableLocator::new().expect("locator");
    let document = format!("<h2>{SECTION_ANCHOR}</h2><p>Intro paragraph.</p>{CASUALTY_TABLE}");

    assert_eq!(locator.locate(&document), None);
}

#[test]
fn locate_window_runs_to_end_without_paragraph() {
    let locator = TableLocator::new().expect("locator");
    let document = format!("<h2>{SECTION_ANCHOR}</h2>\n{CASUALTY_TABLE}");

    assert!(locator.locate(&document).is_some());
}

#[test]
fn anchor_without_matching_table_yields_empty_extraction() {
    let document = document_with("<table><tr><th>Year</th><th>Count</th></tr></table>");
    let extraction = extractor().extract_records(&document);

    assert!(!extraction.table_found);
    assert!(extraction.records.is_empty());
    assert_eq!(extraction.counts, ExtractionCounts::default());
}

#[test]
fn extract_propagates_merged_header_over_its_span() {
    let extraction = extractor().extract_records(&document_with(CASUALTY_TABLE));

    assert!(extraction.table_found);
    assert_eq!(extraction.records.len(), 4);

    let first = &extraction.records[0];
    let second = &extraction.records[1];
    assert_eq!(&*first.category, "Civilians killed");
    assert_eq!(&*second.category, "Civilians killed");
    assert!(Arc::ptr_eq(&first.category, &second.category));

    assert_eq!(first.casualties, "100–200");
    assert_eq!(first.time_period, "1 Jan 2022 to 1 Feb 2023");
    assert_eq!(first.source, "OHCHR");
    assert_eq!(second.casualties, "300");
    assert_eq!(second.source, "AP");
}

#[test]
fn header_labels_are_stripped_of_citations() {
    let extraction = extractor().extract_records(&document_with(CASUALTY_TABLE));

    let categories = extraction
        .records
        .iter()
        .map(|record| record.category.to_string())
        .collect::<Vec<String>>();
    assert_eq!(
        categories,
        vec![
            "Civilians killed",
            "Civilians killed",
            "Ukrainian military killed",
            "Ukrainian military killed",
        ]
        .into_iter()
        .map(str::to_string)
        .collect::<Vec<String>>()
    );
}

#[test]
fn rows_after_span_without_header_are_dropped() {
    let table = r#"<table><tr><th>Breakdown</th><th>Casualties</th><th>Period</th><th>Source</th></tr>
<tr><th rowspan="1">Russian military killed</th><td>50,000</td><td>1 Jan 2023 to 1 Jun 2023</td><td>Mediazona</td></tr>
<tr><td>60,000</td><td>1 Jan 2023 to 1 Jul 2023</td><td>BBC</td></tr>
<tr><th>Civilians injured</th><td>9,000</td><td>2022</td><td>UN</td></tr>
<tr><td>9,500</td><td>2023</td><td>UN</td></tr>
</table>"#;
    let extraction = extractor().extract_records(&document_with(table));

    assert_eq!(extraction.records.len(), 2);
    assert_eq!(&*extraction.records[0].category, "Russian military killed");
    assert_eq!(&*extraction.records[1].category, "Civilians injured");
    assert_eq!(extraction.records[1].casualties, "9,000");
    assert_eq!(extraction.counts.unlabelled_rows, 2);
    assert_eq!(extraction.counts.header_rows_skipped, 1);
    assert_eq!(extraction.counts.rows_seen, 5);
}

#[test]
fn row_after_two_row_span_is_dropped() {
    let table = r#"<table><tr><th>Breakdown</th><th>Casualties</th><th>Period</th><th>Source</th></tr>
<tr><th rowspan="2">Civilians killed</th><td>10</td><td>2022</td><td>UN</td></tr>
<tr><td>20</td><td>2023</td><td>UN</td></tr>
<tr><td>30</td><td>2024</td><td>UN</td></tr>
</table>"#;
    let extraction = extractor().extract_records(&document_with(table));

    let casualties = extraction
        .records
        .iter()
        .map(|record| record.casualties.as_str())
        .collect::<Vec<&str>>();
    assert_eq!(casualties, vec!["10", "20"]);
    assert_eq!(extraction.counts.unlabelled_rows, 1);
}

#[test]
fn out_of_range_rowspan_values_do_not_overflow_the_span() {
    let table = r#"<table><tr><th>Breakdown</th><th>Casualties</th><th>Period</th><th>Source</th></tr>
<tr><th rowspan="-9223372036854775808">Civilians killed</th><td>10</td><td>2022</td><td>UN</td></tr>
<tr><td>11</td><td>2022</td><td>UN</td></tr>
<tr><th rowspan="-2">Civilians injured</th><td>12</td><td>2022</td><td>UN</td></tr>
<tr><td>13</td><td>2022</td><td>UN</td></tr>
<tr><th rowspan="99999999999999999999">Russian military killed</th><td>14</td><td>2022</td><td>UN</td></tr>
<tr><td>15</td><td>2022</td><td>UN</td></tr>
<tr><th>Ukrainian military killed</th><td>16</td><td>2022</td><td>UN</td></tr>
</table>"#;
    let extraction = extractor().extract_records(&document_with(table));

    let labelled = extraction
        .records
        .iter()
        .map(|record| (&*record.category, record.casualties.as_str()))
        .collect::<Vec<(&str, &str)>>();
    assert_eq!(
        labelled,
        vec![
            ("Civilians killed", "10"),
            ("Civilians injured", "12"),
            ("Russian military killed", "14"),
            ("Russian military killed", "15"),
            ("Russian military killed", "16"),
        ]
    );
    assert_eq!(extraction.counts.unlabelled_rows, 2);
}

#[test]
fn locate_accepts_caption_before_header_row() {
    let locator = TableLocator::new().expect("locator");
    let unrelated = "<table class=\"infobox\"><caption>Timeline</caption><tbody><tr><th>Date</th><th>Event</th></tr></tbody></table>";
    let captioned = CASUALTY_TABLE.replacen(
        "<tbody>",
        "<caption>Casualty estimates<sup>[2]</sup></caption>\n<tbody>",
        1,
    );
    let document = document_with(&format!("{unrelated}\n{captioned}"));

    let table = locator.locate(&document).expect("captioned table located");
    assert!(table.starts_with("<table class=\"wikitable sortable\"><caption>"));
    assert!(!table.contains("Timeline"));

    let extraction = extractor().extract_records(&document);
    assert_eq!(extraction.records.len(), 4);
    assert_eq!(extraction.counts.header_rows_skipped, 1);
}

#[test]
fn malformed_rows_are_dropped_without_aborting_walk() {
    let table = r#"<table><tr><th>Breakdown</th><th>Casualties</th><th>Period</th><th>Source</th></tr>
<tr><th rowspan="3">Civilians killed</th><td>10</td><td>1 Jan 2022 to 2 Jan 2022</td><td>UN</td></tr>
<tr><td colspan="3">Separator</td></tr>
<tr><td>20</td><td>3 Jan 2022 to 4 Jan 2022</td><td>Ukrainian Government</td></tr>
<tr><th>Total</th><td colspan="2">30</td></tr>
</table>"#;
    let extraction = extractor().extract_records(&document_with(table));

    assert_eq!(extraction.records.len(), 2);
    assert_eq!(extraction.records[0].casualties, "10");
    assert_eq!(extraction.records[1].casualties, "20");
    assert_eq!(extraction.counts.malformed_rows, 2);
    assert_eq!(extraction.counts.records, 2);
}

#[test]
fn unparsable_rowspan_counts_as_no_span() {
    let table = r#"<table><tr><th>Breakdown</th><th>Casualties</th><th>Period</th><th>Source</th></tr>
<tr><th rowspan="many">Civilians killed</th><td>10</td><td>2022</td><td>UN</td></tr>
<tr><td>20</td><td>2023</td><td>UN</td></tr>
</table>"#;
    let extraction = extractor().extract_records(&document_with(table));

    assert_eq!(extraction.records.len(), 1);
    assert_eq!(extraction.records[0].casualties, "10");
}

#[test]
fn repeated_extraction_calls_are_independent() {
    let extractor = extractor();
    let document = document_with(CASUALTY_TABLE);

    let first = extractor.extract_records(&document);
    let second = extractor.extract_records(&document);
    assert_eq!(first.records, second.records);
    assert_eq!(first.counts, second.counts);
}

#[test]
fn build_record_requires_exactly_three_cells() {
    let stripper = citations();
    let category: Arc<str> = Arc::from("Civilians killed");

    let cells = |texts: &[&str]| texts.iter().map(|text| text.to_string()).collect::<Vec<String>>();

    assert!(build_record(&category, &cells(&["1", "2"]), &stripper).is_none());
    assert!(build_record(&category, &cells(&["1", "2", "3", "4"]), &stripper).is_none());

    let record = build_record(&category, &cells(&["5[1]", "2022[2]", "UN[3]"]), &stripper)
        .expect("three cells build a record");
    assert_eq!(record.casualties, "5");
    assert_eq!(record.time_period, "2022");
    assert_eq!(record.source, "UN");
    assert!(Arc::ptr_eq(&record.category, &category));
}
