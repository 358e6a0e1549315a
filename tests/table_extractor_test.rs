//! Table extraction from rendered markup

use kodegen_tools_tablescrape::table_extractor::{count_tables, extract_tables, has_tables};
use kodegen_tools_tablescrape::{CellValue, TableScrapeError};

mod common;
use common::{html_page, three_table_page};

fn text(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}

fn labels(row: &[&str]) -> Vec<String> {
    row.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn test_tables_are_returned_in_document_order() {
    let page = three_table_page();
    assert!(has_tables(&page));
    assert_eq!(count_tables(&page), 3);

    let tables = extract_tables(&page).unwrap();
    assert_eq!(tables.len(), 3);

    let scores = &tables[0];
    assert_eq!(scores.header_rows(), &[labels(&["Team", "Points"])]);
    assert_eq!(scores.width(), 2);
    assert_eq!(
        scores.rows(),
        &[
            vec![text("Lions"), CellValue::Number(1204.0)],
            vec![text("Tigers"), CellValue::Number(987.0)],
        ]
    );

    assert_eq!(scores.rows()[0][0].as_text(), Some("Lions"));
    assert_eq!(scores.rows()[0][1].as_number(), Some(1204.0));
    assert_eq!(scores.rows()[1][0].as_number(), None);

    let plain = &tables[1];
    assert!(!plain.has_header());
    assert_eq!(plain.width(), 3);
    assert_eq!(plain.rows(), &[vec![text("a"), text("b"), text("c")]]);
}

#[test]
fn test_ragged_rows_are_padded() {
    let tables = extract_tables(&three_table_page()).unwrap();
    let ragged = &tables[2];

    assert_eq!(ragged.header_rows(), &[labels(&["x", "y", "z"])]);
    assert_eq!(
        ragged.rows(),
        &[
            vec![CellValue::Number(1.0), CellValue::Empty, CellValue::Empty],
            vec![CellValue::Number(2.0), CellValue::Number(3.0), CellValue::Empty],
        ]
    );
    assert!(ragged.rows().iter().all(|row| row.len() == ragged.width()));
}

#[test]
fn test_page_without_tables() {
    let page = html_page("<p>Nothing tabular here</p><div class=\"table\">fake</div>");
    assert!(!has_tables(&page));
    assert_eq!(count_tables(&page), 0);
    assert!(extract_tables(&page).unwrap().is_empty());
}

#[test]
fn test_colspan_and_rowspan_fill_every_covered_slot() {
    let page = html_page(
        r#"<table>
            <tr><th>Region</th><th colspan="2">Sales</th></tr>
            <tr><td rowspan="2">North</td><td>1</td><td>2</td></tr>
            <tr><td>3</td><td>4</td></tr>
        </table>"#,
    );
    let table = &extract_tables(&page).unwrap()[0];

    assert_eq!(table.header_rows(), &[labels(&["Region", "Sales", "Sales.1"])]);
    assert_eq!(
        table.rows(),
        &[
            vec![text("North"), CellValue::Number(1.0), CellValue::Number(2.0)],
            vec![text("North"), CellValue::Number(3.0), CellValue::Number(4.0)],
        ]
    );
}

#[test]
fn test_zero_rowspan_counts_as_one() {
    let page = html_page(
        r#"<table>
            <tr><td rowspan="0">a</td><td>b</td></tr>
            <tr><td>c</td></tr>
        </table>"#,
    );
    let table = &extract_tables(&page).unwrap()[0];

    assert_eq!(
        table.rows(),
        &[vec![text("a"), text("b")], vec![text("c"), CellValue::Empty]]
    );
}

#[test]
fn test_rowspan_stops_at_row_group() {
    let page = html_page(
        r#"<table>
            <thead><tr><th rowspan="3">H</th><th>I</th></tr></thead>
            <tbody><tr><td>1</td><td>2</td></tr></tbody>
        </table>"#,
    );
    let table = &extract_tables(&page).unwrap()[0];

    assert_eq!(table.header_rows(), &[labels(&["H", "I"])]);
    assert_eq!(
        table.rows(),
        &[vec![CellValue::Number(1.0), CellValue::Number(2.0)]]
    );
}

#[test]
fn test_nested_tables_are_separate() {
    let page = html_page(
        r#"<table id="outer">
            <tr><td>outer</td><td><table><tr><td>inner1</td></tr><tr><td>inner2</td></tr></table></td></tr>
        </table>"#,
    );
    let tables = extract_tables(&page).unwrap();
    assert_eq!(tables.len(), 2);

    let outer = &tables[0];
    assert_eq!(outer.rows().len(), 1);
    assert_eq!(outer.width(), 2);
    assert_eq!(outer.rows()[0][0], text("outer"));

    let inner = &tables[1];
    assert_eq!(inner.rows(), &[vec![text("inner1")], vec![text("inner2")]]);
}

#[test]
fn test_hidden_rows_and_text_are_skipped() {
    let page = html_page(
        r#"<table>
            <tr><td>a<span style="display: none">secret</span></td><td>b</td></tr>
            <tr style="DISPLAY:NONE"><td>hidden row</td></tr>
            <tr hidden><td>also hidden</td></tr>
            <tr><td>c</td><td hidden>gone</td></tr>
        </table>"#,
    );
    let table = &extract_tables(&page).unwrap()[0];

    assert_eq!(
        table.rows(),
        &[vec![text("a"), text("b")], vec![text("c"), CellValue::Empty]]
    );
}

#[test]
fn test_cell_text_collapses_whitespace() {
    let page = html_page(
        "<table><tr><td>  New\n   York <br> City </td><td><script>var x = 1;</script>ok</td></tr></table>",
    );
    let table = &extract_tables(&page).unwrap()[0];

    assert_eq!(table.rows(), &[vec![text("New York City"), text("ok")]]);
}

#[test]
fn test_footer_rows_follow_body_rows() {
    let page = html_page(
        r#"<table>
            <thead><tr><th>k</th></tr></thead>
            <tfoot><tr><td>total</td></tr></tfoot>
            <tbody><tr><td>1</td></tr><tr><td>2</td></tr></tbody>
        </table>"#,
    );
    let table = &extract_tables(&page).unwrap()[0];

    assert_eq!(
        table.rows(),
        &[
            vec![CellValue::Number(1.0)],
            vec![CellValue::Number(2.0)],
            vec![text("total")],
        ]
    );
}

#[test]
fn test_stacked_header_rows() {
    let page = html_page(
        r#"<table>
            <thead>
                <tr><th></th><th colspan="2">Q1</th></tr>
                <tr><th>Team</th><th>W</th><th>L</th></tr>
            </thead>
            <tbody><tr><td>Lions</td><td>3</td><td>1</td></tr></tbody>
        </table>"#,
    );
    let table = &extract_tables(&page).unwrap()[0];

    assert_eq!(
        table.header_rows(),
        &[
            labels(&["Unnamed: 0_level_0", "Q1", "Q1"]),
            labels(&["Team", "W", "L"]),
        ]
    );
}

#[test]
fn test_header_labels_are_unique() {
    let page = html_page(
        "<table><tr><th>Name</th><th></th><th>Score</th><th>Score</th></tr><tr><td>a</td><td>b</td><td>1</td><td>2</td></tr></table>",
    );
    let table = &extract_tables(&page).unwrap()[0];

    assert_eq!(
        table.header_rows(),
        &[labels(&["Name", "Unnamed: 1", "Score", "Score.1"])]
    );
}

#[test]
fn test_mixed_value_types() {
    let page = html_page("<table><tr><td>-3.5</td><td>12%</td><td></td><td>2,500</td></tr></table>");
    let table = &extract_tables(&page).unwrap()[0];

    assert_eq!(
        table.rows(),
        &[vec![
            CellValue::Number(-3.5),
            text("12%"),
            CellValue::Empty,
            CellValue::Number(2500.0),
        ]]
    );
}

#[test]
fn test_empty_table_is_still_a_table() {
    let page = html_page("<table></table><table><tr><td>x</td></tr></table>");
    let tables = extract_tables(&page).unwrap();

    assert_eq!(tables.len(), 2);
    assert!(tables[0].is_empty());
    assert_eq!(tables[0].width(), 0);
    assert!(!tables[1].is_empty());
}

#[test]
fn test_oversized_span_grid_is_rejected() {
    let mut rows = String::from(r#"<tr><td colspan="1000" rowspan="65534">x</td></tr>"#);
    rows.push_str(&"<tr></tr>".repeat(5_000));
    let page = html_page(&format!("<table>{rows}</table>"));

    let err = extract_tables(&page).unwrap_err();
    assert!(
        matches!(err, TableScrapeError::Extraction { index: 1, .. }),
        "unexpected error: {err:?}"
    );
}

#[test]
fn test_padding_counts_toward_grid_limit() {
    // 500 x 1000 = 500,000 span cells, padded to 11 rows of 500,000 columns
    let wide = r#"<td colspan="1000">x</td>"#.repeat(500);
    let mut rows = format!("<tr>{wide}</tr>");
    for n in 0..10 {
        rows.push_str(&format!("<tr><td>{n}</td></tr>"));
    }
    let page = html_page(&format!("<table>{rows}</table>"));

    let err = extract_tables(&page).unwrap_err();
    assert!(
        matches!(err, TableScrapeError::Extraction { index: 1, .. }),
        "unexpected error: {err:?}"
    );
}

#[test]
fn test_wide_row_within_limit_is_padded() {
    let wide = r#"<td colspan="1000">x</td>"#.repeat(2);
    let page = html_page(&format!("<table><tr>{wide}</tr><tr><td>1</td></tr></table>"));
    let table = &extract_tables(&page).unwrap()[0];

    assert_eq!(table.width(), 2000);
    assert_eq!(table.rows()[1].len(), 2000);
    assert!(table.rows()[1][1999].is_empty());
}
