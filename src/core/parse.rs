//! HTML → [`TableData`]. Selects tables by class and extracts header labels
//! and row cells in document order.

use crate::domain::model::TableData;
use crate::utils::error::{EtlError, Result};
use scraper::{ElementRef, Html, Selector};

/// Parses `html` and returns every `<table>` carrying `table_class`, in
/// document order. The class comes from configuration, so its selector error
/// is reported instead of panicking.
pub fn parse_tables(html: &str, table_class: &str) -> Result<Vec<TableData>> {
    let table_selector = Selector::parse(&format!("table.{}", table_class)).map_err(|e| {
        EtlError::ParseError {
            message: format!("invalid selector for table class '{}': {:?}", table_class, e),
        }
    })?;
    let th_selector = Selector::parse("th").expect("Invalid CSS selector for header cells");
    let tr_selector = Selector::parse("tr").expect("Invalid CSS selector for table rows");
    let td_selector = Selector::parse("td").expect("Invalid CSS selector for data cells");

    let document = Html::parse_document(html);
    let tables = document
        .select(&table_selector)
        .map(|table| parse_table(table, &th_selector, &tr_selector, &td_selector))
        .collect();

    Ok(tables)
}

fn parse_table(
    table: ElementRef<'_>,
    th_selector: &Selector,
    tr_selector: &Selector,
    td_selector: &Selector,
) -> TableData {
    TableData {
        headers: extract_headers(table, th_selector, tr_selector, td_selector),
        rows: table
            .select(tr_selector)
            .map(|row| row.select(td_selector).map(|cell| cell_text(cell)).collect())
            .collect(),
    }
}

/// Explicit `<th>` cells win; tables without header markup are assumed to use
/// their first row as the header row.
fn extract_headers(
    table: ElementRef<'_>,
    th_selector: &Selector,
    tr_selector: &Selector,
    td_selector: &Selector,
) -> Vec<String> {
    let headers: Vec<String> = table
        .select(th_selector)
        .map(|cell| cell_text(cell).trim().to_string())
        .collect();
    if !headers.is_empty() {
        return headers;
    }

    match table.select(tr_selector).next() {
        Some(first_row) => first_row
            .select(td_selector)
            .map(|cell| cell_text(cell).trim().to_string())
            .collect(),
        None => Vec::new(),
    }
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_prefer_th_cells() {
        let html = r#"
            <table class="goodsByArticul">
                <tr><th> Артикул </th><th>Цвет свечения диода</th></tr>
                <tr><td>LED001</td><td>Red</td></tr>
            </table>
        "#;

        let tables = parse_tables(html, "goodsByArticul").unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(
            tables[0].headers,
            vec!["Артикул".to_string(), "Цвет свечения диода".to_string()]
        );
    }

    #[test]
    fn test_headers_fall_back_to_first_row() {
        let html = r#"
            <table class="goodsByArticul">
                <tr><td>Цвет</td><td>Напряжение</td></tr>
                <tr><td>Green</td><td>1.8V</td></tr>
            </table>
        "#;

        let tables = parse_tables(html, "goodsByArticul").unwrap();
        assert_eq!(
            tables[0].headers,
            vec!["Цвет".to_string(), "Напряжение".to_string()]
        );
    }

    #[test]
    fn test_only_matching_class_is_selected() {
        let html = r#"
            <table class="other"><tr><td>skip</td></tr></table>
            <table class="goodsByArticul"><tr><td>keep</td></tr></table>
        "#;

        let tables = parse_tables(html, "goodsByArticul").unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].rows, vec![vec!["keep".to_string()]]);
    }

    #[test]
    fn test_no_tables_yields_empty_list() {
        let tables = parse_tables("<html><body><p>nothing here</p></body></html>", "goodsByArticul")
            .unwrap();
        assert!(tables.is_empty());
    }

    #[test]
    fn test_rows_keep_td_cells_per_tr() {
        let html = r#"
            <table class="goodsByArticul">
                <tr><th>A</th><th>B</th></tr>
                <tr><td>1</td><td>2</td></tr>
                <tr><td>3</td></tr>
            </table>
        "#;

        let tables = parse_tables(html, "goodsByArticul").unwrap();
        // The header row has no <td> cells, so it shows up as an empty row.
        assert_eq!(
            tables[0].rows,
            vec![
                Vec::<String>::new(),
                vec!["1".to_string(), "2".to_string()],
                vec!["3".to_string()],
            ]
        );
    }

    #[test]
    fn test_nested_markup_text_is_concatenated() {
        let html = r#"
            <table class="goodsByArticul">
                <tr><th><span>Цвет</span> <b>свечения</b></th></tr>
            </table>
        "#;

        let tables = parse_tables(html, "goodsByArticul").unwrap();
        assert_eq!(tables[0].headers, vec!["Цвет свечения".to_string()]);
    }

    #[test]
    fn test_invalid_table_class_is_a_parse_error() {
        let result = parse_tables("<table></table>", "bad class!");
        assert!(matches!(result, Err(EtlError::ParseError { .. })));
    }
}
