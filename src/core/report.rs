//! XLSX assembly. Builds the output workbook in memory so storage backends
//! only ever see bytes.

use crate::domain::model::TransformResult;
use crate::utils::error::{EtlError, Result};
use std::io::Cursor;
use umya_spreadsheet::Color;

/// Builds the workbook holding `result` under `sheet_name`.
///
/// With no existing workbook the output contains exactly that one sheet. With
/// existing workbook bytes, a sheet of the same name is dropped and recreated
/// while every other sheet is carried over untouched.
pub fn build_workbook(
    existing: Option<&[u8]>,
    sheet_name: &str,
    result: &TransformResult,
) -> Result<Vec<u8>> {
    if result.records.is_empty() {
        return Err(EtlError::NoDataError);
    }

    let mut book = match existing {
        Some(bytes) => {
            let mut book = umya_spreadsheet::reader::xlsx::read_reader(Cursor::new(bytes), true)?;
            let _ = book.remove_sheet_by_name(sheet_name);
            book
        }
        None => umya_spreadsheet::new_file_empty_worksheet(),
    };

    let sheet = book
        .new_sheet(sheet_name)
        .map_err(|e| EtlError::ProcessingError {
            message: format!("could not create sheet '{}': {}", sheet_name, e),
        })?;

    for (col, name) in result.columns.iter().enumerate() {
        let cell = sheet.get_cell_mut((col as u32 + 1, 1));
        cell.set_value(name.as_str());
        let style = cell.get_style_mut();
        style.get_font_mut().set_bold(true);
        style.set_background_color(Color::COLOR_YELLOW);
    }

    for (row_index, record) in result.records.iter().enumerate() {
        let row = row_index as u32 + 2;
        for (col, name) in result.columns.iter().enumerate() {
            // Absent fields leave the cell blank.
            if let Some(value) = record.values.get(name) {
                sheet
                    .get_cell_mut((col as u32 + 1, row))
                    .set_value(value.as_str());
            }
        }
    }

    let mut cursor = Cursor::new(Vec::new());
    umya_spreadsheet::writer::xlsx::write_writer(&book, &mut cursor)?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Record;
    use std::collections::HashMap;

    fn record(pairs: &[(&str, &str)]) -> Record {
        let mut values = HashMap::new();
        for (k, v) in pairs {
            values.insert(k.to_string(), v.to_string());
        }
        Record { values }
    }

    fn sample_result() -> TransformResult {
        TransformResult {
            records: vec![
                record(&[("Color", "Red"), ("Voltage", "2.0V")]),
                record(&[("Color", "Green")]),
            ],
            columns: vec!["Color".to_string(), "Voltage".to_string()],
        }
    }

    fn read_book(bytes: &[u8]) -> umya_spreadsheet::Spreadsheet {
        umya_spreadsheet::reader::xlsx::read_reader(Cursor::new(bytes), true).unwrap()
    }

    #[test]
    fn test_empty_result_is_no_data() {
        let empty = TransformResult {
            records: vec![],
            columns: vec![],
        };
        assert!(matches!(
            build_workbook(None, "LedsParsed", &empty),
            Err(EtlError::NoDataError)
        ));
    }

    #[test]
    fn test_fresh_workbook_has_single_sheet_with_header_and_rows() {
        let bytes = build_workbook(None, "LedsParsed", &sample_result()).unwrap();

        let book = read_book(&bytes);
        assert_eq!(book.get_sheet_collection().len(), 1);

        let sheet = book.get_sheet_by_name("LedsParsed").unwrap();
        assert_eq!(sheet.get_value((1, 1)), "Color");
        assert_eq!(sheet.get_value((2, 1)), "Voltage");
        assert_eq!(sheet.get_value((1, 2)), "Red");
        assert_eq!(sheet.get_value((2, 2)), "2.0V");
        assert_eq!(sheet.get_value((1, 3)), "Green");
        // Voltage was absent from the second record.
        assert_eq!(sheet.get_value((2, 3)), "");
    }

    #[test]
    fn test_existing_sheet_is_replaced_and_siblings_kept() {
        // Seed a workbook with an unrelated sheet and stale target contents.
        let mut seed = umya_spreadsheet::new_file_empty_worksheet();
        let keep = seed.new_sheet("Inventory").unwrap();
        keep.get_cell_mut((1, 1)).set_value("untouched");
        let stale = seed.new_sheet("LedsParsed").unwrap();
        stale.get_cell_mut((1, 1)).set_value("stale header");
        stale.get_cell_mut((3, 7)).set_value("stale cell");
        let mut cursor = Cursor::new(Vec::new());
        umya_spreadsheet::writer::xlsx::write_writer(&seed, &mut cursor).unwrap();

        let bytes =
            build_workbook(Some(&cursor.into_inner()), "LedsParsed", &sample_result()).unwrap();

        let book = read_book(&bytes);
        assert_eq!(book.get_sheet_collection().len(), 2);
        assert_eq!(
            book.get_sheet_by_name("Inventory").unwrap().get_value((1, 1)),
            "untouched"
        );

        let sheet = book.get_sheet_by_name("LedsParsed").unwrap();
        assert_eq!(sheet.get_value((1, 1)), "Color");
        assert_eq!(sheet.get_value((3, 7)), "");
    }

    #[test]
    fn test_new_sheet_is_appended_to_existing_workbook() {
        let mut seed = umya_spreadsheet::new_file_empty_worksheet();
        seed.new_sheet("Inventory").unwrap();
        let mut cursor = Cursor::new(Vec::new());
        umya_spreadsheet::writer::xlsx::write_writer(&seed, &mut cursor).unwrap();

        let bytes =
            build_workbook(Some(&cursor.into_inner()), "LedsParsed", &sample_result()).unwrap();

        let book = read_book(&bytes);
        assert_eq!(book.get_sheet_collection().len(), 2);
        assert!(book.get_sheet_by_name("Inventory").is_some());
        assert!(book.get_sheet_by_name("LedsParsed").is_some());
    }
}
