use crate::upload::ResultRow;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

/// Column order matches the on-screen results table.
pub const RESULT_COLUMNS: [&str; 6] = [
    "File Name",
    "Total Questions",
    "Correct Answers",
    "Incorrect Answers",
    "Unanswered Questions",
    "Percentage",
];

pub const EXPORT_FILE_NAME: &str = "Exam_Results.xlsx";

const COLUMN_WIDTH: f64 = 20.0;

/// Builds the export workbook in memory: one `Results` worksheet, the fixed
/// header row, then one data row per result in display order.
pub fn build_results_workbook(rows: &[ResultRow]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let mut worksheet = Worksheet::new();
    worksheet.set_name("Results")?;

    for (col, header) in RESULT_COLUMNS.iter().enumerate() {
        worksheet.set_column_width(col as u16, COLUMN_WIDTH)?;
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet.write_string(r, 0, row.filename.as_str())?;
        worksheet.write_number(r, 1, row.total_questions as f64)?;
        worksheet.write_number(r, 2, row.correct_answers as f64)?;
        worksheet.write_number(r, 3, row.incorrect_answers as f64)?;
        worksheet.write_number(r, 4, row.unanswered_questions as f64)?;
        worksheet.write_number(r, 5, row.percentage)?;
    }

    workbook.push_worksheet(worksheet);
    workbook.save_to_buffer()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_order_is_fixed() {
        assert_eq!(
            RESULT_COLUMNS,
            [
                "File Name",
                "Total Questions",
                "Correct Answers",
                "Incorrect Answers",
                "Unanswered Questions",
                "Percentage",
            ]
        );
    }

    #[test]
    fn one_row_workbook_serializes_to_xlsx_bytes() {
        let rows = vec![ResultRow {
            filename: "a.png".to_string(),
            total_questions: 10,
            correct_answers: 7,
            incorrect_answers: 2,
            unanswered_questions: 1,
            percentage: 70.0,
        }];

        let buffer = build_results_workbook(&rows).unwrap();
        // xlsx files are zip archives
        assert_eq!(&buffer[..2], b"PK");
        assert!(buffer.len() > 100);
    }

    #[test]
    fn empty_result_list_still_builds_a_header_sheet() {
        let buffer = build_results_workbook(&[]).unwrap();
        assert_eq!(&buffer[..2], b"PK");
    }
}
