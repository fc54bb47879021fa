mod workbook;

pub use workbook::{build_results_workbook, EXPORT_FILE_NAME, RESULT_COLUMNS};
