mod config;
mod sheet_uploader;
mod types;

pub use config::GraderConfig;
pub use sheet_uploader::SheetUploader;
pub use types::{is_sheet_file, PendingFile, ResultRow, UploadOutcome, SHEET_EXTENSIONS};
