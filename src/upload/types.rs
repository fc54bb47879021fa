use std::fs;
use std::path::{Path, PathBuf};

/// File formats the grading service accepts.
pub const SHEET_EXTENSIONS: [&str; 8] = [
    "jpg", "jpeg", "png", "bmp", "tif", "tiff", "webp", "pdf",
];

#[derive(Debug, Clone)]
pub struct PendingFile {
    pub id: u64,
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
}

impl PendingFile {
    pub fn new(id: u64, path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        let size = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

        Self {
            id,
            name,
            path,
            size,
        }
    }
}

/// Per-file statistics returned by the grading service. Fields the
/// response leaves out are zeroed, not rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultRow {
    pub filename: String,
    pub total_questions: u32,
    pub correct_answers: u32,
    pub incorrect_answers: u32,
    pub unanswered_questions: u32,
    pub percentage: f64,
}

/// Outcome of one upload batch, sent from the worker thread back to the UI.
#[derive(Debug, Clone)]
pub enum UploadOutcome {
    Success(Vec<ResultRow>),
    Error(String),
}

pub fn is_sheet_file(path: &Path) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => SHEET_EXTENSIONS.contains(&ext.to_lowercase().as_str()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_sheet_extensions() {
        assert!(is_sheet_file(Path::new("scan.png")));
        assert!(is_sheet_file(Path::new("scan.JPG")));
        assert!(is_sheet_file(Path::new("/some/dir/sheet.pdf")));
        assert!(!is_sheet_file(Path::new("notes.txt")));
        assert!(!is_sheet_file(Path::new("no_extension")));
    }

    #[test]
    fn pending_file_takes_name_from_path() {
        let file = PendingFile::new(7, PathBuf::from("/tmp/sheets/a.png"));
        assert_eq!(file.id, 7);
        assert_eq!(file.name, "a.png");
    }

    #[test]
    fn missing_file_has_zero_size() {
        let file = PendingFile::new(1, PathBuf::from("/does/not/exist.png"));
        assert_eq!(file.size, 0);
    }
}
