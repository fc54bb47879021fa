mod state;
mod ui;

use crate::export::{build_results_workbook, EXPORT_FILE_NAME};
use crate::upload::{is_sheet_file, GraderConfig, SheetUploader, UploadOutcome};
use eframe::{egui, App};
use ignore::Walk;
pub use state::{Notification, NotificationKind, UploadState};
use std::path::Path;
use std::sync::mpsc as std_mpsc;

pub struct ExamUploader {
    config: GraderConfig,
    state: UploadState,
}

impl ExamUploader {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GraderConfig) -> Self {
        println!(
            "Initializing Exam Sheet Uploader (endpoint: {})",
            config.endpoint
        );
        Self {
            config,
            state: UploadState::default(),
        }
    }

    pub fn reset(&mut self) {
        println!("Resetting application state");
        self.state.clear();
    }

    /// Walks a folder (honoring .gitignore files) and queues every file in
    /// a recognized sheet format.
    pub fn add_sheets_from_folder(&mut self, folder: &Path) {
        let mut added = 0;
        for entry in Walk::new(folder) {
            if let Ok(entry) = entry {
                let path = entry.path();
                if path.is_file() && is_sheet_file(path) {
                    self.state.add_pending(path.to_path_buf());
                    added += 1;
                }
            }
        }

        println!("Added {} exam sheets from {}", added, folder.display());
        if added == 0 {
            self.state.notification = Some(Notification::warning(
                "No exam sheets found in the selected folder",
            ));
        }
    }

    pub fn start_upload(&mut self) {
        if self.state.is_uploading {
            // At most one upload may be outstanding; a second submit is ignored.
            return;
        }
        if self.state.pending_files.is_empty() {
            self.state.notification = Some(Notification::error("No exam sheets selected"));
            return;
        }

        println!(
            "Uploading {} exam sheets to {}",
            self.state.pending_files.len(),
            self.config.endpoint
        );
        self.state.is_uploading = true;
        self.state.notification = None;

        let uploader = SheetUploader::new(self.config.clone());
        let files = self.state.pending_files.clone();
        let (sender, receiver) = std_mpsc::channel();
        self.state.outcome_receiver = Some(receiver);

        std::thread::spawn(move || {
            // Exactly one outcome per upload, whatever happens, so the
            // in-flight flag always resets.
            let outcome = match tokio::runtime::Runtime::new() {
                Ok(rt) => match rt.block_on(uploader.process_sheets(&files)) {
                    Ok(rows) => UploadOutcome::Success(rows),
                    Err(e) => UploadOutcome::Error(e),
                },
                Err(e) => UploadOutcome::Error(format!("Failed to start worker runtime: {}", e)),
            };
            sender.send(outcome).unwrap_or_default();
        });
    }

    pub fn update_state(&mut self, ctx: &egui::Context) {
        if self.state.is_uploading {
            ctx.request_repaint();
        }

        let outcome = self
            .state
            .outcome_receiver
            .as_ref()
            .and_then(|receiver| receiver.try_recv().ok());

        if let Some(outcome) = outcome {
            self.state.is_uploading = false;
            self.state.outcome_receiver = None;

            match outcome {
                UploadOutcome::Success(rows) => {
                    println!("Processed {} exam sheets", rows.len());
                    self.state.results = rows;
                    self.state.notification =
                        Some(Notification::success("Exam sheets processed successfully!"));
                }
                UploadOutcome::Error(err) => {
                    eprintln!("Upload error: {}", err);
                    self.state.notification = Some(Notification::error(format!(
                        "Failed to process exam sheets: {}",
                        err
                    )));
                }
            }
            ctx.request_repaint();
        }
    }

    pub fn export_results(&mut self) {
        if self.state.results.is_empty() {
            self.state.notification = Some(Notification::warning("No results to export."));
            return;
        }

        let buffer = match build_results_workbook(&self.state.results) {
            Ok(buffer) => buffer,
            Err(e) => {
                eprintln!("Export error: {}", e);
                self.state.notification =
                    Some(Notification::error(format!("Failed to build spreadsheet: {}", e)));
                return;
            }
        };

        let Some(path) = rfd::FileDialog::new()
            .add_filter("Excel Workbook", &["xlsx"])
            .set_file_name(EXPORT_FILE_NAME)
            .save_file()
        else {
            return;
        };

        match std::fs::write(&path, &buffer) {
            Ok(()) => {
                println!(
                    "Exported {} rows to {}",
                    self.state.results.len(),
                    path.display()
                );
                self.state.notification = Some(Notification::success(format!(
                    "Results exported to {}",
                    path.display()
                )));
                self.state.last_export = Some(path);
            }
            Err(e) => {
                eprintln!("Export error: {}", e);
                self.state.notification = Some(Notification::error(format!(
                    "Failed to write {}: {}",
                    path.display(),
                    e
                )));
            }
        }
    }
}

impl App for ExamUploader {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.render(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::ResultRow;
    use std::path::PathBuf;

    fn app() -> ExamUploader {
        ExamUploader {
            config: GraderConfig::default(),
            state: UploadState::default(),
        }
    }

    #[test]
    fn failed_upload_preserves_results_and_formats_notification() {
        let ctx = egui::Context::default();
        let mut app = app();
        app.state.results = vec![ResultRow {
            filename: "old.png".to_string(),
            ..Default::default()
        }];
        app.state.is_uploading = true;

        let (sender, receiver) = std_mpsc::channel();
        app.state.outcome_receiver = Some(receiver);
        sender
            .send(UploadOutcome::Error("bad file".to_string()))
            .unwrap();

        app.update_state(&ctx);

        assert!(!app.state.is_uploading);
        assert_eq!(app.state.results.len(), 1);
        assert_eq!(app.state.results[0].filename, "old.png");
        let notification = app.state.notification.expect("notification");
        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(notification.text, "Failed to process exam sheets: bad file");
    }

    #[test]
    fn successful_upload_replaces_results_atomically() {
        let ctx = egui::Context::default();
        let mut app = app();
        app.state.results = vec![ResultRow {
            filename: "old.png".to_string(),
            ..Default::default()
        }];
        app.state.is_uploading = true;

        let rows = vec![
            ResultRow {
                filename: "a.png".to_string(),
                total_questions: 10,
                correct_answers: 7,
                incorrect_answers: 2,
                unanswered_questions: 1,
                percentage: 70.0,
            },
            ResultRow {
                filename: "b.png".to_string(),
                ..Default::default()
            },
        ];
        let (sender, receiver) = std_mpsc::channel();
        app.state.outcome_receiver = Some(receiver);
        sender.send(UploadOutcome::Success(rows)).unwrap();

        app.update_state(&ctx);

        assert!(!app.state.is_uploading);
        assert_eq!(app.state.results.len(), 2);
        assert_eq!(app.state.results[0].filename, "a.png");
        let notification = app.state.notification.expect("notification");
        assert_eq!(notification.kind, NotificationKind::Success);
    }

    #[test]
    fn in_flight_flag_resets_on_either_outcome() {
        let ctx = egui::Context::default();
        for outcome in [
            UploadOutcome::Success(Vec::new()),
            UploadOutcome::Error("down".to_string()),
        ] {
            let mut app = app();
            assert!(!app.state.is_uploading);

            app.state.is_uploading = true;
            let (sender, receiver) = std_mpsc::channel();
            app.state.outcome_receiver = Some(receiver);
            sender.send(outcome).unwrap();

            app.update_state(&ctx);
            assert!(!app.state.is_uploading);
            assert!(app.state.outcome_receiver.is_none());
        }
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut app = app();
        app.state.add_pending(PathBuf::from("a.png"));
        app.state.is_uploading = true;

        app.start_upload();

        assert!(app.state.outcome_receiver.is_none());
    }

    #[test]
    fn submit_with_no_files_never_starts() {
        let mut app = app();

        app.start_upload();

        assert!(!app.state.is_uploading);
        assert!(app.state.outcome_receiver.is_none());
        let notification = app.state.notification.expect("notification");
        assert_eq!(notification.kind, NotificationKind::Error);
    }

    #[test]
    fn export_with_no_results_warns_and_writes_nothing() {
        let mut app = app();

        app.export_results();

        let notification = app.state.notification.expect("notification");
        assert_eq!(notification.kind, NotificationKind::Warning);
        assert_eq!(notification.text, "No results to export.");
        assert!(app.state.last_export.is_none());
    }
}
