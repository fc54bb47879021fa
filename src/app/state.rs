use crate::upload::{PendingFile, ResultRow, UploadOutcome};
use eframe::egui::Color32;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
}

/// Transient user-facing message shown in the footer. Replaced by the next
/// notification, never queued.
#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Warning,
            text: text.into(),
        }
    }

    pub fn color(&self) -> Color32 {
        match self.kind {
            NotificationKind::Success => Color32::from_rgb(0, 180, 0),
            NotificationKind::Error => Color32::from_rgb(220, 50, 50),
            NotificationKind::Warning => Color32::from_rgb(230, 160, 0),
        }
    }
}

#[derive(Default)]
pub struct UploadState {
    pub pending_files: Vec<PendingFile>,
    pub results: Vec<ResultRow>,
    pub is_uploading: bool,
    pub notification: Option<Notification>,
    pub last_export: Option<PathBuf>,
    pub outcome_receiver: Option<Receiver<UploadOutcome>>,
    next_id: u64,
}

impl UploadState {
    /// Appends a pending file and returns its identifier. No type, size,
    /// or duplicate checks happen here.
    pub fn add_pending(&mut self, path: PathBuf) -> u64 {
        self.next_id += 1;
        let file = PendingFile::new(self.next_id, path);
        let id = file.id;
        self.pending_files.push(file);
        id
    }

    /// No-op when the identifier is absent.
    pub fn remove_pending(&mut self, id: u64) {
        self.pending_files.retain(|f| f.id != id);
    }

    pub fn clear(&mut self) {
        *self = UploadState::default();
    }
}
