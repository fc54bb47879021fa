use crate::upload::config::GraderConfig;
use crate::upload::types::{PendingFile, ResultRow};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::fs;

/// Field name the grading service expects the file parts under.
const FILE_FIELD: &str = "files";

const FALLBACK_ERROR: &str = "Please try again.";

#[derive(Deserialize)]
struct ProcessResponse {
    results: Vec<SheetRecord>,
}

#[derive(Deserialize, Default)]
struct SheetRecord {
    filename: Option<String>,
    #[serde(rename = "Total Questions")]
    total_questions: Option<u32>,
    #[serde(rename = "Correct Answers")]
    correct_answers: Option<u32>,
    #[serde(rename = "Incorrect Answers")]
    incorrect_answers: Option<u32>,
    #[serde(rename = "Unanswered Questions")]
    unanswered_questions: Option<u32>,
    #[serde(rename = "Percentage")]
    percentage: Option<f64>,
}

#[derive(Deserialize, Default)]
struct ErrorBody {
    detail: Option<String>,
    error: Option<String>,
}

#[derive(Clone)]
pub struct SheetUploader {
    config: GraderConfig,
}

impl SheetUploader {
    pub fn new(config: GraderConfig) -> Self {
        Self { config }
    }

    /// Sends every pending file in a single multipart request and maps the
    /// response into display rows. The batch succeeds or fails as one unit;
    /// there are no per-file retries.
    pub async fn process_sheets(&self, files: &[PendingFile]) -> Result<Vec<ResultRow>, String> {
        let mut form = Form::new();
        for file in files {
            let bytes =
                fs::read(&file.path).map_err(|e| format!("Failed to read {}: {}", file.name, e))?;
            form = form.part(FILE_FIELD, Part::bytes(bytes).file_name(file.name.clone()));
        }

        let client = reqwest::Client::new();
        let response = client
            .post(&self.config.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| format!("Failed to read response: {}", e))?;

        if !status.is_success() {
            return Err(server_error_message(&body));
        }

        let parsed: ProcessResponse =
            serde_json::from_str(&body).map_err(|_| server_error_message(&body))?;

        Ok(parsed.results.into_iter().map(to_result_row).collect())
    }
}

fn to_result_row(record: SheetRecord) -> ResultRow {
    ResultRow {
        filename: record.filename.unwrap_or_default(),
        total_questions: record.total_questions.unwrap_or(0),
        correct_answers: record.correct_answers.unwrap_or(0),
        incorrect_answers: record.incorrect_answers.unwrap_or(0),
        unanswered_questions: record.unanswered_questions.unwrap_or(0),
        percentage: record.percentage.unwrap_or(0.0),
    }
}

/// The server's `detail` string wins over `error`; a generic fallback
/// covers bodies carrying neither.
fn server_error_message(body: &str) -> String {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    parsed
        .detail
        .or(parsed.error)
        .unwrap_or_else(|| FALLBACK_ERROR.to_string())
}
