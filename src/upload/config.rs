pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/process-answer-sheets/";

/// Where to send the grading request. Built once in `main` and handed to
/// the uploader rather than baked into the request code.
#[derive(Clone, Debug)]
pub struct GraderConfig {
    pub endpoint: String,
}

impl Default for GraderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl GraderConfig {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            endpoint: std::env::var("EXAM_GRADER_URL").unwrap_or(default.endpoint),
        }
    }
}
