use std::fmt;
use std::path::PathBuf;

/// Which of the two pipeline inputs was not supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Resume,
    JobDescription,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Resume => write!(f, "please supply your resume"),
            InputKind::JobDescription => write!(f, "please supply a job description"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("missing input: {0}")]
    MissingInput(InputKind),

    #[error("could not extract text from document: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("failed to load lexicon from {path}: {reason}")]
    LexiconLoad { path: PathBuf, reason: String },

    #[error("invalid lexicon: {0}")]
    LexiconInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MatchError {
    /// True for failures that happened while turning a document into text.
    pub fn is_extraction(&self) -> bool {
        matches!(
            self,
            MatchError::Extraction(_)
                | MatchError::PdftotextNotFound
                | MatchError::PdftotextFailed { .. }
        )
    }
}
