pub mod analysis;
pub mod error;
pub mod extraction;
pub mod lexicon;
pub mod model;
pub mod tagging;
pub mod text;

use analysis::{MatchReport, ScoreOutcome, DEFAULT_TOP_KEYWORDS};
use error::{InputKind, MatchError};
use extraction::PdfExtractor;
use lexicon::Lexicon;
use model::Document;

/// Options for a single comparison.
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// How many job description keywords to report.
    pub top_keywords: usize,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        AnalyzeOptions {
            top_keywords: DEFAULT_TOP_KEYWORDS,
        }
    }
}

/// Main API entry point: score a resume document against a job description.
///
/// Both inputs are checked before anything else runs. Extraction failures
/// end the request; a resume or job text with no content words simply
/// scores 0.
pub fn analyze_document(
    resume: Document,
    job_text: &str,
    extractor: &dyn PdfExtractor,
    lexicon: &Lexicon,
    options: &AnalyzeOptions,
) -> Result<MatchReport, MatchError> {
    if resume.is_empty() {
        return Err(MatchError::MissingInput(InputKind::Resume));
    }
    check_job_text(job_text)?;

    let format = resume.format;
    let resume_text = extraction::extract_text(resume, extractor)?;
    tracing::debug!(%format, chars = resume_text.len(), "extracted resume text");

    Ok(build_report(&resume_text, job_text, lexicon, options))
}

/// Score a PDF resume given as bytes.
pub fn analyze_pdf(
    pdf_bytes: &[u8],
    job_text: &str,
    extractor: &dyn PdfExtractor,
    lexicon: &Lexicon,
    options: &AnalyzeOptions,
) -> Result<MatchReport, MatchError> {
    analyze_document(Document::pdf(pdf_bytes), job_text, extractor, lexicon, options)
}

/// Score a resume that is already plain text.
pub fn analyze_text(
    resume_text: &str,
    job_text: &str,
    lexicon: &Lexicon,
    options: &AnalyzeOptions,
) -> Result<MatchReport, MatchError> {
    if resume_text.trim().is_empty() {
        return Err(MatchError::MissingInput(InputKind::Resume));
    }
    check_job_text(job_text)?;

    Ok(build_report(resume_text, job_text, lexicon, options))
}

fn check_job_text(job_text: &str) -> Result<(), MatchError> {
    if job_text.trim().is_empty() {
        return Err(MatchError::MissingInput(InputKind::JobDescription));
    }
    Ok(())
}

fn build_report(
    resume_text: &str,
    job_text: &str,
    lexicon: &Lexicon,
    options: &AnalyzeOptions,
) -> MatchReport {
    let ScoreOutcome { score, resume, job } = analysis::score(resume_text, job_text, lexicon);
    tracing::debug!(
        resume_tokens = resume.token_count(),
        job_tokens = job.token_count(),
        %score,
        "scored resume against job description"
    );

    let keywords = analysis::extract_keywords(&job, lexicon, options.top_keywords);
    let missing_keywords = analysis::missing_keywords(&keywords, &resume);

    MatchReport {
        match_score: score,
        band: score.band(),
        keywords,
        missing_keywords,
    }
}
