use matchscore_core::error::MatchError;
use matchscore_core::extraction::native::NativePdfExtractor;
use matchscore_core::extraction::pdftotext::PdftotextExtractor;
use matchscore_core::extraction::PdfExtractor;
use matchscore_core::model::{Document, DocumentFormat};
use matchscore_core::AnalyzeOptions;
use std::path::PathBuf;

use crate::commands::{load_lexicon_arg, read_text_arg};
use crate::output;
use crate::Backend;

pub struct ScoreArgs {
    pub resume: PathBuf,
    pub job: Option<PathBuf>,
    pub job_text: Option<String>,
    pub top: usize,
    pub output_format: String,
    pub backend: Backend,
    pub lexicon: Option<PathBuf>,
}

fn select_extractor(backend: Backend) -> Box<dyn PdfExtractor> {
    match backend {
        Backend::Pdftotext => Box::new(PdftotextExtractor::new()),
        Backend::Native => Box::new(NativePdfExtractor::new()),
        Backend::Auto => {
            if PdftotextExtractor::is_available() {
                Box::new(PdftotextExtractor::new())
            } else {
                Box::new(NativePdfExtractor::new())
            }
        }
    }
}

pub fn run(args: ScoreArgs) -> Result<(), MatchError> {
    let lexicon = load_lexicon_arg(args.lexicon.as_deref())?;

    // A missing job description is reported by the core, before extraction
    let job_text = match (&args.job, args.job_text) {
        (Some(path), _) => read_text_arg(path)?,
        (None, Some(text)) => text,
        (None, None) => String::new(),
    };

    let bytes = std::fs::read(&args.resume)?;
    let document = Document {
        bytes,
        format: DocumentFormat::from_path(&args.resume),
    };

    let extractor = select_extractor(args.backend);
    tracing::debug!(
        backend = extractor.backend_name(),
        resume = %args.resume.display(),
        "scoring"
    );

    let options = AnalyzeOptions {
        top_keywords: args.top,
    };
    let report = matchscore_core::analyze_document(
        document,
        &job_text,
        extractor.as_ref(),
        &lexicon,
        &options,
    )?;

    match args.output_format.as_str() {
        "json" => output::json::print(&report)?,
        _ => output::table::print(&report),
    }

    Ok(())
}
