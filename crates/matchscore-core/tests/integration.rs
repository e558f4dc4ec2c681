//! Integration tests for the analyze_* pipeline entry points.
//!
//! Uses a MockExtractor that returns pre-built PageContent without
//! invoking pdftotext, so these tests run without poppler-utils.

use matchscore_core::analysis::{KeywordEntry, MatchBand, MatchScore};
use matchscore_core::error::{InputKind, MatchError};
use matchscore_core::extraction::{PageContent, PdfExtractor};
use matchscore_core::lexicon::Lexicon;
use matchscore_core::model::Document;
use matchscore_core::{analyze_document, analyze_pdf, analyze_text, AnalyzeOptions};
use rust_decimal_macros::dec;
use std::sync::atomic::{AtomicUsize, Ordering};

const PDF_BYTES: &[u8] = b"%PDF-1.7 mock";

struct MockExtractor {
    pages: Vec<PageContent>,
    calls: AtomicUsize,
}

impl MockExtractor {
    fn new(pages: Vec<PageContent>) -> Self {
        MockExtractor {
            pages,
            calls: AtomicUsize::new(0),
        }
    }
}

impl PdfExtractor for MockExtractor {
    fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<PageContent>, MatchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.pages.clone())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

struct BrokenExtractor;

impl PdfExtractor for BrokenExtractor {
    fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<PageContent>, MatchError> {
        Err(MatchError::Extraction("xref table not found".into()))
    }

    fn backend_name(&self) -> &str {
        "broken"
    }
}

fn page(number: usize, text: &str) -> PageContent {
    PageContent {
        page_number: number,
        text: text.to_string(),
    }
}

fn english() -> Lexicon {
    Lexicon::english().unwrap()
}

// ---------------------------------------------------------------------------
// Test 1: Overlapping vocabulary lands in the "good" band
// ---------------------------------------------------------------------------
#[test]
fn overlapping_resume_scores_good() {
    let extractor = MockExtractor::new(vec![page(
        1,
        "Experienced Python developer with 5 years of backend experience",
    )]);

    let report = analyze_pdf(
        PDF_BYTES,
        "Looking for a Python developer with backend experience",
        &extractor,
        &english(),
        &AnalyzeOptions::default(),
    )
    .unwrap();

    // shared: python, developer, backend, experience
    assert_eq!(report.match_score.value(), dec!(58.03));
    assert_eq!(report.band, MatchBand::Good);
    let terms: Vec<&str> = report.keywords.iter().map(|k| k.term.as_str()).collect();
    assert_eq!(terms, vec!["python", "developer", "backend", "experience"]);
    assert!(report.missing_keywords.is_empty());
}

// ---------------------------------------------------------------------------
// Test 2: Disjoint vocabularies score zero, low band
// ---------------------------------------------------------------------------
#[test]
fn unrelated_resume_scores_low() {
    let extractor = MockExtractor::new(vec![page(
        1,
        "Graphic designer skilled in Photoshop and Illustrator",
    )]);

    let report = analyze_pdf(
        PDF_BYTES,
        "Seeking a certified public accountant with tax experience",
        &extractor,
        &english(),
        &AnalyzeOptions::default(),
    )
    .unwrap();

    assert_eq!(report.match_score, MatchScore::ZERO);
    assert_eq!(report.band, MatchBand::Low);
    assert_eq!(
        report.missing_keywords,
        vec!["certified", "public", "accountant", "tax", "experience"]
    );
}

// ---------------------------------------------------------------------------
// Test 3: Empty job description short-circuits before extraction
// ---------------------------------------------------------------------------
#[test]
fn empty_job_description_is_missing_input() {
    let extractor = MockExtractor::new(vec![page(1, "Rust engineer")]);

    let result = analyze_pdf(PDF_BYTES, "", &extractor, &english(), &AnalyzeOptions::default());

    assert!(matches!(
        result,
        Err(MatchError::MissingInput(InputKind::JobDescription))
    ));
    assert_eq!(extractor.calls.load(Ordering::SeqCst), 0);
}

// ---------------------------------------------------------------------------
// Test 4: No resume bytes is missing input, checked before the job text
// ---------------------------------------------------------------------------
#[test]
fn empty_resume_is_missing_input() {
    let extractor = MockExtractor::new(vec![page(1, "Rust engineer")]);

    let result = analyze_pdf(&[], "", &extractor, &english(), &AnalyzeOptions::default());

    assert!(matches!(
        result,
        Err(MatchError::MissingInput(InputKind::Resume))
    ));
    assert_eq!(extractor.calls.load(Ordering::SeqCst), 0);
}

// ---------------------------------------------------------------------------
// Test 5: Backend failure aborts the request
// ---------------------------------------------------------------------------
#[test]
fn corrupt_pdf_is_extraction_error() {
    let result = analyze_pdf(
        PDF_BYTES,
        "Rust engineer",
        &BrokenExtractor,
        &english(),
        &AnalyzeOptions::default(),
    );

    let err = result.unwrap_err();
    assert!(err.is_extraction());
}

// ---------------------------------------------------------------------------
// Test 6: A PDF with no text (scanned) is an extraction error, not a 0 score
// ---------------------------------------------------------------------------
#[test]
fn image_only_pdf_is_extraction_error() {
    let extractor = MockExtractor::new(vec![page(1, "\n"), page(2, "")]);

    let result = analyze_pdf(
        PDF_BYTES,
        "Rust engineer",
        &extractor,
        &english(),
        &AnalyzeOptions::default(),
    );

    assert!(matches!(result, Err(MatchError::Extraction(_))));
}

// ---------------------------------------------------------------------------
// Test 7: Multi-page resume is read in page order
// ---------------------------------------------------------------------------
#[test]
fn multi_page_resume_matches_single_page_text() {
    let split = MockExtractor::new(vec![
        page(1, "Senior Rust engineer.\n"),
        page(2, "Distributed systems, Kubernetes, Postgres.\n"),
    ]);
    let job = "Rust engineer for distributed systems on Kubernetes";

    let from_pdf = analyze_pdf(PDF_BYTES, job, &split, &english(), &AnalyzeOptions::default())
        .unwrap();
    let from_text = analyze_text(
        "Senior Rust engineer.\nDistributed systems, Kubernetes, Postgres.\n",
        job,
        &english(),
        &AnalyzeOptions::default(),
    )
    .unwrap();

    assert_eq!(from_pdf.match_score, from_text.match_score);
    assert_eq!(from_pdf.keywords, from_text.keywords);
}

// ---------------------------------------------------------------------------
// Test 8: Stopword-only job text scores 0 instead of failing
// ---------------------------------------------------------------------------
#[test]
fn stopword_only_job_text_scores_zero() {
    let report = analyze_text(
        "Rust engineer",
        "To be or not to be: 100%!",
        &english(),
        &AnalyzeOptions::default(),
    )
    .unwrap();

    assert_eq!(report.match_score, MatchScore::ZERO);
    assert!(report.keywords.is_empty());
    assert!(report.missing_keywords.is_empty());
}

// ---------------------------------------------------------------------------
// Test 9: Plain text documents skip the PDF backend
// ---------------------------------------------------------------------------
#[test]
fn plain_text_document_skips_pdf_backend() {
    let extractor = MockExtractor::new(vec![]);

    let report = analyze_document(
        Document::plain_text("Python developer"),
        "Python developer",
        &extractor,
        &english(),
        &AnalyzeOptions::default(),
    )
    .unwrap();

    assert_eq!(report.match_score.value(), dec!(100));
    assert_eq!(report.band, MatchBand::Excellent);
    assert_eq!(extractor.calls.load(Ordering::SeqCst), 0);
}

// ---------------------------------------------------------------------------
// Test 10: top_keywords caps the keyword list
// ---------------------------------------------------------------------------
#[test]
fn top_keywords_option_is_respected() {
    let options = AnalyzeOptions { top_keywords: 2 };
    let report = analyze_text(
        "Python developer",
        "Python developer, strong Python skills, backend systems",
        &english(),
        &options,
    )
    .unwrap();

    assert_eq!(
        report.keywords,
        vec![
            KeywordEntry {
                term: "python".into(),
                count: 2
            },
            KeywordEntry {
                term: "developer".into(),
                count: 1
            },
        ]
    );
}
