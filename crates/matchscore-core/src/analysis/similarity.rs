//! TF-IDF vectors over a two-document corpus and their cosine similarity.

use crate::analysis::outcome::MatchScore;
use crate::lexicon::Lexicon;
use crate::model::NormalizedText;
use crate::text::normalize;
use std::collections::{BTreeMap, BTreeSet};

/// Shortest token that becomes a vocabulary term.
pub const MIN_TERM_LEN: usize = 2;

/// Weight vectors of both documents over their joint vocabulary.
///
/// `resume[i]` and `job[i]` are the weights of `vocabulary[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct TermVectors {
    pub vocabulary: Vec<String>,
    pub resume: Vec<f64>,
    pub job: Vec<f64>,
}

/// Output of [`score`]: the score plus both normalized texts.
#[derive(Debug, Clone)]
pub struct ScoreOutcome {
    pub score: MatchScore,
    pub resume: NormalizedText,
    pub job: NormalizedText,
}

/// Smoothed inverse document frequency: `ln((1 + n) / (1 + df)) + 1`.
///
/// With two documents a shared term gets exactly 1 and a term unique to one
/// document gets `1 + ln(1.5)`.
pub fn smoothed_idf(document_frequency: usize, document_count: usize) -> f64 {
    ((1.0 + document_count as f64) / (1.0 + document_frequency as f64)).ln() + 1.0
}

fn term_counts(text: &NormalizedText) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for token in text.tokens().filter(|t| t.len() >= MIN_TERM_LEN) {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}

/// Build TF-IDF vectors for exactly two documents.
///
/// Term frequency is the raw count, not scaled by document length.
pub fn vectorize(resume: &NormalizedText, job: &NormalizedText) -> TermVectors {
    let resume_counts = term_counts(resume);
    let job_counts = term_counts(job);

    let vocabulary: BTreeSet<&str> = resume_counts
        .keys()
        .chain(job_counts.keys())
        .copied()
        .collect();

    let mut vectors = TermVectors {
        vocabulary: Vec::with_capacity(vocabulary.len()),
        resume: Vec::with_capacity(vocabulary.len()),
        job: Vec::with_capacity(vocabulary.len()),
    };

    for term in vocabulary {
        let in_resume = resume_counts.get(term).copied().unwrap_or(0);
        let in_job = job_counts.get(term).copied().unwrap_or(0);
        let df = usize::from(in_resume > 0) + usize::from(in_job > 0);
        let idf = smoothed_idf(df, 2);

        vectors.vocabulary.push(term.to_string());
        vectors.resume.push(in_resume as f64 * idf);
        vectors.job.push(in_job as f64 * idf);
    }

    vectors
}

/// Cosine of the angle between two equal-length vectors; 0 if either is zero.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Score two already-normalized texts.
pub fn score_normalized(resume: &NormalizedText, job: &NormalizedText) -> MatchScore {
    let vectors = vectorize(resume, job);
    let similarity = cosine_similarity(&vectors.resume, &vectors.job);
    tracing::debug!(
        vocabulary = vectors.vocabulary.len(),
        similarity,
        "computed cosine similarity"
    );
    MatchScore::from_similarity(similarity)
}

/// Normalize both raw texts and score them.
pub fn score(resume_text: &str, job_text: &str, lexicon: &Lexicon) -> ScoreOutcome {
    let resume = normalize(resume_text, lexicon);
    let job = normalize(job_text, lexicon);

    if resume.is_empty() || job.is_empty() {
        tracing::warn!(
            resume_tokens = resume.token_count(),
            job_tokens = job.token_count(),
            "a document has no content words left after normalization, scoring 0"
        );
    }

    let score = score_normalized(&resume, &job);
    ScoreOutcome { score, resume, job }
}
