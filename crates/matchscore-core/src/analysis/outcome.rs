use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Similarity as a percentage in [0, 100] with two decimal places.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MatchScore(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl MatchScore {
    pub const ZERO: MatchScore = MatchScore(Decimal::ZERO);

    /// Scale a cosine similarity to a percentage, rounding half to even.
    ///
    /// Rounding works on the exact binary value of the float, so 1.015
    /// (stored just below) rounds down to 1.01.
    pub fn from_similarity(similarity: f64) -> MatchScore {
        if !similarity.is_finite() {
            return MatchScore::ZERO;
        }
        let pct = similarity.clamp(0.0, 1.0) * 100.0;
        let value = Decimal::from_f64_retain(pct)
            .unwrap_or_default()
            .round_dp(2);
        MatchScore(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(0.0)
    }

    pub fn band(&self) -> MatchBand {
        MatchBand::from_score(*self)
    }
}

impl fmt::Display for MatchScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}

/// Qualitative tier shown next to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchBand {
    Low,
    Good,
    Excellent,
}

impl MatchBand {
    /// Below 40 is low, below 70 is good, anything else excellent.
    pub fn from_score(score: MatchScore) -> MatchBand {
        let value = score.value();
        if value < Decimal::from(40) {
            MatchBand::Low
        } else if value < Decimal::from(70) {
            MatchBand::Good
        } else {
            MatchBand::Excellent
        }
    }

    /// Banner text for the host to display.
    pub fn message(&self) -> &'static str {
        match self {
            MatchBand::Low => "Low Match! Consider tailoring your resume more closely.",
            MatchBand::Good => "Good Match! Your resume aligns fairly well.",
            MatchBand::Excellent => "Excellent Match! Your resume strongly aligns.",
        }
    }
}

impl fmt::Display for MatchBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchBand::Low => write!(f, "low"),
            MatchBand::Good => write!(f, "good"),
            MatchBand::Excellent => write!(f, "excellent"),
        }
    }
}

/// A salient noun or adjective and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub term: String,
    pub count: usize,
}

/// Result handed back to the host for one comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub match_score: MatchScore,
    pub band: MatchBand,
    /// Top job description keywords, most frequent first.
    pub keywords: Vec<KeywordEntry>,
    /// Keywords that never occur in the normalized resume.
    pub missing_keywords: Vec<String>,
}
