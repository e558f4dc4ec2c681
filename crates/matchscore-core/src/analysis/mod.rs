pub mod keywords;
pub mod outcome;
pub mod similarity;

pub use keywords::{extract_keywords, missing_keywords, DEFAULT_TOP_KEYWORDS};
pub use outcome::{KeywordEntry, MatchBand, MatchReport, MatchScore};
pub use similarity::{score, ScoreOutcome};
