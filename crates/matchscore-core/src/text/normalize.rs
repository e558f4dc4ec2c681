use crate::lexicon::Lexicon;
use crate::model::NormalizedText;
use crate::text::tokenize;

/// Normalize raw document text for scoring.
///
/// Steps:
/// 1. Lowercase
/// 2. Drop everything that is not an ASCII letter or whitespace (digits,
///    punctuation and accented letters included)
/// 3. Collapse whitespace runs to single spaces and trim
/// 4. Tokenize
/// 5. Remove stopwords
///
/// Already-normalized text is a fixed point.
pub fn normalize(text: &str, lexicon: &Lexicon) -> NormalizedText {
    remove_stopwords(&clean_text(text), lexicon)
}

/// Steps 1-3 of [`normalize`].
pub fn clean_text(text: &str) -> String {
    let lower = text.to_lowercase();

    let mut cleaned = String::with_capacity(lower.len());
    let mut pending_space = false;
    for c in lower.chars() {
        if c.is_whitespace() {
            pending_space = true;
        } else if c.is_ascii_lowercase() {
            if pending_space && !cleaned.is_empty() {
                cleaned.push(' ');
            }
            pending_space = false;
            cleaned.push(c);
        }
        // anything else is dropped without breaking the word
    }

    cleaned
}

/// Steps 4-5 of [`normalize`].
pub fn remove_stopwords(text: &str, lexicon: &Lexicon) -> NormalizedText {
    NormalizedText::from_tokens(
        tokenize(text)
            .into_iter()
            .filter(|token| !lexicon.is_stopword(token)),
    )
}
