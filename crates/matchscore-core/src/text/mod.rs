pub mod normalize;

pub use normalize::{clean_text, normalize, remove_stopwords};

use unicode_segmentation::UnicodeSegmentation;

/// Split text into word tokens on Unicode word boundaries.
///
/// Punctuation and whitespace never become tokens. The normalizer and the
/// keyword extractor both go through here so they agree on boundaries.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.unicode_words().collect()
}
