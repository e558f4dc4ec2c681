use crate::analysis::outcome::KeywordEntry;
use crate::lexicon::Lexicon;
use crate::model::NormalizedText;
use crate::tagging;
use crate::text::tokenize;
use std::collections::{HashMap, HashSet};

pub const DEFAULT_TOP_KEYWORDS: usize = 10;

/// Tokens this short are never keywords.
const MAX_SHORT_TOKEN_LEN: usize = 2;

/// Most frequent nouns and adjectives of a normalized text.
///
/// Ties keep the order in which the terms first appear.
pub fn extract_keywords(
    text: &NormalizedText,
    lexicon: &Lexicon,
    top_n: usize,
) -> Vec<KeywordEntry> {
    let tokens: Vec<&str> = tokenize(text.as_str())
        .into_iter()
        .filter(|t| t.chars().count() > MAX_SHORT_TOKEN_LEN)
        .collect();

    let mut entries: Vec<KeywordEntry> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for tagged in tagging::tag(&tokens, lexicon) {
        if !(tagged.tag.is_noun() || tagged.tag.is_adjective()) {
            continue;
        }
        match index.get(tagged.token) {
            Some(&i) => entries[i].count += 1,
            None => {
                index.insert(tagged.token, entries.len());
                entries.push(KeywordEntry {
                    term: tagged.token.to_string(),
                    count: 1,
                });
            }
        }
    }

    // sort_by is stable, so first-seen order survives among equal counts
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(top_n);
    entries
}

/// Keywords whose term never occurs in the resume.
pub fn missing_keywords(keywords: &[KeywordEntry], resume: &NormalizedText) -> Vec<String> {
    let present: HashSet<&str> = resume.tokens().collect();
    keywords
        .iter()
        .filter(|k| !present.contains(k.term.as_str()))
        .map(|k| k.term.clone())
        .collect()
}
