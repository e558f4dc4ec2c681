use crate::tagging::PosTag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A language definition: stopwords plus the part-of-speech model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// ISO 639-1 code, informational.
    pub language: String,
    /// Lowercase function words removed during normalization.
    pub stopwords: Vec<String>,
    /// Known words and their most likely tag. Checked before suffix rules.
    #[serde(default)]
    pub tags: BTreeMap<String, PosTag>,
    /// Base forms of verbs. A listed word tags as VB and its third-person
    /// form ("manages", "identifies", "pushes") as VBZ. Checked after `tags`.
    #[serde(default)]
    pub verbs: Vec<String>,
    /// Tried in order; the first matching suffix decides the tag.
    #[serde(default)]
    pub suffix_rules: Vec<SuffixRuleDef>,
    /// Applied in order after the initial tagging pass.
    #[serde(default)]
    pub context_rules: Vec<ContextRuleDef>,
    /// Tag for words no lexicon entry or suffix rule covers.
    #[serde(default = "default_tag")]
    pub default_tag: PosTag,
}

fn default_tag() -> PosTag {
    PosTag::Noun
}

/// Tag words ending in `suffix`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuffixRuleDef {
    pub suffix: String,
    pub tag: PosTag,
    /// Minimum word length for the rule to fire. The word must always be
    /// longer than the suffix itself.
    #[serde(default)]
    pub min_length: usize,
}

impl SuffixRuleDef {
    pub fn matches(&self, word: &str) -> bool {
        word.len() > self.suffix.len()
            && word.len() >= self.min_length
            && word.ends_with(&self.suffix)
    }
}

/// Rewrite `from` to `to` when the neighbouring tags match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextRuleDef {
    pub from: PosTag,
    pub to: PosTag,
    #[serde(default)]
    pub prev: Option<PosTag>,
    #[serde(default)]
    pub next: Option<PosTag>,
}

impl ContextRuleDef {
    pub fn applies(&self, current: PosTag, prev: Option<PosTag>, next: Option<PosTag>) -> bool {
        if current != self.from {
            return false;
        }
        let prev_ok = self.prev.map_or(true, |want| prev == Some(want));
        let next_ok = self.next.map_or(true, |want| next == Some(want));
        prev_ok && next_ok
    }
}
