pub mod builtin;
pub mod schema;

use crate::error::MatchError;
use crate::tagging::PosTag;
use schema::{ContextRuleDef, LexiconDef, SuffixRuleDef};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Compiled, read-only language model shared by the normalizer and the
/// keyword extractor. Build it once and pass it by reference.
#[derive(Debug, Clone)]
pub struct Lexicon {
    name: String,
    version: String,
    stopwords: HashSet<String>,
    tags: HashMap<String, PosTag>,
    verbs: HashSet<String>,
    suffix_rules: Vec<SuffixRuleDef>,
    context_rules: Vec<ContextRuleDef>,
    default_tag: PosTag,
}

impl Lexicon {
    /// Validate a definition and compile it.
    pub fn from_def(def: LexiconDef) -> Result<Self, MatchError> {
        validate_lexicon(&def)?;
        Ok(Lexicon {
            name: def.name,
            version: def.version,
            stopwords: def.stopwords.into_iter().collect(),
            tags: def.tags.into_iter().collect(),
            verbs: def.verbs.into_iter().collect(),
            suffix_rules: def.suffix_rules,
            context_rules: def.context_rules,
            default_tag: def.default_tag,
        })
    }

    /// The built-in English lexicon.
    pub fn english() -> Result<Self, MatchError> {
        Lexicon::from_def(builtin::load_preset("en")?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }

    /// Tag from the word list, the verb list or suffix rules, ignoring
    /// context.
    pub fn lexical_tag(&self, word: &str) -> PosTag {
        if let Some(tag) = self.tags.get(word) {
            return *tag;
        }
        if self.verbs.contains(word) {
            return PosTag::Verb;
        }
        if self.is_third_person_verb(word) {
            return PosTag::VerbThirdPerson;
        }
        self.suffix_rules
            .iter()
            .find(|rule| rule.matches(word))
            .map(|rule| rule.tag)
            .unwrap_or(self.default_tag)
    }

    /// "identifies" -> "identify", "pushes" -> "push", "writes" -> "write".
    fn is_third_person_verb(&self, word: &str) -> bool {
        if let Some(stem) = word.strip_suffix("ies") {
            if self.verbs.contains(&format!("{stem}y")) {
                return true;
            }
        }
        if let Some(stem) = word.strip_suffix("es") {
            if self.verbs.contains(stem) {
                return true;
            }
        }
        word.strip_suffix('s').is_some_and(|stem| self.verbs.contains(stem))
    }

    pub fn context_rules(&self) -> &[ContextRuleDef] {
        &self.context_rules
    }

    pub fn tagged_word_count(&self) -> usize {
        self.tags.len()
    }

    pub fn verb_count(&self) -> usize {
        self.verbs.len()
    }

    pub fn suffix_rules(&self) -> &[SuffixRuleDef] {
        &self.suffix_rules
    }
}

/// Load and compile a lexicon from a JSON file.
pub fn load_lexicon(path: &Path) -> Result<Lexicon, MatchError> {
    let content = std::fs::read_to_string(path).map_err(|e| MatchError::LexiconLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_lexicon(&content, path)
}

/// Parse a lexicon from a JSON string read from `source`.
pub fn parse_lexicon(json: &str, source: &Path) -> Result<Lexicon, MatchError> {
    let def: LexiconDef = serde_json::from_str(json).map_err(|e| MatchError::LexiconLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    Lexicon::from_def(def)
}

/// Parse a lexicon from a JSON string (no file path context).
pub fn parse_lexicon_str(json: &str) -> Result<Lexicon, MatchError> {
    let def: LexiconDef = serde_json::from_str(json).map_err(MatchError::Json)?;
    Lexicon::from_def(def)
}

fn is_plain_word(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_lowercase())
}

/// Validate that a lexicon is well-formed.
///
/// Every word must be lowercase ASCII letters only, since that is all the
/// normalizer lets through; anything else could never match.
pub fn validate_lexicon(def: &LexiconDef) -> Result<(), MatchError> {
    if def.name.trim().is_empty() {
        return Err(MatchError::LexiconInvalid("name must not be empty".into()));
    }

    if def.stopwords.is_empty() {
        return Err(MatchError::LexiconInvalid(
            "stopwords must not be empty".into(),
        ));
    }

    for word in &def.stopwords {
        if !is_plain_word(word) {
            return Err(MatchError::LexiconInvalid(format!(
                "stopword '{}' must be lowercase ASCII letters only",
                word
            )));
        }
    }

    for word in def.tags.keys() {
        if !is_plain_word(word) {
            return Err(MatchError::LexiconInvalid(format!(
                "tagged word '{}' must be lowercase ASCII letters only",
                word
            )));
        }
    }

    for verb in &def.verbs {
        if !is_plain_word(verb) {
            return Err(MatchError::LexiconInvalid(format!(
                "verb '{}' must be lowercase ASCII letters only",
                verb
            )));
        }
        if def.tags.contains_key(verb) {
            return Err(MatchError::LexiconInvalid(format!(
                "'{}' is listed both as a tagged word and as a verb",
                verb
            )));
        }
    }

    for rule in &def.suffix_rules {
        if !is_plain_word(&rule.suffix) {
            return Err(MatchError::LexiconInvalid(format!(
                "suffix '{}' must be lowercase ASCII letters only",
                rule.suffix
            )));
        }
    }

    for rule in &def.context_rules {
        if rule.prev.is_none() && rule.next.is_none() {
            return Err(MatchError::LexiconInvalid(format!(
                "context rule {} -> {} needs a 'prev' or 'next' condition",
                rule.from, rule.to
            )));
        }
        if rule.from == rule.to {
            return Err(MatchError::LexiconInvalid(format!(
                "context rule rewrites {} to itself",
                rule.from
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "name": "Tiny",
        "version": "1.0",
        "language": "en",
        "stopwords": ["the", "and"],
        "tags": { "fast": "JJ" },
        "verbs": ["deploy", "fix", "identify"],
        "suffix_rules": [ { "suffix": "ing", "tag": "VBG", "min_length": 5 } ],
        "context_rules": [ { "from": "VBG", "to": "NN", "prev": "JJ" } ]
    }"#;

    #[test]
    fn test_parse_valid_lexicon() {
        let lexicon = parse_lexicon_str(MINIMAL).unwrap();
        assert_eq!(lexicon.name(), "Tiny");
        assert!(lexicon.is_stopword("the"));
        assert!(!lexicon.is_stopword("fast"));
        assert_eq!(lexicon.stopword_count(), 2);
    }

    #[test]
    fn test_lexical_tag_order() {
        let lexicon = parse_lexicon_str(MINIMAL).unwrap();
        assert_eq!(lexicon.lexical_tag("fast"), PosTag::Adjective);
        assert_eq!(lexicon.lexical_tag("testing"), PosTag::VerbGerund);
        // too short for the suffix rule, falls back to the default tag
        assert_eq!(lexicon.lexical_tag("ring"), PosTag::Noun);
        assert_eq!(lexicon.lexical_tag("widget"), PosTag::Noun);
    }

    #[test]
    fn test_verbs_and_third_person_forms() {
        let lexicon = parse_lexicon_str(MINIMAL).unwrap();
        assert_eq!(lexicon.lexical_tag("deploy"), PosTag::Verb);
        assert_eq!(lexicon.lexical_tag("deploys"), PosTag::VerbThirdPerson);
        assert_eq!(lexicon.lexical_tag("fixes"), PosTag::VerbThirdPerson);
        assert_eq!(lexicon.lexical_tag("identifies"), PosTag::VerbThirdPerson);
        // inflections other than -s are left to the suffix rules
        assert_eq!(lexicon.lexical_tag("deploying"), PosTag::VerbGerund);
        assert_eq!(lexicon.lexical_tag("fixer"), PosTag::Noun);
    }

    #[test]
    fn test_verb_also_tagged_rejected() {
        let json = r#"{
            "name": "Bad", "version": "1", "language": "en", "stopwords": ["a"],
            "tags": { "report": "NN" },
            "verbs": ["report"]
        }"#;
        let err = parse_lexicon_str(json).unwrap_err();
        assert!(matches!(err, MatchError::LexiconInvalid(_)));
    }

    #[test]
    fn test_empty_stopwords_rejected() {
        let json = r#"{ "name": "Bad", "version": "1", "language": "en", "stopwords": [] }"#;
        assert!(parse_lexicon_str(json).is_err());
    }

    #[test]
    fn test_stopword_with_apostrophe_rejected() {
        let json = r#"{ "name": "Bad", "version": "1", "language": "en", "stopwords": ["don't"] }"#;
        let err = parse_lexicon_str(json).unwrap_err();
        assert!(matches!(err, MatchError::LexiconInvalid(_)));
    }

    #[test]
    fn test_unconditional_context_rule_rejected() {
        let json = r#"{
            "name": "Bad", "version": "1", "language": "en", "stopwords": ["a"],
            "context_rules": [ { "from": "VB", "to": "NN" } ]
        }"#;
        assert!(parse_lexicon_str(json).is_err());
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let json = r#"{
            "name": "Bad", "version": "1", "language": "en", "stopwords": ["a"],
            "tags": { "word": "XYZ" }
        }"#;
        assert!(matches!(parse_lexicon_str(json), Err(MatchError::Json(_))));
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = load_lexicon(Path::new("/nonexistent/lexicon.json")).unwrap_err();
        assert!(matches!(err, MatchError::LexiconLoad { .. }));
    }
}
