pub mod tagset;

pub use tagset::PosTag;

use crate::lexicon::Lexicon;

/// A token paired with its part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tagged<'a> {
    pub token: &'a str,
    pub tag: PosTag,
}

/// Tag a token sequence.
///
/// Two passes: every token first gets its lexical tag (word list, then
/// suffix rules, then the default), then each contextual rule rewrites tags
/// based on the neighbouring tags as they stood before that rule ran.
pub fn tag<'a>(tokens: &[&'a str], lexicon: &Lexicon) -> Vec<Tagged<'a>> {
    let mut tags: Vec<PosTag> = tokens.iter().map(|t| lexicon.lexical_tag(t)).collect();

    for rule in lexicon.context_rules() {
        let snapshot = tags.clone();
        for (i, tag) in tags.iter_mut().enumerate() {
            let prev = i.checked_sub(1).map(|p| snapshot[p]);
            let next = snapshot.get(i + 1).copied();
            if rule.applies(snapshot[i], prev, next) {
                *tag = rule.to;
            }
        }
    }

    tokens
        .iter()
        .zip(tags)
        .map(|(&token, tag)| Tagged { token, tag })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags_of(text: &str) -> Vec<PosTag> {
        let lexicon = Lexicon::english().unwrap();
        let tokens: Vec<&str> = text.split_whitespace().collect();
        tag(&tokens, &lexicon).into_iter().map(|t| t.tag).collect()
    }

    #[test]
    fn test_nouns_and_adjectives() {
        assert_eq!(
            tags_of("python developer strong python skills backend systems"),
            vec![
                PosTag::Noun,
                PosTag::Noun,
                PosTag::Adjective,
                PosTag::Noun,
                PosTag::NounPlural,
                PosTag::Noun,
                PosTag::NounPlural,
            ]
        );
    }

    #[test]
    fn test_past_tense_before_noun_becomes_adjective() {
        // "managed" alone reads as a verb, before a noun as a modifier
        assert_eq!(tags_of("managed"), vec![PosTag::VerbPast]);
        assert_eq!(
            tags_of("managed services"),
            vec![PosTag::Adjective, PosTag::NounPlural]
        );
    }

    #[test]
    fn test_base_verb_after_adjective_becomes_noun() {
        assert_eq!(tags_of("develop"), vec![PosTag::Verb]);
        assert_eq!(
            tags_of("strong lead"),
            vec![PosTag::Adjective, PosTag::Noun]
        );
    }

    #[test]
    fn test_gerund_after_noun_becomes_noun() {
        assert_eq!(tags_of("data mining"), vec![PosTag::Noun, PosTag::Noun]);
        assert_eq!(
            tags_of("seeking python"),
            vec![PosTag::VerbGerund, PosTag::Noun]
        );
    }

    #[test]
    fn test_rules_see_pre_rule_tags() {
        // "deploy" follows "develop" (VB), not a noun, so it stays a verb
        // even though "develop" itself does not change
        assert_eq!(tags_of("develop deploy"), vec![PosTag::Verb, PosTag::Verb]);
    }

    #[test]
    fn test_third_person_verbs() {
        assert_eq!(
            tags_of("writes code manages releases"),
            vec![
                PosTag::VerbThirdPerson,
                PosTag::Noun,
                PosTag::VerbThirdPerson,
                PosTag::NounPlural,
            ]
        );
        // after an adjective the same form is a plural noun
        assert_eq!(
            tags_of("weekly reports"),
            vec![PosTag::Adjective, PosTag::NounPlural]
        );
    }

    #[test]
    fn test_empty_sequence() {
        assert!(tags_of("").is_empty());
    }
}
