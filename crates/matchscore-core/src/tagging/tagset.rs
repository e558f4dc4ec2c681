use serde::{Deserialize, Serialize};
use std::fmt;

/// Penn Treebank part-of-speech tags.
///
/// Only the open-class tags and the closed classes that survive stopword
/// removal are listed; punctuation and numeral tags cannot occur on
/// normalized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    #[serde(rename = "NN")]
    Noun,
    #[serde(rename = "NNS")]
    NounPlural,
    #[serde(rename = "NNP")]
    ProperNoun,
    #[serde(rename = "NNPS")]
    ProperNounPlural,
    #[serde(rename = "JJ")]
    Adjective,
    #[serde(rename = "JJR")]
    AdjectiveComparative,
    #[serde(rename = "JJS")]
    AdjectiveSuperlative,
    #[serde(rename = "VB")]
    Verb,
    #[serde(rename = "VBD")]
    VerbPast,
    #[serde(rename = "VBG")]
    VerbGerund,
    #[serde(rename = "VBN")]
    VerbPastParticiple,
    #[serde(rename = "VBP")]
    VerbPresent,
    #[serde(rename = "VBZ")]
    VerbThirdPerson,
    #[serde(rename = "RB")]
    Adverb,
    #[serde(rename = "RBR")]
    AdverbComparative,
    #[serde(rename = "RBS")]
    AdverbSuperlative,
    #[serde(rename = "DT")]
    Determiner,
    #[serde(rename = "IN")]
    Preposition,
    #[serde(rename = "CC")]
    Conjunction,
    #[serde(rename = "PRP")]
    Pronoun,
    #[serde(rename = "MD")]
    Modal,
    #[serde(rename = "UH")]
    Interjection,
}

impl PosTag {
    pub fn is_noun(self) -> bool {
        matches!(
            self,
            PosTag::Noun | PosTag::NounPlural | PosTag::ProperNoun | PosTag::ProperNounPlural
        )
    }

    pub fn is_adjective(self) -> bool {
        matches!(
            self,
            PosTag::Adjective | PosTag::AdjectiveComparative | PosTag::AdjectiveSuperlative
        )
    }

    /// Treebank code, e.g. "NNS".
    pub fn code(self) -> &'static str {
        match self {
            PosTag::Noun => "NN",
            PosTag::NounPlural => "NNS",
            PosTag::ProperNoun => "NNP",
            PosTag::ProperNounPlural => "NNPS",
            PosTag::Adjective => "JJ",
            PosTag::AdjectiveComparative => "JJR",
            PosTag::AdjectiveSuperlative => "JJS",
            PosTag::Verb => "VB",
            PosTag::VerbPast => "VBD",
            PosTag::VerbGerund => "VBG",
            PosTag::VerbPastParticiple => "VBN",
            PosTag::VerbPresent => "VBP",
            PosTag::VerbThirdPerson => "VBZ",
            PosTag::Adverb => "RB",
            PosTag::AdverbComparative => "RBR",
            PosTag::AdverbSuperlative => "RBS",
            PosTag::Determiner => "DT",
            PosTag::Preposition => "IN",
            PosTag::Conjunction => "CC",
            PosTag::Pronoun => "PRP",
            PosTag::Modal => "MD",
            PosTag::Interjection => "UH",
        }
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}
