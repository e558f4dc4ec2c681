use crate::error::MatchError;
use crate::lexicon::schema::LexiconDef;

const ENGLISH_JSON: &str = include_str!("../../../../lexicons/english.json");

/// Available predefined lexicons.
pub const PRESETS: &[&str] = &["en"];

/// Load a predefined lexicon definition by name.
pub fn load_preset(name: &str) -> Result<LexiconDef, MatchError> {
    match name {
        "en" | "english" => {
            let def: LexiconDef = serde_json::from_str(ENGLISH_JSON)?;
            Ok(def)
        }
        _ => Err(MatchError::LexiconInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}
