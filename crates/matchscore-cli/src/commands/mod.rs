pub mod keywords;
pub mod lexicon;
pub mod normalize;
pub mod score;

use matchscore_core::error::MatchError;
use matchscore_core::lexicon::{load_lexicon, Lexicon};
use std::io::Read;
use std::path::Path;

/// Load the lexicon once per invocation: a custom file or the English preset.
pub fn load_lexicon_arg(path: Option<&Path>) -> Result<Lexicon, MatchError> {
    let lexicon = match path {
        Some(path) => load_lexicon(path)?,
        None => Lexicon::english()?,
    };
    tracing::debug!(
        lexicon = lexicon.name(),
        version = lexicon.version(),
        "loaded lexicon"
    );
    Ok(lexicon)
}

/// Read a text argument; "-" means stdin.
pub fn read_text_arg(path: &Path) -> Result<String, MatchError> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    Ok(std::fs::read_to_string(path)?)
}
