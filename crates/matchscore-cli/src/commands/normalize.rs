use matchscore_core::error::MatchError;
use std::path::PathBuf;

use crate::commands::{load_lexicon_arg, read_text_arg};

pub fn run(input_file: PathBuf, lexicon: Option<PathBuf>) -> Result<(), MatchError> {
    let lexicon = load_lexicon_arg(lexicon.as_deref())?;
    let text = read_text_arg(&input_file)?;

    let normalized = matchscore_core::text::normalize(&text, &lexicon);
    if normalized.is_empty() {
        eprintln!("(no content words left after normalization)");
    } else {
        println!("{normalized}");
    }

    Ok(())
}
