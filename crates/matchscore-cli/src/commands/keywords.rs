use matchscore_core::analysis::extract_keywords;
use matchscore_core::error::MatchError;
use matchscore_core::text::normalize;
use std::path::PathBuf;

use crate::commands::{load_lexicon_arg, read_text_arg};
use crate::output;

pub fn run(
    input_file: PathBuf,
    top: usize,
    output_format: &str,
    lexicon: Option<PathBuf>,
) -> Result<(), MatchError> {
    let lexicon = load_lexicon_arg(lexicon.as_deref())?;
    let text = read_text_arg(&input_file)?;

    let normalized = normalize(&text, &lexicon);
    let keywords = extract_keywords(&normalized, &lexicon, top);

    match output_format {
        "json" => println!("{}", serde_json::to_string_pretty(&keywords)?),
        _ => output::table::print_keywords(&keywords),
    }

    Ok(())
}
