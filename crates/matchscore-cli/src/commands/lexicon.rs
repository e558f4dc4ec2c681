use matchscore_core::error::MatchError;
use matchscore_core::lexicon::{builtin, Lexicon};
use std::path::Path;

pub fn list() -> Result<(), MatchError> {
    println!("Available predefined lexicons:\n");
    for name in builtin::PRESETS {
        let def = builtin::load_preset(name)?;
        println!("  {:<6} {} (v{}) [{}]", name, def.name, def.version, def.language);
        if let Some(ref desc) = def.description {
            println!("         {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn explain(preset: &str) -> Result<(), MatchError> {
    let def = builtin::load_preset(preset)?;
    let lexicon = Lexicon::from_def(def.clone())?;

    println!("{} (version {})\n", def.name, def.version);
    if let Some(ref desc) = def.description {
        println!("{}\n", desc);
    }

    println!(
        "Normalization removes {} stopwords, e.g.: {}\n",
        lexicon.stopword_count(),
        def.stopwords
            .iter()
            .take(12)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    );

    println!(
        "Tagging looks up {} known words and {} verbs (with their -s forms),",
        lexicon.tagged_word_count(),
        lexicon.verb_count()
    );
    println!("then tries suffix rules in order,");
    println!("falling back to {} for anything else.\n", def.default_tag);

    println!("Suffix rules:");
    for rule in lexicon.suffix_rules() {
        if rule.min_length > 0 {
            println!(
                "  -{:<8} {:<4} (words of {}+ letters)",
                rule.suffix, rule.tag, rule.min_length
            );
        } else {
            println!("  -{:<8} {}", rule.suffix, rule.tag);
        }
    }
    println!();

    println!("Context rules:");
    for rule in lexicon.context_rules() {
        let mut conditions = Vec::new();
        if let Some(prev) = rule.prev {
            conditions.push(format!("after {}", prev));
        }
        if let Some(next) = rule.next {
            conditions.push(format!("before {}", next));
        }
        println!("  {:<4} -> {:<4} {}", rule.from, rule.to, conditions.join(" and "));
    }
    println!();

    println!("Keywords keep nouns (NN, NNS, NNP, NNPS) and adjectives (JJ, JJR, JJS)");
    println!("longer than two letters.\n");

    Ok(())
}

pub fn validate(file: &Path) -> Result<(), MatchError> {
    let lexicon = matchscore_core::lexicon::load_lexicon(file)?;

    println!("Lexicon '{}' (v{}) is valid.", lexicon.name(), lexicon.version());
    println!("  Stopwords: {}", lexicon.stopword_count());
    println!("  Tagged words: {}", lexicon.tagged_word_count());
    println!("  Verbs: {}", lexicon.verb_count());
    println!("  Suffix rules: {}", lexicon.suffix_rules().len());
    println!("  Context rules: {}", lexicon.context_rules().len());

    if lexicon.verb_count() == 0 {
        println!("\nWarnings:");
        println!("  - no verbs listed; verbs the suffix rules miss will be reported as keywords");
    } else if lexicon.tagged_word_count() == 0 && lexicon.suffix_rules().is_empty() {
        println!("\nWarnings:");
        println!("  - no tagged words or suffix rules; every word gets the default tag");
    }

    Ok(())
}
