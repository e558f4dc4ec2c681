use matchscore_core::analysis::{KeywordEntry, MatchReport, MatchScore};

const GAUGE_WIDTH: usize = 40;

pub fn print(report: &MatchReport) {
    println!("=== Resume job match ===\n");
    println!("  Match score: {}", report.match_score);
    println!("  {}\n", gauge(report.match_score));
    println!("  {}\n", report.band.message());

    if report.keywords.is_empty() {
        println!("  No keywords found in the job description.\n");
        return;
    }

    println!("  Job description keywords:");
    print_keyword_rows(&report.keywords, "    ");
    println!();

    if report.missing_keywords.is_empty() {
        println!("  Your resume mentions every keyword above.\n");
    } else {
        println!("  Missing from your resume:");
        println!("    {}\n", report.missing_keywords.join(", "));
    }
}

pub fn print_keywords(keywords: &[KeywordEntry]) {
    if keywords.is_empty() {
        println!("No keywords found.");
        return;
    }
    print_keyword_rows(keywords, "");
}

fn print_keyword_rows(keywords: &[KeywordEntry], indent: &str) {
    let width = keywords.iter().map(|k| k.term.len()).max().unwrap_or(10);
    for k in keywords {
        println!("{indent}{:<width$}  {}", k.term, k.count, width = width);
    }
}

/// `[#########...............]` scaled to 0-100.
fn gauge(score: MatchScore) -> String {
    let pct = score.as_f64().clamp(0.0, 100.0);
    let filled = ((pct / 100.0) * GAUGE_WIDTH as f64).round() as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        ".".repeat(GAUGE_WIDTH - filled)
    )
}
