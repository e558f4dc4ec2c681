use matchscore_core::analysis::MatchReport;
use matchscore_core::error::MatchError;

pub fn print(report: &MatchReport) -> Result<(), MatchError> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}
