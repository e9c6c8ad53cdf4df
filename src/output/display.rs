//! Display functions for command results

use crate::commands::{RankResult, ScoreOutcome};
use colored::Colorize;

/// Print ranked search results
///
/// Results arrive worst-first, so the strongest opening prints last and is
/// highlighted.
pub fn print_rank_results(result: &RankResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "OPENING SEARCH".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!(
        "  Solutions: {}   Guess pool: {}",
        result.solution_count, result.guess_count
    );
    println!(
        "  Scored {} of {} sampled tuples in {:.2}s",
        result.tuples_scored,
        result.tuples_sampled,
        result.duration.as_secs_f64()
    );
    if result.tuples_scored < result.tuples_sampled {
        println!("  {}", "Deadline hit; remaining tuples abandoned".yellow());
    }
    println!("\n  {:>10} | opening", "worst case");
    println!("{}", "─".repeat(60).cyan());

    for (i, entry) in result.results.iter().enumerate() {
        let line = format!("  {:>10} | {}", entry.score, entry.tuple);
        if i + 1 == result.results.len() {
            println!("{}", line.green().bold());
        } else {
            println!("{line}");
        }
    }

    if result.results.is_empty() {
        println!("  {}", "No tuples scored".yellow());
    }
    println!("{}", "─".repeat(60).cyan());
}

/// Print the score of one specific opening
pub fn print_score_outcome(outcome: &ScoreOutcome) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Opening: {}",
        format!("{}", outcome.tuple).bright_yellow().bold()
    );
    println!(
        "Worst case: {} of {} solutions remain",
        format!("{}", outcome.score).bold(),
        outcome.solution_count
    );
    println!("{}", "─".repeat(60).cyan());
}
