//! Command implementations
//!
//! Commands take preloaded word lists, do the work, and return result
//! structs for the output layer to print.

mod rank;
mod score;

pub use rank::{RankResult, run_rank};
pub use score::{ScoreOutcome, run_score};
