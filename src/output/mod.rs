//! Terminal output formatting

mod display;

pub use display::{print_rank_results, print_score_outcome};
