//! Tuple evaluation engine
//!
//! Variant enumeration, candidate filtering, minimax scoring, and the
//! sampled search driver that ties them together.

mod driver;
mod filter;
mod scorer;
mod variants;

pub use driver::{ConfigurationError, ScoreResult, SearchConfig, SearchDriver};
pub use filter::CandidateFilter;
pub use scorer::MinimaxScorer;
pub use variants::VariantEnumerator;
