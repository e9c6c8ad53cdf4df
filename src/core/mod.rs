//! Core domain types
//!
//! This module contains the fundamental domain types with zero external
//! dependencies. All types here are pure, testable, and have clear
//! mathematical properties.

mod letters;
mod pattern;
mod tuple;
mod variant;
mod word;

pub use letters::LetterSet;
pub use pattern::{Pattern, Slot};
pub use tuple::GuessTuple;
pub use variant::Variant;
pub use word::{Word, WordError};
