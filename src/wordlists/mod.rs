//! Word lists
//!
//! The solution and guess vocabularies are runtime inputs; this module only
//! knows how to load them.

pub mod loader;
