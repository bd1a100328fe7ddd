//! Vocabulary loading
//!
//! The vocabulary is read once at startup and then passed explicitly to every
//! component that needs it.

pub mod loader;
mod vocabulary;

pub use loader::Weighting;
pub use vocabulary::Vocabulary;
