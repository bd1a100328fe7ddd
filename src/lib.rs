//! Wordle Entropy Engine
//!
//! An information-theoretic decision engine for Wordle-family games: feedback
//! scoring, candidate filtering, entropy-driven guess selection, an adversary,
//! and evaluators for the full decision tree.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_entropy_engine::core::{Pattern, Word};
//!
//! let guess = Word::new("phono").unwrap();
//! let hidden = Word::new("limbo").unwrap();
//!
//! let pattern = Pattern::calculate(&guess, &hidden);
//! assert_eq!(pattern.to_text(), "----g");
//! ```

// Core domain types
pub mod core;

pub mod error;

// Solving algorithms
pub mod solver;

// Vocabulary loading
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{Result, SolverError};
