//! Product Classification Module
//!
//! Separates mining hardware from power supplies, cables and other
//! accessories using ordered rule tables.

pub mod classifier;
pub mod rules;

pub use classifier::*;
pub use rules::*;
