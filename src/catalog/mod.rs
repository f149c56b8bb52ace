//! Catalog Analysis Module
//!
//! Classification, normalization, series extraction and duplicate
//! grouping over catalog products.

pub mod classification;
pub mod duplicates;
pub mod normalize;
pub mod series;

pub use classification::*;
pub use duplicates::*;
pub use normalize::*;
pub use series::*;
