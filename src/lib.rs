//! Miner Catalog - Product catalog analysis
//!
//! Separates cryptocurrency mining hardware from accessories in an
//! e-commerce catalog export, groups duplicate miner listings, and tags
//! each miner with a coarse series.
//!
//! # Pipeline
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────────┐   ┌──────────────┐
//! │ load catalog │──▶│   classify   │──▶│ group duplicates │──▶│ write report │
//! │  (products)  │   │ miner / not  │   │  + tag series    │   │    (JSON)    │
//! └──────────────┘   └──────────────┘   └──────────────────┘   └──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: Classification, normalization, series and duplicate grouping
//! - [`domain`]: Catalog records and report types
//! - [`report`]: Report assembly, file I/O and console summary
//! - [`error`]: Error types and handling

pub mod catalog;
pub mod domain;
pub mod error;
pub mod report;

// Re-export commonly used types
pub use catalog::{
    extract_series, find_duplicates, is_miner, normalize_model,
    Classification, ClassificationRule, ClassifierConfig, MinerClassifier,
};

pub use domain::{
    AnalysisReport, ClassifiedMinerEntry, DuplicateMember, InitializationCounts, Product,
};

pub use error::{Error, Result};

pub use report::{load_products, render_summary, save_report, ReportBuilder};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
