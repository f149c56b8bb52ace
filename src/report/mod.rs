//! Report Module
//!
//! End-to-end analysis run: load the catalog, build the report, write it.

pub mod builder;
pub mod io;
pub mod summary;

pub use builder::*;
pub use io::*;
pub use summary::*;

use crate::domain::AnalysisReport;
use crate::error::Result;
use std::path::Path;

/// Analyze the catalog at `input` and write the report to `output`.
///
/// Input errors abort before `output` is touched.
pub fn run(builder: &ReportBuilder, input: &Path, output: &Path) -> Result<AnalysisReport> {
    let products = load_products(input)?;
    let report = builder.build(&products);
    save_report(&report, output)?;
    Ok(report)
}
