//! Console Summary

use crate::domain::AnalysisReport;
use std::fmt;
use std::path::Path;

/// Human-readable run summary
pub struct Summary<'a> {
    report: &'a AnalysisReport,
    output: &'a Path,
}

impl<'a> Summary<'a> {
    pub fn new(report: &'a AnalysisReport, output: &'a Path) -> Self {
        Self { report, output }
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        let init = report.initialization_counts();

        writeln!(f, "Total products:      {}", report.total_products)?;
        writeln!(f, "Miners:              {}", report.miners_count)?;
        writeln!(f, "Non-miners:          {}", report.non_miners_count)?;
        writeln!(f, "Duplicate groups:    {}", report.duplicates_count)?;
        writeln!(f, "Need initialization: {}", init.pending)?;
        writeln!(f, "Linked to detail:    {}", init.linked)?;

        let breakdown = report.series_breakdown();
        if !breakdown.is_empty() {
            writeln!(f, "\nMiners by series:")?;
            for (series, count) in breakdown {
                let label = if series.is_empty() { "(none)" } else { series.as_str() };
                writeln!(f, "  {:<12} {}", label, count)?;
            }
        }

        writeln!(f, "\nReport saved to {}", self.output.display())
    }
}

/// Render the run summary as text
pub fn render_summary(report: &AnalysisReport, output: &Path) -> String {
    Summary::new(report, output).to_string()
}
