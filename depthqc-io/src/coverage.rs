use depthqc_coverage::CoverageStats;

use crate::report::ReportWrite;

impl ReportWrite for CoverageStats {
    ///
    /// ```text
    /// Mean coverage (exonic): 17.50
    /// % bases >= 10x: 50.00%
    /// % bases >= 30x: 25.00%
    /// ```
    ///
    /// Integral thresholds print without a fraction (`10x`), others as-is (`12.5x`).
    fn render(&self) -> String {
        let mut report = format!("Mean coverage (exonic): {:.2}\n", self.mean_depth);
        for breadth in &self.breadth {
            report.push_str(&format!(
                "% bases >= {}x: {:.2}%\n",
                breadth.threshold, breadth.percent
            ));
        }
        report
    }
}
