use depthqc_sexcheck::SexEstimate;

use crate::report::ReportWrite;

///
/// Sex estimate report for one sample.
///
pub struct SexReport<'a> {
    pub sample: &'a str,
    pub estimate: &'a SexEstimate,
}

impl<'a> SexReport<'a> {
    pub fn new(sample: &'a str, estimate: &'a SexEstimate) -> Self {
        SexReport { sample, estimate }
    }
}

impl ReportWrite for SexReport<'_> {
    fn render(&self) -> String {
        let e = self.estimate;
        format!(
            "Sample: {}\n\
             {} Chromosome Coverage: {:.2}\n\
             {} Chromosome Coverage: {:.2}\n\
             Average Autosome Coverage: {:.2}\n\
             {}/Autosome Coverage Ratio: {:.2}\n\
             {}/Autosome Coverage Ratio: {:.2}\n\
             Predicted Sex: {}\n\
             Confidence: {}\n",
            self.sample,
            e.x_chr,
            e.x_depth,
            e.y_chr,
            e.y_depth,
            e.autosome_depth,
            e.x_chr,
            e.ratios.x_ratio,
            e.y_chr,
            e.ratios.y_ratio,
            e.classification.predicted_sex,
            e.classification.confidence,
        )
    }
}
