//! Ordered decision table for sex classification.
//!
//! Rules are evaluated top to bottom and the first match wins. Later rules have looser
//! conditions, so the order is part of the contract. When no rule matches the sample is
//! `Indeterminate` with `Low` confidence, which makes the table total over any pair of
//! ratios. All comparisons are strict.

use std::fmt::{self, Display};

use log::debug;

use crate::config::SexThresholds;

/// X and Y depth, each relative to the mean autosome depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageRatios {
    pub x_ratio: f64,
    pub y_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredictedSex {
    Female,
    Male,
    LikelyFemale,
    LikelyMale,
    Indeterminate,
}

impl Display for PredictedSex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PredictedSex::Female => "Female (XX)",
            PredictedSex::Male => "Male (XY)",
            PredictedSex::LikelyFemale => "Likely Female or potential aneuploidy (e.g., XXY)",
            PredictedSex::LikelyMale => "Likely Male or potential aneuploidy (e.g., X0)",
            PredictedSex::Indeterminate => "Indeterminate",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Confidence::High => "High",
            Confidence::Medium => "Medium",
            Confidence::Low => "Low",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub predicted_sex: PredictedSex,
    pub confidence: Confidence,
}

/// Outcome when no rule of the table matches.
pub const INDETERMINATE: Classification = Classification {
    predicted_sex: PredictedSex::Indeterminate,
    confidence: Confidence::Low,
};

/// One row of the decision table.
pub struct Rule {
    pub name: &'static str,
    pub predicate: fn(&CoverageRatios, &SexThresholds) -> bool,
    pub classification: Classification,
}

impl Rule {
    pub fn matches(&self, ratios: &CoverageRatios, thresholds: &SexThresholds) -> bool {
        (self.predicate)(ratios, thresholds)
    }
}

fn female(r: &CoverageRatios, t: &SexThresholds) -> bool {
    r.x_ratio > t.x_female_high && r.y_ratio < t.y_female_low
}

fn male(r: &CoverageRatios, t: &SexThresholds) -> bool {
    r.x_ratio < t.x_male_low && r.y_ratio > t.y_male_high
}

fn likely_female(r: &CoverageRatios, t: &SexThresholds) -> bool {
    r.x_ratio > t.x_male_low && r.y_ratio > t.y_female_low
}

fn likely_male(r: &CoverageRatios, t: &SexThresholds) -> bool {
    r.x_ratio < t.x_female_high && r.y_ratio < t.y_male_high
}

pub static DECISION_TABLE: [Rule; 4] = [
    Rule {
        name: "female",
        predicate: female,
        classification: Classification {
            predicted_sex: PredictedSex::Female,
            confidence: Confidence::High,
        },
    },
    Rule {
        name: "male",
        predicate: male,
        classification: Classification {
            predicted_sex: PredictedSex::Male,
            confidence: Confidence::High,
        },
    },
    Rule {
        name: "likely_female",
        predicate: likely_female,
        classification: Classification {
            predicted_sex: PredictedSex::LikelyFemale,
            confidence: Confidence::Medium,
        },
    },
    Rule {
        name: "likely_male",
        predicate: likely_male,
        classification: Classification {
            predicted_sex: PredictedSex::LikelyMale,
            confidence: Confidence::Medium,
        },
    },
];

///
/// First rule of the decision table that matches, if any.
///
pub fn matching_rule(ratios: &CoverageRatios, thresholds: &SexThresholds) -> Option<&'static Rule> {
    DECISION_TABLE
        .iter()
        .find(|rule| rule.matches(ratios, thresholds))
}

///
/// Classify a sample from its coverage ratios.
///
/// Pure function of its inputs. Thresholds are never defaulted here.
pub fn classify(ratios: &CoverageRatios, thresholds: &SexThresholds) -> Classification {
    match matching_rule(ratios, thresholds) {
        Some(rule) => {
            debug!("Decision rule '{}' matched", rule.name);
            rule.classification
        }
        None => {
            debug!("No decision rule matched");
            INDETERMINATE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn ratios(x_ratio: f64, y_ratio: f64) -> CoverageRatios {
        CoverageRatios { x_ratio, y_ratio }
    }

    #[fixture]
    fn thresholds() -> SexThresholds {
        SexThresholds::default()
    }

    #[rstest]
    #[case(ratios(1.0, 30.0_f64.recip() * 2.0), PredictedSex::Female, Confidence::High)]
    #[case(ratios(0.5, 0.45), PredictedSex::Male, Confidence::High)]
    #[case(ratios(1.0, 0.5), PredictedSex::LikelyFemale, Confidence::Medium)]
    #[case(ratios(0.5, 0.05), PredictedSex::LikelyMale, Confidence::Medium)]
    #[case(ratios(0.9, 0.2), PredictedSex::Indeterminate, Confidence::Low)]
    fn test_classify(
        thresholds: SexThresholds,
        #[case] input: CoverageRatios,
        #[case] sex: PredictedSex,
        #[case] confidence: Confidence,
    ) {
        assert_eq!(
            classify(&input, &thresholds),
            Classification {
                predicted_sex: sex,
                confidence
            }
        );
    }

    #[rstest]
    #[case(0, ratios(0.81, 0.19), true)]
    #[case(0, ratios(0.8, 0.1), false)]
    #[case(0, ratios(0.9, 0.2), false)]
    #[case(1, ratios(0.59, 0.21), true)]
    #[case(1, ratios(0.6, 0.5), false)]
    #[case(1, ratios(0.1, 0.2), false)]
    #[case(2, ratios(0.61, 0.21), true)]
    #[case(2, ratios(0.6, 0.5), false)]
    #[case(2, ratios(1.0, 0.2), false)]
    #[case(3, ratios(0.79, 0.19), true)]
    #[case(3, ratios(0.8, 0.0), false)]
    #[case(3, ratios(0.0, 0.2), false)]
    fn test_each_rule_is_strict(
        thresholds: SexThresholds,
        #[case] rule: usize,
        #[case] input: CoverageRatios,
        #[case] expected: bool,
    ) {
        assert_eq!(DECISION_TABLE[rule].matches(&input, &thresholds), expected);
    }

    #[rstest]
    fn test_x_ratio_equal_to_female_threshold_is_not_clear_female(thresholds: SexThresholds) {
        let input = ratios(0.8, 0.0);
        let result = classify(&input, &thresholds);

        assert!(!DECISION_TABLE[0].matches(&input, &thresholds));
        assert_ne!(result.predicted_sex, PredictedSex::Female);
        // 0.8 is not < 0.8 either, so nothing matches
        assert_eq!(result, INDETERMINATE);
    }

    #[rstest]
    #[case(
        SexThresholds { x_female_high: 0.8, y_female_low: 0.1, x_male_low: 0.6, y_male_high: 0.3 },
        ratios(0.7, 0.2),
        &[2, 3],
        PredictedSex::LikelyFemale
    )]
    #[case(
        SexThresholds { x_female_high: 0.5, y_female_low: 0.3, x_male_low: 0.9, y_male_high: 0.1 },
        ratios(0.7, 0.2),
        &[0, 1],
        PredictedSex::Female
    )]
    fn test_first_match_wins(
        #[case] thresholds: SexThresholds,
        #[case] input: CoverageRatios,
        #[case] matching: &[usize],
        #[case] expected: PredictedSex,
    ) {
        let matched: Vec<usize> = (0..DECISION_TABLE.len())
            .filter(|&i| DECISION_TABLE[i].matches(&input, &thresholds))
            .collect();

        assert_eq!(matched, matching.to_vec());
        assert_eq!(classify(&input, &thresholds).predicted_sex, expected);
    }

    #[rstest]
    fn test_classifier_is_total(thresholds: SexThresholds) {
        for xi in 0..=40 {
            for yi in 0..=40 {
                let input = ratios(xi as f64 * 0.05, yi as f64 * 0.025);
                let result = classify(&input, &thresholds);

                match matching_rule(&input, &thresholds) {
                    Some(rule) => {
                        assert_eq!(result, rule.classification);
                        let first = DECISION_TABLE
                            .iter()
                            .position(|r| r.matches(&input, &thresholds))
                            .unwrap();
                        assert_eq!(DECISION_TABLE[first].name, rule.name);
                    }
                    None => assert_eq!(result, INDETERMINATE),
                }
            }
        }
    }

    #[rstest]
    fn test_labels() {
        assert_eq!(PredictedSex::Female.to_string(), "Female (XX)");
        assert_eq!(PredictedSex::Male.to_string(), "Male (XY)");
        assert_eq!(
            PredictedSex::LikelyMale.to_string(),
            "Likely Male or potential aneuploidy (e.g., X0)"
        );
        assert_eq!(Confidence::Medium.to_string(), "Medium");
    }
}
