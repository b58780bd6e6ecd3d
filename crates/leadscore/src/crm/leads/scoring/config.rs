use serde::{Deserialize, Serialize};

use super::Priority;

/// Additive weights for the scoring rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub engagement_points_per_interaction: u32,
    pub engagement_max_points: u32,
    pub recency_threshold_days: u32,
    pub recency_points: u32,
    pub pricing_request_points: u32,
    pub demo_request_points: u32,
    pub large_company_threshold: u32,
    pub large_company_points: u32,
    pub max_score: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            engagement_points_per_interaction: 5,
            engagement_max_points: 25,
            recency_threshold_days: 7,
            recency_points: 20,
            pricing_request_points: 30,
            demo_request_points: 15,
            large_company_threshold: 50,
            large_company_points: 10,
            max_score: 100,
        }
    }
}

/// Priority cutoffs, tunable independently of the rule weights so engine
/// variants can reclassify without touching point values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityThresholds {
    pub hot: u32,
    pub warm: u32,
}

impl Default for PriorityThresholds {
    fn default() -> Self {
        Self { hot: 70, warm: 40 }
    }
}

impl PriorityThresholds {
    pub fn priority_for(&self, score: u32) -> Priority {
        if score >= self.hot {
            Priority::Hot
        } else if score >= self.warm {
            Priority::Warm
        } else {
            Priority::Cold
        }
    }
}

/// Rubric configuration handed to an engine at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,
    pub thresholds: PriorityThresholds,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_match_rubric() {
        let weights = ScoringWeights::default();
        assert_eq!(weights.engagement_points_per_interaction, 5);
        assert_eq!(weights.engagement_max_points, 25);
        assert_eq!(weights.recency_threshold_days, 7);
        assert_eq!(weights.pricing_request_points, 30);
        assert_eq!(weights.demo_request_points, 15);
        assert_eq!(weights.large_company_points, 10);
        assert_eq!(weights.max_score, 100);
    }

    #[test]
    fn priority_bands_are_exhaustive_and_exclusive() {
        let thresholds = PriorityThresholds::default();
        assert_eq!(thresholds.priority_for(0), Priority::Cold);
        assert_eq!(thresholds.priority_for(39), Priority::Cold);
        assert_eq!(thresholds.priority_for(40), Priority::Warm);
        assert_eq!(thresholds.priority_for(69), Priority::Warm);
        assert_eq!(thresholds.priority_for(70), Priority::Hot);
        assert_eq!(thresholds.priority_for(100), Priority::Hot);
    }

    #[test]
    fn thresholds_override_independently_of_weights() {
        let thresholds = PriorityThresholds { hot: 90, warm: 50 };
        assert_eq!(thresholds.priority_for(75), Priority::Warm);
        assert_eq!(thresholds.priority_for(90), Priority::Hot);
        assert_eq!(thresholds.priority_for(49), Priority::Cold);
    }
}
