use super::config::ScoringConfig;
use crate::crm::leads::domain::LeadProfile;

/// Applies the weighted rules in display order, returning the capped total
/// and one explanation per rule that contributed points.
pub(crate) fn score_profile(profile: &LeadProfile, config: &ScoringConfig) -> (u32, Vec<String>) {
    let weights = &config.weights;
    let mut total: u32 = 0;
    let mut explanations: Vec<String> = Vec::new();

    let engagement = profile
        .interaction_count
        .saturating_mul(weights.engagement_points_per_interaction)
        .min(weights.engagement_max_points);
    if engagement > 0 {
        total += engagement;
        explanations.push(format!("High engagement detected (+{engagement})"));
    }

    if profile.last_interaction_days_ago <= weights.recency_threshold_days {
        total += weights.recency_points;
        explanations.push(format!(
            "Recent interaction within {} days (+{})",
            weights.recency_threshold_days, weights.recency_points
        ));
    }

    if profile.has_requested_pricing {
        total += weights.pricing_request_points;
        explanations.push(format!(
            "Requested pricing information (+{})",
            weights.pricing_request_points
        ));
    }

    if profile.has_demo_request {
        total += weights.demo_request_points;
        explanations.push(format!(
            "Requested product demo (+{})",
            weights.demo_request_points
        ));
    }

    if profile.company_size > weights.large_company_threshold {
        total += weights.large_company_points;
        explanations.push(format!(
            "Large company (>{} employees) (+{})",
            weights.large_company_threshold, weights.large_company_points
        ));
    }

    // The total stays inside [0, 100] even if the weights are retuned to sum
    // past the ceiling.
    (total.min(weights.max_score).min(100), explanations)
}
