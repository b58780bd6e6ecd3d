mod config;
mod rules;

pub use config::{PriorityThresholds, ScoringConfig, ScoringWeights};

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::domain::LeadProfile;

/// Coarse lead classification derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Cold,
    Warm,
    Hot,
}

impl Priority {
    pub const fn label(self) -> &'static str {
        match self {
            Priority::Cold => "Cold",
            Priority::Warm => "Warm",
            Priority::Hot => "Hot",
        }
    }
}

/// Outcome of scoring a single lead: a bounded score, its priority tier, and
/// a human-readable explanation trail in rule order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub score: u32,
    pub priority: Priority,
    pub explanations: Vec<String>,
}

/// Capability interface for swappable scoring strategies. Every variant must
/// produce the same result shape and populate at least one explanation.
pub trait ScoringEngine: Send + Sync {
    fn calculate_score(&self, lead: &LeadProfile) -> ScoringResult;
}

/// Deterministic engine applying the weighted rule table.
pub struct RuleBasedEngine {
    config: ScoringConfig,
}

impl RuleBasedEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }
}

impl ScoringEngine for RuleBasedEngine {
    fn calculate_score(&self, lead: &LeadProfile) -> ScoringResult {
        let (score, explanations) = rules::score_profile(lead, &self.config);
        let priority = self.config.thresholds.priority_for(score);
        ScoringResult {
            score,
            priority,
            explanations,
        }
    }
}

/// Placeholder for a model-backed engine.
///
/// Until a trained predictor is wired in, it delegates the numbers to the
/// rule table and rewrites only the narrative, keyed off the resulting
/// priority and the lead's intent signals.
pub struct PredictiveEngine {
    fallback: RuleBasedEngine,
}

impl PredictiveEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            fallback: RuleBasedEngine::new(config),
        }
    }

    fn narrative(lead: &LeadProfile, result: &ScoringResult) -> Vec<String> {
        let mut explanations = vec![match result.priority {
            Priority::Hot => "AI analysis indicates high conversion likelihood".to_string(),
            Priority::Warm => "AI analysis shows moderate buying signals".to_string(),
            Priority::Cold => "AI analysis suggests nurturing required".to_string(),
        }];

        if lead.has_requested_pricing {
            explanations.push("Strong purchase intent detected from pricing inquiry".to_string());
        }
        if lead.has_demo_request {
            explanations.push("Product interest confirmed via demo request".to_string());
        }

        explanations
    }
}

impl ScoringEngine for PredictiveEngine {
    fn calculate_score(&self, lead: &LeadProfile) -> ScoringResult {
        let result = self.fallback.calculate_score(lead);
        let explanations = Self::narrative(lead, &result);
        ScoringResult {
            explanations,
            ..result
        }
    }
}

/// Engine variants selectable from process configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineKind {
    #[default]
    RuleBased,
    Predictive,
}

impl EngineKind {
    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "rule_based" | "rules" => Some(Self::RuleBased),
            "predictive" | "ai" => Some(Self::Predictive),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            EngineKind::RuleBased => "rule_based",
            EngineKind::Predictive => "predictive",
        }
    }
}

/// Resolves the engine instance that serves scoring calls for this process.
pub fn engine_for(kind: EngineKind, config: ScoringConfig) -> Arc<dyn ScoringEngine> {
    match kind {
        EngineKind::RuleBased => Arc::new(RuleBasedEngine::new(config)),
        EngineKind::Predictive => Arc::new(PredictiveEngine::new(config)),
    }
}
