//! Lead intake, scoring, and dashboard aggregation.
//!
//! A [`domain::LeadSubmission`] enters through the service, is validated and
//! resolved into a [`domain::LeadProfile`], scored by whichever
//! [`scoring::ScoringEngine`] the process configuration selected, and stored
//! behind the [`repository::LeadRepository`] abstraction. Dashboard views are
//! pure functions over the stored records.

pub mod dashboard;
pub mod domain;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use dashboard::{ActionItem, DashboardSummary};
pub use domain::{LeadId, LeadProfile, LeadSubmission, LeadValidationError, PipelineStage};
pub use repository::{LeadRecord, LeadRepository, RepositoryError};
pub use router::lead_router;
pub use scoring::{
    engine_for, EngineKind, PredictiveEngine, Priority, PriorityThresholds, RuleBasedEngine,
    ScoringConfig, ScoringEngine, ScoringResult, ScoringWeights,
};
pub use service::{LeadScoringService, LeadServiceError};
