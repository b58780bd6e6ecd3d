use serde::{Deserialize, Serialize};

use super::domain::{LeadId, LeadProfile, PipelineStage};
use super::scoring::ScoringResult;

/// Repository record pairing an intake profile with its scoring outcome.
///
/// Serializes with the profile fields inline and the scoring result nested
/// under `score_details`, which is the wire shape dashboard consumers expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRecord {
    #[serde(flatten)]
    pub profile: LeadProfile,
    pub score_details: ScoringResult,
}

/// Storage abstraction so the lead service can run against any backend.
pub trait LeadRepository: Send + Sync {
    fn insert(&self, record: LeadRecord) -> Result<LeadRecord, RepositoryError>;
    fn fetch(&self, id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError>;
    fn all(&self) -> Result<Vec<LeadRecord>, RepositoryError>;
    fn update_stage(
        &self,
        id: &LeadId,
        stage: PipelineStage,
    ) -> Result<Option<LeadRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("lead already exists")]
    Conflict,
    #[error("lead not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
