use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use super::dashboard::{self, ActionItem, DashboardSummary};
use super::domain::{LeadId, LeadSubmission, LeadValidationError, PipelineStage};
use super::repository::{LeadRecord, LeadRepository, RepositoryError};
use super::scoring::{ScoringEngine, ScoringResult};

/// Service composing intake validation, the selected scoring engine, and the
/// lead store.
pub struct LeadScoringService<R> {
    repository: Arc<R>,
    engine: Arc<dyn ScoringEngine>,
}

impl<R> LeadScoringService<R>
where
    R: LeadRepository + 'static,
{
    pub fn new(repository: Arc<R>, engine: Arc<dyn ScoringEngine>) -> Self {
        Self { repository, engine }
    }

    /// Score a submission without persisting anything.
    pub fn preview(
        &self,
        submission: LeadSubmission,
        today: NaiveDate,
    ) -> Result<ScoringResult, LeadServiceError> {
        submission.validate()?;
        let profile = submission.into_profile(today);
        Ok(self.engine.calculate_score(&profile))
    }

    /// Score a submission and persist the resulting record.
    pub fn create(
        &self,
        submission: LeadSubmission,
        today: NaiveDate,
    ) -> Result<LeadRecord, LeadServiceError> {
        submission.validate()?;
        let profile = submission.into_profile(today);
        let score_details = self.engine.calculate_score(&profile);

        let stored = self.repository.insert(LeadRecord {
            profile,
            score_details,
        })?;

        info!(
            lead_id = %stored.profile.lead_id.0,
            score = stored.score_details.score,
            priority = stored.score_details.priority.label(),
            "lead scored and stored"
        );

        Ok(stored)
    }

    /// All stored leads, highest score first.
    pub fn list(&self) -> Result<Vec<LeadRecord>, LeadServiceError> {
        let mut records = self.repository.all()?;
        records.sort_by(|a, b| b.score_details.score.cmp(&a.score_details.score));
        Ok(records)
    }

    pub fn get(&self, id: &LeadId) -> Result<LeadRecord, LeadServiceError> {
        let record = self.repository.fetch(id)?.ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Move a lead to another pipeline stage.
    pub fn move_stage(
        &self,
        id: &LeadId,
        stage: PipelineStage,
    ) -> Result<LeadRecord, LeadServiceError> {
        let record = self
            .repository
            .update_stage(id, stage)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn summary(&self) -> Result<DashboardSummary, LeadServiceError> {
        Ok(dashboard::summarize(&self.repository.all()?))
    }

    pub fn actions(&self) -> Result<Vec<ActionItem>, LeadServiceError> {
        Ok(dashboard::follow_up_actions(&self.repository.all()?))
    }
}

/// Error raised by the lead service.
#[derive(Debug, thiserror::Error)]
pub enum LeadServiceError {
    #[error(transparent)]
    Validation(#[from] LeadValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
