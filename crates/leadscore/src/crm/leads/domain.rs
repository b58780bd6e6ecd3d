use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for leads tracked by the CRM.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeadId(pub String);

/// Pipeline stage carried on lead records for the kanban board. Stages are
/// never an input to scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    #[default]
    New,
    Meeting,
    Negotiation,
    Closed,
}

impl PipelineStage {
    pub const fn label(self) -> &'static str {
        match self {
            PipelineStage::New => "new",
            PipelineStage::Meeting => "meeting",
            PipelineStage::Negotiation => "negotiation",
            PipelineStage::Closed => "closed",
        }
    }
}

/// Raw intake payload before validation and recency resolution.
///
/// Callers may supply the days since the last interaction directly, or a
/// calendar date that intake resolves against today's date. Supplying neither
/// is allowed; see [`LeadSubmission::recency_days`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSubmission {
    pub lead_id: String,
    pub industry: String,
    pub company_size: u32,
    pub channel: String,
    #[serde(default)]
    pub interaction_count: u32,
    #[serde(default)]
    pub last_interaction_days_ago: Option<u32>,
    #[serde(default)]
    pub last_interaction_date: Option<NaiveDate>,
    #[serde(default)]
    pub has_requested_pricing: bool,
    #[serde(default)]
    pub has_demo_request: bool,
    #[serde(default)]
    pub stage: PipelineStage,
}

impl LeadSubmission {
    pub fn validate(&self) -> Result<(), LeadValidationError> {
        if self.lead_id.trim().is_empty() {
            return Err(LeadValidationError::MissingLeadId);
        }
        if self.company_size == 0 {
            return Err(LeadValidationError::CompanySizeZero);
        }
        Ok(())
    }

    /// Days since the last recorded interaction.
    ///
    /// A missing day-count falls back to the calendar date; with neither
    /// present the lead counts as having interacted today. That inflates the
    /// recency bonus for leads with no history at all, which is the
    /// documented intake policy.
    pub fn recency_days(&self, today: NaiveDate) -> u32 {
        match (self.last_interaction_days_ago, self.last_interaction_date) {
            (Some(days), _) => days,
            (None, Some(date)) => (today - date).num_days().max(0) as u32,
            (None, None) => 0,
        }
    }

    /// Resolve this submission into the validated profile handed to scoring.
    pub fn into_profile(self, today: NaiveDate) -> LeadProfile {
        let last_interaction_days_ago = self.recency_days(today);
        LeadProfile {
            lead_id: LeadId(self.lead_id),
            industry: self.industry,
            company_size: self.company_size,
            channel: self.channel,
            interaction_count: self.interaction_count,
            last_interaction_days_ago,
            has_requested_pricing: self.has_requested_pricing,
            has_demo_request: self.has_demo_request,
            stage: self.stage,
        }
    }
}

/// Intake rejections surfaced before a submission reaches the engine.
#[derive(Debug, thiserror::Error)]
pub enum LeadValidationError {
    #[error("lead_id must not be empty")]
    MissingLeadId,
    #[error("company_size must be at least 1")]
    CompanySizeZero,
}

/// Validated lead attributes consumed by the scoring engine. Identifier,
/// industry, channel, and stage ride along for downstream consumers only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadProfile {
    pub lead_id: LeadId,
    pub industry: String,
    pub company_size: u32,
    pub channel: String,
    pub interaction_count: u32,
    pub last_interaction_days_ago: u32,
    pub has_requested_pricing: bool,
    pub has_demo_request: bool,
    pub stage: PipelineStage,
}
