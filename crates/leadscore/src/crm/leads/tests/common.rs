use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::crm::leads::domain::{LeadId, LeadProfile, LeadSubmission, PipelineStage};
use crate::crm::leads::repository::{LeadRecord, LeadRepository, RepositoryError};
use crate::crm::leads::scoring::{
    RuleBasedEngine, ScoringConfig, ScoringEngine, ScoringResult,
};
use crate::crm::leads::service::LeadScoringService;

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 7).expect("valid date")
}

pub(super) fn submission(lead_id: &str) -> LeadSubmission {
    LeadSubmission {
        lead_id: lead_id.to_string(),
        industry: "Technology".to_string(),
        company_size: 150,
        channel: "Website".to_string(),
        interaction_count: 8,
        last_interaction_days_ago: Some(3),
        last_interaction_date: None,
        has_requested_pricing: true,
        has_demo_request: false,
        stage: PipelineStage::New,
    }
}

pub(super) fn profile(
    lead_id: &str,
    interaction_count: u32,
    last_interaction_days_ago: u32,
    has_requested_pricing: bool,
    has_demo_request: bool,
    company_size: u32,
) -> LeadProfile {
    LeadProfile {
        lead_id: LeadId(lead_id.to_string()),
        industry: "Technology".to_string(),
        company_size,
        channel: "Website".to_string(),
        interaction_count,
        last_interaction_days_ago,
        has_requested_pricing,
        has_demo_request,
        stage: PipelineStage::New,
    }
}

pub(super) fn rule_engine() -> RuleBasedEngine {
    RuleBasedEngine::new(ScoringConfig::default())
}

pub(super) fn scored_record(lead_id: &str, industry: &str, score: u32) -> LeadRecord {
    let config = ScoringConfig::default();
    let mut profile = profile(lead_id, 0, 60, false, false, 10);
    profile.industry = industry.to_string();

    LeadRecord {
        profile,
        score_details: ScoringResult {
            score,
            priority: config.thresholds.priority_for(score),
            explanations: Vec::new(),
        },
    }
}

pub(super) fn build_service() -> (
    Arc<LeadScoringService<MemoryLeads>>,
    Arc<MemoryLeads>,
) {
    let repository = Arc::new(MemoryLeads::default());
    let engine: Arc<dyn ScoringEngine> = Arc::new(rule_engine());
    let service = Arc::new(LeadScoringService::new(repository.clone(), engine));
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryLeads {
    records: Arc<Mutex<HashMap<LeadId, LeadRecord>>>,
}

impl MemoryLeads {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl LeadRepository for MemoryLeads {
    fn insert(&self, record: LeadRecord) -> Result<LeadRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.profile.lead_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.profile.lead_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn all(&self) -> Result<Vec<LeadRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }

    fn update_stage(
        &self,
        id: &LeadId,
        stage: PipelineStage,
    ) -> Result<Option<LeadRecord>, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get_mut(id).map(|record| {
            record.profile.stage = stage;
            record.clone()
        }))
    }
}

pub(super) struct UnavailableLeads;

impl LeadRepository for UnavailableLeads {
    fn insert(&self, _record: LeadRecord) -> Result<LeadRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn all(&self) -> Result<Vec<LeadRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update_stage(
        &self,
        _id: &LeadId,
        _stage: PipelineStage,
    ) -> Result<Option<LeadRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
