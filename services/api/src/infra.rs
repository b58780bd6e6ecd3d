use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use metrics_exporter_prometheus::PrometheusHandle;

use leadscore::auth::{DirectoryError, UserAccount, UserDirectory};
use leadscore::crm::leads::{
    LeadId, LeadRecord, LeadRepository, PipelineStage, RepositoryError,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryLeadRepository {
    records: Arc<Mutex<HashMap<LeadId, LeadRecord>>>,
}

impl LeadRepository for InMemoryLeadRepository {
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

#[derive(Default, Clone)]
pub(crate) struct InMemoryUserDirectory {
    accounts: Arc<Mutex<HashMap<String, UserAccount>>>,
}

impl UserDirectory for InMemoryUserDirectory {
    fn insert(&self, account: UserAccount) -> Result<UserAccount, DirectoryError> {
        let mut guard = self.accounts.lock().expect("directory mutex poisoned");
        if guard.contains_key(&account.email) {
            return Err(DirectoryError::Conflict);
        }
        guard.insert(account.email.clone(), account.clone());
        Ok(account)
    }

    fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>, DirectoryError> {
        let guard = self.accounts.lock().expect("directory mutex poisoned");
        Ok(guard.get(email).cloned())
    }
}
