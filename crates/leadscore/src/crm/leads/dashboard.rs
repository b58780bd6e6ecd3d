use serde::{Deserialize, Serialize};

use super::domain::LeadId;
use super::repository::LeadRecord;
use super::scoring::Priority;

/// How many hot leads get an individual follow-up item.
const FOLLOW_UP_LIMIT: usize = 3;

/// Aggregate counts backing the workspace overview cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_leads: usize,
    pub hot_leads: usize,
    pub warm_leads: usize,
    pub cold_leads: usize,
}

/// Suggested follow-up task for the sales queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub id: String,
    pub action_text: String,
    pub is_done: bool,
    pub lead_id: LeadId,
}

pub fn summarize(records: &[LeadRecord]) -> DashboardSummary {
    let count_of = |priority: Priority| {
        records
            .iter()
            .filter(|record| record.score_details.priority == priority)
            .count()
    };

    DashboardSummary {
        total_leads: records.len(),
        hot_leads: count_of(Priority::Hot),
        warm_leads: count_of(Priority::Warm),
        cold_leads: count_of(Priority::Cold),
    }
}

/// Builds the follow-up queue from the highest-scoring hot leads, closing
/// with a standing pipeline-review item whenever any hot lead exists.
pub fn follow_up_actions(records: &[LeadRecord]) -> Vec<ActionItem> {
    let mut hot: Vec<&LeadRecord> = records
        .iter()
        .filter(|record| record.score_details.priority == Priority::Hot)
        .collect();
    hot.sort_by(|a, b| b.score_details.score.cmp(&a.score_details.score));
    hot.truncate(FOLLOW_UP_LIMIT);

    let mut actions: Vec<ActionItem> = hot
        .iter()
        .enumerate()
        .map(|(idx, record)| ActionItem {
            id: format!("ACTION-{:03}", idx + 1),
            action_text: format!(
                "Follow up with {} - High priority lead in {} sector (Score: {})",
                record.profile.lead_id.0, record.profile.industry, record.score_details.score
            ),
            is_done: false,
            lead_id: record.profile.lead_id.clone(),
        })
        .collect();

    if let Some(first) = hot.first() {
        actions.push(ActionItem {
            id: format!("ACTION-{:03}", hot.len() + 1),
            action_text: "Schedule weekly review meeting for hot leads pipeline".to_string(),
            is_done: false,
            lead_id: first.profile.lead_id.clone(),
        });
    }

    actions
}
