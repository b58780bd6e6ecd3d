use crate::infra::InMemoryLeadRepository;
use chrono::Local;
use clap::Args;
use std::sync::Arc;

use leadscore::config::ConfigError;
use leadscore::crm::leads::{
    engine_for, EngineKind, LeadScoringService, LeadSubmission, PipelineStage, ScoringConfig,
};
use leadscore::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Scoring engine to demo (rule_based or predictive)
    #[arg(long)]
    pub(crate) engine: Option<String>,
}

/// Sample portfolio spanning the priority bands, mirroring the seed data the
/// dashboard ships with.
fn sample_portfolio() -> Vec<LeadSubmission> {
    let lead = |id: &str,
                industry: &str,
                company_size: u32,
                channel: &str,
                interactions: u32,
                days_ago: u32,
                pricing: bool,
                demo: bool| LeadSubmission {
        lead_id: id.to_string(),
        industry: industry.to_string(),
        company_size,
        channel: channel.to_string(),
        interaction_count: interactions,
        last_interaction_days_ago: Some(days_ago),
        last_interaction_date: None,
        has_requested_pricing: pricing,
        has_demo_request: demo,
        stage: PipelineStage::New,
    };

    vec![
        lead("LEAD-001", "Technology", 250, "Website", 10, 2, true, true),
        lead("LEAD-002", "Finance", 500, "LinkedIn", 8, 1, true, false),
        lead("LEAD-003", "Healthcare", 120, "Referral", 6, 3, true, true),
        lead("LEAD-004", "E-commerce", 80, "Website", 5, 6, false, true),
        lead("LEAD-005", "Manufacturing", 60, "Email", 3, 4, false, false),
        lead("LEAD-006", "Logistics", 55, "LinkedIn", 1, 9, false, true),
        lead("LEAD-007", "Retail", 15, "Referral", 0, 45, false, false),
    ]
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let kind = match args.engine {
        Some(label) => EngineKind::from_label(&label)
            .ok_or(ConfigError::UnknownScoringEngine { value: label })?,
        None => EngineKind::default(),
    };

    let repository = Arc::new(InMemoryLeadRepository::default());
    let engine = engine_for(kind, ScoringConfig::default());
    let service = LeadScoringService::new(repository, engine);

    let today = Local::now().date_naive();

    println!("Lead scoring demo ({} engine)", kind.label());
    println!("\nScored leads");
    for submission in sample_portfolio() {
        let record = service.create(submission, today)?;

        println!(
            "- {} | {} | {} | score {} | {}",
            record.profile.lead_id.0,
            record.profile.industry,
            record.profile.channel,
            record.score_details.score,
            record.score_details.priority.label()
        );
        for explanation in &record.score_details.explanations {
            println!("    {explanation}");
        }
    }

    let summary = service.summary()?;
    println!("\nDashboard summary");
    println!("- total: {}", summary.total_leads);
    println!("- hot: {}", summary.hot_leads);
    println!("- warm: {}", summary.warm_leads);
    println!("- cold: {}", summary.cold_leads);

    let actions = service.actions()?;
    if actions.is_empty() {
        println!("\nFollow-up queue: empty");
    } else {
        println!("\nFollow-up queue");
        for action in actions {
            println!("- [{}] {}", action.id, action.action_text);
        }
    }

    Ok(())
}
