//! Integration scenarios for the lead scoring workflow.
//!
//! Exercises the public service facade and the HTTP routers end to end:
//! account registration, token login, authenticated lead intake, and the
//! dashboard views derived from stored records.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use chrono::{Duration, NaiveDate};

    use leadscore::auth::{
        auth_router, require_bearer, AuthService, DirectoryError, TokenIssuer, UserAccount,
        UserDirectory,
    };
    use leadscore::crm::leads::{
        engine_for, lead_router, EngineKind, LeadId, LeadRecord, LeadRepository, LeadScoringService,
        LeadSubmission, PipelineStage, RepositoryError, ScoringConfig,
    };

    pub(super) fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).expect("valid date")
    }

    pub(super) fn submission(lead_id: &str) -> LeadSubmission {
        LeadSubmission {
            lead_id: lead_id.to_string(),
            industry: "Technology".to_string(),
            company_size: 250,
            channel: "Website".to_string(),
            interaction_count: 10,
            last_interaction_days_ago: Some(2),
            last_interaction_date: None,
            has_requested_pricing: true,
            has_demo_request: true,
            stage: PipelineStage::New,
        }
    }

    pub(super) fn quiet_submission(lead_id: &str) -> LeadSubmission {
        LeadSubmission {
            lead_id: lead_id.to_string(),
            industry: "Retail".to_string(),
            company_size: 10,
            channel: "Referral".to_string(),
            interaction_count: 0,
            last_interaction_days_ago: Some(60),
            last_interaction_date: None,
            has_requested_pricing: false,
            has_demo_request: false,
            stage: PipelineStage::New,
        }
    }

    #[derive(Default, Clone)]
    pub(super) struct MemoryLeads {
        records: Arc<Mutex<HashMap<LeadId, LeadRecord>>>,
    }

    impl LeadRepository for MemoryLeads {
        fn insert(&self, record: LeadRecord) -> Result<LeadRecord, RepositoryError> {
            let mut guard = self.records.lock().expect("lock");
            if guard.contains_key(&record.profile.lead_id) {
                return Err(RepositoryError::Conflict);
            }
            guard.insert(record.profile.lead_id.clone(), record.clone());
            Ok(record)
        }

        fn fetch(&self, id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError> {
            let guard = self.records.lock().expect("lock");
            Ok(guard.get(id).cloned())
        }

        fn all(&self) -> Result<Vec<LeadRecord>, RepositoryError> {
            let guard = self.records.lock().expect("lock");
            Ok(guard.values().cloned().collect())
        }

        fn update_stage(
            &self,
            id: &LeadId,
            stage: PipelineStage,
        ) -> Result<Option<LeadRecord>, RepositoryError> {
            let mut guard = self.records.lock().expect("lock");
            Ok(guard.get_mut(id).map(|record| {
                record.profile.stage = stage;
                record.clone()
            }))
        }
    }

    #[derive(Default)]
    pub(super) struct MemoryDirectory {
        accounts: Mutex<HashMap<String, UserAccount>>,
    }

    impl UserDirectory for MemoryDirectory {
        fn insert(&self, account: UserAccount) -> Result<UserAccount, DirectoryError> {
            let mut guard = self.accounts.lock().expect("lock");
            if guard.contains_key(&account.email) {
                return Err(DirectoryError::Conflict);
            }
            guard.insert(account.email.clone(), account.clone());
            Ok(account)
        }

        fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>, DirectoryError> {
            let guard = self.accounts.lock().expect("lock");
            Ok(guard.get(email).cloned())
        }
    }

    pub(super) fn build_service() -> Arc<LeadScoringService<MemoryLeads>> {
        let repository = Arc::new(MemoryLeads::default());
        let engine = engine_for(EngineKind::RuleBased, ScoringConfig::default());
        Arc::new(LeadScoringService::new(repository, engine))
    }

    /// Full API surface the binary serves: auth routes plus the bearer-gated
    /// lead and dashboard routes.
    pub(super) fn build_api() -> axum::Router {
        let tokens = Arc::new(TokenIssuer::new(
            "workflow-test-secret",
            Duration::minutes(30),
        ));
        let auth_service = Arc::new(AuthService::new(
            Arc::new(MemoryDirectory::default()),
            tokens.clone(),
        ));

        let guarded = lead_router(build_service()).layer(axum::middleware::from_fn_with_state(
            tokens,
            require_bearer,
        ));

        auth_router(auth_service).merge(guarded)
    }
}

mod scoring {
    use super::common::*;
    use leadscore::crm::leads::Priority;

    #[test]
    fn portfolio_feeds_summary_and_follow_ups() {
        let service = build_service();

        service
            .create(submission("LEAD-001"), today())
            .expect("hot lead stored");
        service
            .create(quiet_submission("LEAD-002"), today())
            .expect("cold lead stored");

        let records = service.list().expect("list");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].score_details.priority, Priority::Hot);
        assert_eq!(records[0].score_details.score, 100);
        assert_eq!(records[1].score_details.score, 0);

        let summary = service.summary().expect("summary");
        assert_eq!(summary.total_leads, 2);
        assert_eq!(summary.hot_leads, 1);
        assert_eq!(summary.cold_leads, 1);

        let actions = service.actions().expect("actions");
        assert_eq!(actions.len(), 2);
        assert!(actions[0].action_text.contains("LEAD-001"));
        assert!(actions[1].action_text.contains("weekly review"));
    }

    #[test]
    fn stored_scores_match_a_fresh_engine_run() {
        let service = build_service();
        let record = service
            .create(submission("LEAD-001"), today())
            .expect("stored");

        let preview = service
            .preview(submission("LEAD-REPLAY"), today())
            .expect("preview");

        assert_eq!(record.score_details.score, preview.score);
        assert_eq!(record.score_details.priority, preview.priority);
        assert_eq!(record.score_details.explanations, preview.explanations);
    }
}

mod routing {
    use super::common::*;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn read_json(response: axum::response::Response) -> Value {
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        serde_json::from_slice(&body).expect("json")
    }

    async fn obtain_token(router: &axum::Router) -> String {
        let response = router
            .clone()
            .oneshot(
                Request::post("/api/v1/auth/register")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        serde_json::json!({
                            "email": "rep@example.com",
                            "password": "pipeline-pass-1",
                            "full_name": "Sam Seller",
                        })
                        .to_string(),
                    ))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = router
            .clone()
            .oneshot(
                Request::post("/api/v1/auth/token")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(
                        "username=rep%40example.com&password=pipeline-pass-1",
                    ))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);

        read_json(response)
            .await
            .get("access_token")
            .and_then(Value::as_str)
            .expect("token present")
            .to_string()
    }

    #[tokio::test]
    async fn lead_routes_require_a_bearer_token() {
        let router = build_api();

        let response = router
            .oneshot(
                Request::get("/api/v1/dashboard/summary")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn authenticated_intake_reaches_the_dashboard() {
        let router = build_api();
        let token = obtain_token(&router).await;

        let response = router
            .clone()
            .oneshot(
                Request::post("/api/v1/leads")
                    .header(header::CONTENT_TYPE, "application/json")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::from(
                        serde_json::to_vec(&submission("LEAD-001")).expect("serialize"),
                    ))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::CREATED);

        let payload = read_json(response).await;
        assert_eq!(
            payload.get("lead_id").and_then(Value::as_str),
            Some("LEAD-001")
        );
        assert_eq!(
            payload
                .pointer("/score_details/priority")
                .and_then(Value::as_str),
            Some("Hot")
        );
        let explanations = payload
            .pointer("/score_details/explanations")
            .and_then(Value::as_array)
            .expect("explanations present");
        assert_eq!(explanations.len(), 5);

        let response = router
            .oneshot(
                Request::get("/api/v1/dashboard/summary")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);

        let payload = read_json(response).await;
        assert_eq!(payload.get("total_leads").and_then(Value::as_u64), Some(1));
        assert_eq!(payload.get("hot_leads").and_then(Value::as_u64), Some(1));
    }

    #[tokio::test]
    async fn stateless_preview_never_touches_the_dashboard() {
        let router = build_api();
        let token = obtain_token(&router).await;

        let response = router
            .clone()
            .oneshot(
                Request::post("/api/v1/leads/score")
                    .header(header::CONTENT_TYPE, "application/json")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::from(
                        serde_json::to_vec(&submission("LEAD-PREVIEW")).expect("serialize"),
                    ))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);

        let payload = read_json(response).await;
        assert_eq!(payload.get("score").and_then(Value::as_u64), Some(100));

        let response = router
            .oneshot(
                Request::get("/api/v1/dashboard/summary")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        let payload = read_json(response).await;
        assert_eq!(payload.get("total_leads").and_then(Value::as_u64), Some(0));
    }
}
