//! CRM lead-scoring service library.
//!
//! The `crm` module carries the lead domain: intake, the weighted scoring
//! engine behind a swappable [`crm::leads::scoring::ScoringEngine`] seam,
//! storage abstractions, and dashboard aggregation. `auth` provides password
//! registration and bearer-token gating for the HTTP surface.

pub mod auth;
pub mod config;
pub mod crm;
pub mod error;
pub mod telemetry;
