//! Helpdesk actions: triaging inbox samples, submitting new queries and
//! escalating a ticket.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::inbox;
use crate::router::{self, RoutingResult};
use crate::{Result, TriageError};

pub const ESCALATION_CONFIRMATION: &str = "This ticket has been escalated to HRBP.";

/// A query together with the route it was given
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Triage {
  /// The query as the employee wrote it
  pub query: String,
  #[serde(flatten)]
  pub routing: RoutingResult,
}

impl Triage {
  fn route(query: &str) -> Self {
    let routing = router::classify(query);
    debug!(
      category = %routing.category,
      keyword = router::matched_keyword(query).unwrap_or("-"),
      "routed query"
    );
    Self { query: query.to_string(), routing }
  }
}

/// Outcome of the "mark as urgent" action
#[derive(Debug, Clone, Serialize)]
pub struct Escalation {
  pub escalated: bool,
  pub notice: String,
  pub escalated_at: DateTime<Utc>,
}

/// Triage the inbox sample at a 1-based position
pub fn select_sample(index: usize) -> Result<Triage> {
  let query = inbox::sample(index)?;
  info!(index, "triaging inbox sample");
  Ok(Triage::route(query))
}

/// Triage a newly typed query; blank input is rejected before routing
pub fn submit(text: &str) -> Result<Triage> {
  if text.trim().is_empty() {
    return Err(TriageError::EmptyQuery);
  }
  info!(chars = text.chars().count(), "triaging submitted query");
  Ok(Triage::route(text))
}

/// Escalate a ticket to HRBP regardless of how it was routed
pub fn escalate(triage: &Triage) -> Escalation {
  info!(category = %triage.routing.category, "ticket escalated");
  Escalation {
    escalated: true,
    notice: ESCALATION_CONFIRMATION.to_string(),
    escalated_at: Utc::now(),
  }
}
