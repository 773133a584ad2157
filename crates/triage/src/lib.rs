//! Triage - HR helpdesk query routing
//!
//! Routes employee queries to a category and the team that owns it by
//! ordered keyword rules, with a canned suggested reply for each route.

pub mod config;
pub mod desk;
pub mod display;
pub mod error;
pub mod faq;
pub mod inbox;
pub mod logging;
pub mod router;

pub use config::Config;
pub use desk::{escalate, select_sample, submit, Escalation, Triage};
pub use error::{Result, TriageError};
pub use router::{classify, Category, RoutingResult};
