//! Canned replies for the topics the helpdesk can answer on its own.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Result, TriageError};

/// Topic keys of the FAQ table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaqTopic {
  Leave,
  Benefits,
  Payroll,
}

impl FaqTopic {
  pub const ALL: [FaqTopic; 3] = [FaqTopic::Leave, FaqTopic::Benefits, FaqTopic::Payroll];

  pub fn key(self) -> &'static str {
    match self {
      FaqTopic::Leave => "leave",
      FaqTopic::Benefits => "benefits",
      FaqTopic::Payroll => "payroll",
    }
  }

  /// The canned answer for this topic
  pub fn answer(self) -> &'static str {
    match self {
      FaqTopic::Leave => {
        "You can check your leave balance and apply via the HR self-service portal under 'My Leave'."
      }
      FaqTopic::Benefits => {
        "You can view your benefits and claim submissions through the Benefits Portal."
      }
      FaqTopic::Payroll => {
        "Payroll-related details are handled by the Payroll team. You can check pay slips in the HRIS system."
      }
    }
  }
}

impl fmt::Display for FaqTopic {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.key())
  }
}

impl FromStr for FaqTopic {
  type Err = TriageError;

  fn from_str(s: &str) -> Result<Self> {
    let key = s.trim().to_lowercase();
    FaqTopic::ALL
      .into_iter()
      .find(|topic| topic.key() == key)
      .ok_or_else(|| TriageError::unknown_topic(s))
  }
}

/// Look up the answer for a topic key such as `"leave"`
pub fn lookup(key: &str) -> Result<&'static str> {
  key.parse::<FaqTopic>().map(FaqTopic::answer)
}

/// All entries, in table order
pub fn entries() -> impl Iterator<Item = (FaqTopic, &'static str)> {
  FaqTopic::ALL.into_iter().map(|topic| (topic, topic.answer()))
}
