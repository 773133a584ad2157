use thiserror::Error;

pub type Result<T> = std::result::Result<T, TriageError>;

#[derive(Error, Debug)]
pub enum TriageError {
  #[error("Please enter a query.")]
  EmptyQuery,

  #[error("Sample query {index} does not exist (inbox holds {available} queries)")]
  SampleOutOfRange { index: usize, available: usize },

  #[error("Unknown FAQ topic '{topic}' (expected leave, benefits or payroll)")]
  UnknownTopic { topic: String },

  #[error("Banner width {width} is out of range (allowed {min}..={max})")]
  InvalidWidth { width: usize, min: usize, max: usize },

  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Invalid configuration: {0}")]
  Json(#[from] serde_json::Error),
}

impl TriageError {
  pub fn sample_out_of_range(index: usize, available: usize) -> Self {
    Self::SampleOutOfRange { index, available }
  }

  pub fn unknown_topic(topic: impl Into<String>) -> Self {
    Self::UnknownTopic { topic: topic.into() }
  }

  pub fn invalid_width(width: usize, min: usize, max: usize) -> Self {
    Self::InvalidWidth { width, min, max }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_empty_query_message_matches_desk_prompt() {
    assert_eq!(TriageError::EmptyQuery.to_string(), "Please enter a query.");
  }

  #[test]
  fn test_out_of_range_message() {
    let err = TriageError::sample_out_of_range(9, 7);
    assert_eq!(err.to_string(), "Sample query 9 does not exist (inbox holds 7 queries)");
  }

  #[test]
  fn test_unknown_topic_keeps_input() {
    let err = TriageError::unknown_topic("pension");
    assert!(err.to_string().contains("'pension'"));
  }

  #[test]
  fn test_invalid_width_message() {
    let err = TriageError::invalid_width(5, 20, 200);
    assert_eq!(err.to_string(), "Banner width 5 is out of range (allowed 20..=200)");
  }

  #[test]
  fn test_json_error_converts() {
    let parse_err = serde_json::from_str::<serde_json::Value>("{ nope }").unwrap_err();
    let err: TriageError = parse_err.into();
    assert!(matches!(err, TriageError::Json(_)));
  }
}
