//! Sample employee queries shown in the HR inbox

use crate::{Result, TriageError};

pub static SAMPLE_QUERIES: [&str; 7] = [
  "Hi, I haven’t received my salary yet. Can you check?",
  "Where can I find the company leave policy?",
  "My medical claim hasn’t been reimbursed for 2 months.",
  "I want to update my bank details for payroll.",
  "How many annual leaves do I have left?",
  "My manager is asking about my bonus payout details.",
  "Urgent: I was locked out of the HR portal, need help asap!",
];

/// Fetch a sample query by its 1-based inbox position
pub fn sample(index: usize) -> Result<&'static str> {
  index
    .checked_sub(1)
    .and_then(|i| SAMPLE_QUERIES.get(i))
    .copied()
    .ok_or_else(|| TriageError::sample_out_of_range(index, SAMPLE_QUERIES.len()))
}

/// Numbered inbox entries, starting at 1
pub fn numbered() -> impl Iterator<Item = (usize, &'static str)> {
  SAMPLE_QUERIES.iter().copied().enumerate().map(|(i, query)| (i + 1, query))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_sample_is_one_based() {
    assert_eq!(sample(1).unwrap(), SAMPLE_QUERIES[0]);
    assert_eq!(sample(7).unwrap(), SAMPLE_QUERIES[6]);
  }

  #[test]
  fn test_sample_out_of_range() {
    for index in [0, 8, usize::MAX] {
      let err = sample(index).unwrap_err();
      assert!(matches!(err, TriageError::SampleOutOfRange { available: 7, .. }));
    }
  }

  #[test]
  fn test_numbered_listing() {
    let entries: Vec<_> = numbered().collect();
    assert_eq!(entries.len(), 7);
    assert_eq!(entries[0].0, 1);
    assert_eq!(entries[6], (7, SAMPLE_QUERIES[6]));
  }
}
