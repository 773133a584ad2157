use triage::faq::FaqTopic;
use triage::router::{ESCALATION_NOTICE, GENERAL_ACKNOWLEDGEMENT};
use triage::{classify, submit, Category, TriageError};

#[test]
fn test_priority_order_across_all_rules() {
  let cases = [
    ("bank holiday medical urgent", Category::Payroll),
    ("holiday medical urgent", Category::Leave),
    ("medical urgent", Category::Benefits),
    ("urgent", Category::Escalation),
    ("nothing to see", Category::General),
  ];

  for (query, category) in cases {
    assert_eq!(classify(query).category, category, "query: {query}");
  }
}

#[test]
fn test_replies_per_category() {
  assert_eq!(classify("salary").response, FaqTopic::Payroll.answer());
  assert_eq!(classify("vacation").response, FaqTopic::Leave.answer());
  assert_eq!(classify("claim").response, FaqTopic::Benefits.answer());
  assert_eq!(classify("asap").response, ESCALATION_NOTICE);
  assert_eq!(classify("hello").response, GENERAL_ACKNOWLEDGEMENT);
}

#[test]
fn test_classification_is_deterministic() {
  let query = "Urgent: I was locked out of the HR portal, need help asap!";
  assert_eq!(classify(query), classify(query));
}

#[test]
fn test_blank_submission_never_routes() {
  let err = submit(" \t ").unwrap_err();
  assert!(matches!(err, TriageError::EmptyQuery));
  assert_eq!(err.to_string(), "Please enter a query.");
}

#[test]
fn test_submit_matches_classify() {
  let text = "My manager is asking about my bonus payout details.";
  assert_eq!(submit(text).unwrap().routing, classify(text));
}
