//! Keyword routing of HR queries
//!
//! Rules are checked in a fixed order and the first rule whose keywords
//! appear in the lower-cased query decides the category. Anything that no
//! rule claims lands in [`Category::General`], so routing never fails.

use serde::Serialize;
use std::fmt;

use crate::faq::FaqTopic;

pub const ESCALATION_NOTICE: &str = "⚠️ This message has been flagged as urgent and routed to HRBP.";
pub const GENERAL_ACKNOWLEDGEMENT: &str =
  "Your query has been received and logged. We'll respond shortly.";
pub const GENERAL_TEAM: &str = "HR Helpdesk";

/// Where a query ends up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
  Payroll,
  Leave,
  Benefits,
  Escalation,
  General,
}

impl Category {
  pub fn as_str(self) -> &'static str {
    match self {
      Category::Payroll => "Payroll",
      Category::Leave => "Leave",
      Category::Benefits => "Benefits",
      Category::Escalation => "Escalation",
      Category::General => "General",
    }
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Suggested reply attached to a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
  Faq(FaqTopic),
  Notice(&'static str),
}

impl Reply {
  pub fn text(self) -> &'static str {
    match self {
      Reply::Faq(topic) => topic.answer(),
      Reply::Notice(text) => text,
    }
  }
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
  pub category: Category,
  pub team: &'static str,
  pub keywords: &'static [&'static str],
  pub reply: Reply,
}

impl Rule {
  /// First keyword of this rule found in an already lower-cased query
  fn hit(&self, lowered: &str) -> Option<&'static str> {
    self.keywords.iter().copied().find(|keyword| lowered.contains(keyword))
  }

  fn to_result(self) -> RoutingResult {
    RoutingResult {
      category: self.category,
      team: self.team.to_string(),
      response: self.reply.text().to_string(),
    }
  }
}

/// Routing rules in priority order
pub static RULES: [Rule; 4] = [
  Rule {
    category: Category::Payroll,
    team: "Payroll Support Team",
    keywords: &["salary", "bonus", "pay", "bank"],
    reply: Reply::Faq(FaqTopic::Payroll),
  },
  Rule {
    category: Category::Leave,
    team: "Leave & Attendance Team",
    keywords: &["leave", "vacation", "holiday"],
    reply: Reply::Faq(FaqTopic::Leave),
  },
  Rule {
    category: Category::Benefits,
    team: "Benefits Admin Team",
    keywords: &["benefit", "medical", "claim"],
    reply: Reply::Faq(FaqTopic::Benefits),
  },
  Rule {
    category: Category::Escalation,
    team: "HR Business Partner (HRBP)",
    keywords: &["urgent", "asap"],
    reply: Reply::Notice(ESCALATION_NOTICE),
  },
];

static FALLBACK: Rule = Rule {
  category: Category::General,
  team: GENERAL_TEAM,
  keywords: &[],
  reply: Reply::Notice(GENERAL_ACKNOWLEDGEMENT),
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutingResult {
  pub category: Category,
  pub team: String,
  pub response: String,
}

fn winning_rule(text: &str) -> (&'static Rule, Option<&'static str>) {
  let lowered = text.to_lowercase();
  RULES
    .iter()
    .find_map(|rule| rule.hit(&lowered).map(|keyword| (rule, Some(keyword))))
    .unwrap_or((&FALLBACK, None))
}

/// Route a query to a category, team and suggested reply
pub fn classify(text: &str) -> RoutingResult {
  winning_rule(text).0.to_result()
}

/// Keyword that decided the route, `None` when the query fell through to General
pub fn matched_keyword(text: &str) -> Option<&'static str> {
  winning_rule(text).1
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_empty_query_falls_back_to_general() {
    let result = classify("");
    assert_eq!(result.category, Category::General);
    assert_eq!(result.team, "HR Helpdesk");
    assert_eq!(result.response, GENERAL_ACKNOWLEDGEMENT);
  }

  #[test]
  fn test_every_result_is_populated() {
    let queries = ["", "   ", "salary", "vacation", "claim", "asap", "🙂", "WiFi?"];
    for query in queries {
      let result = classify(query);
      assert!(!result.category.as_str().is_empty());
      assert!(!result.team.is_empty(), "team empty for {query:?}");
      assert!(!result.response.is_empty(), "response empty for {query:?}");
    }
  }

  #[test]
  fn test_leave_beats_escalation() {
    assert_eq!(classify("I need leave and it's urgent").category, Category::Leave);
  }

  #[test]
  fn test_payroll_beats_leave() {
    let result = classify("salary and leave question");
    assert_eq!(result.category, Category::Payroll);
    assert_eq!(result.team, "Payroll Support Team");
    assert_eq!(result.response, FaqTopic::Payroll.answer());
  }

  #[test]
  fn test_benefits_beats_escalation() {
    assert_eq!(classify("urgent medical claim").category, Category::Benefits);
  }

  #[test]
  fn test_matching_ignores_case() {
    assert_eq!(classify("SALARY issue").category, Category::Payroll);
    assert_eq!(classify("Holiday plans").category, Category::Leave);
  }

  #[test]
  fn test_unmatched_query_goes_to_helpdesk() {
    let result = classify("What is the office WiFi password?");
    assert_eq!(result.category, Category::General);
    assert_eq!(result.team, "HR Helpdesk");
  }

  #[test]
  fn test_asap_escalates() {
    let result = classify("Please help asap");
    assert_eq!(result.category, Category::Escalation);
    assert_eq!(result.team, "HR Business Partner (HRBP)");
    assert_eq!(result.response, ESCALATION_NOTICE);
  }

  #[test]
  fn test_pay_matches_inside_words() {
    assert_eq!(classify("question about my payroll").category, Category::Payroll);
    assert_eq!(classify("how do I repay an advance").category, Category::Payroll);
    assert_eq!(matched_keyword("how do I repay an advance"), Some("pay"));
  }

  #[test]
  fn test_leave_and_benefits_replies_come_from_faq() {
    assert_eq!(classify("vacation days").response, FaqTopic::Leave.answer());
    assert_eq!(classify("benefits enrolment").response, FaqTopic::Benefits.answer());
  }

  #[test]
  fn test_matched_keyword_reports_first_keyword_in_rule_order() {
    assert_eq!(matched_keyword("bank transfer for my bonus"), Some("bonus"));
    assert_eq!(matched_keyword("URGENT please"), Some("urgent"));
    assert_eq!(matched_keyword("hello there"), None);
  }

  #[test]
  fn test_category_display() {
    assert_eq!(Category::Escalation.to_string(), "Escalation");
  }

  #[test]
  fn test_routing_result_serializes_category_by_name() {
    let json = serde_json::to_value(classify("bonus")).unwrap();
    assert_eq!(json["category"], "Payroll");
    assert_eq!(json["team"], "Payroll Support Team");
  }
}
