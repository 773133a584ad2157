//! Terminal rendering of triage results
//!
//! Everything here writes to a caller-supplied writer so the binary can
//! target stdout and tests can target a buffer.

use colored::*;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::config::Presentation;
use crate::desk::{Escalation, Triage};
use crate::faq::FaqTopic;
use crate::router::Category;

/// A line of `ch` repeated `width` times
pub fn banner_line(width: usize, ch: char) -> String {
  ch.to_string().repeat(width)
}

fn category_color(category: Category) -> Color {
  match category {
    Category::Payroll => Color::Cyan,
    Category::Leave => Color::Green,
    Category::Benefits => Color::Blue,
    Category::Escalation => Color::Red,
    Category::General => Color::Magenta,
  }
}

/// Write `text` one character at a time, pausing `delay` between characters
pub fn type_out<W: Write>(out: &mut W, text: &str, delay: Duration) -> io::Result<()> {
  for ch in text.chars() {
    write!(out, "{ch}")?;
    out.flush()?;
    if !delay.is_zero() {
      thread::sleep(delay);
    }
  }
  writeln!(out)
}

/// Show the "analyzing" notice and hold for the configured pause
pub fn analyzing_pause<W: Write>(out: &mut W, presentation: &Presentation) -> io::Result<()> {
  let delay = presentation.analyzing_delay();
  if delay.is_zero() {
    return Ok(());
  }
  writeln!(out, "{}", "🔎 Analyzing the message...".italic().dimmed())?;
  out.flush()?;
  thread::sleep(delay);
  Ok(())
}

/// Render the incoming message, its route and the suggested reply
pub fn render_triage<W: Write>(
  out: &mut W,
  triage: &Triage,
  presentation: &Presentation,
) -> io::Result<()> {
  let width = presentation.banner_width();
  let routing = &triage.routing;

  writeln!(out, "{}", "📨 Incoming Message".purple().bold())?;
  writeln!(out, "💬 {}", triage.query.italic())?;
  writeln!(out)?;

  writeln!(out, "{}", "🧩 Routed Category".purple().bold())?;
  writeln!(out, "{}", banner_line(width, '-'))?;
  writeln!(
    out,
    "{} {}",
    "Category:".bold(),
    routing.category.as_str().color(category_color(routing.category)).bold()
  )?;
  writeln!(out, "{} {}", "Assigned To:".bold(), routing.team)?;
  writeln!(out, "{}", banner_line(width, '-'))?;
  writeln!(out)?;

  writeln!(out, "{}", "🤖 Suggested Reply".purple().bold())?;
  if presentation.animate {
    type_out(out, &routing.response, presentation.typing_delay())
  } else {
    writeln!(out, "{}", routing.response)
  }
}

/// Render the escalation confirmation
pub fn render_escalation<W: Write>(out: &mut W, escalation: &Escalation) -> io::Result<()> {
  writeln!(out)?;
  writeln!(
    out,
    "🚨 {} {}",
    escalation.notice.yellow().bold(),
    format!("({})", escalation.escalated_at.format("%H:%M:%S UTC")).dimmed()
  )
}

/// Render the numbered HR inbox
pub fn render_inbox<W, I>(out: &mut W, entries: I) -> io::Result<()>
where
  W: Write,
  I: IntoIterator<Item = (usize, &'static str)>,
{
  writeln!(out, "{}", "📬 HR Inbox".purple().bold())?;
  for (number, query) in entries {
    writeln!(out, "  {} {}", format!("{number:>2}.").cyan(), query)?;
  }
  Ok(())
}

/// Render FAQ entries as `topic: answer`
pub fn render_faq<W, I>(out: &mut W, entries: I) -> io::Result<()>
where
  W: Write,
  I: IntoIterator<Item = (FaqTopic, &'static str)>,
{
  for (topic, answer) in entries {
    writeln!(out, "{} {}", format!("{topic}:").cyan().bold(), answer)?;
  }
  Ok(())
}
