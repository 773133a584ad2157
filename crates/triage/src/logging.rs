//! Status lines for the user and tracing setup for diagnostics
//!
//! User-facing lines go to stderr with a short coloured tag so stdout stays
//! clean for results. Diagnostics go through `tracing`.

use colored::*;
use std::io::{self, Write};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

const TAG_WIDTH: usize = 7;

/// Install the tracing subscriber. `RUST_LOG` wins over the verbosity flag.
pub fn init(verbose: bool) {
  let fallback = if verbose { "triage=debug,warn" } else { "triage=warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

  // A subscriber may already be installed when running under a test harness
  let _ = tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
    .with(filter)
    .try_init();
}

/// `[tag]` padded so that messages line up
pub fn tag(color: Color, label: &str) -> String {
  let pad = TAG_WIDTH.saturating_sub(label.len() + 2);
  format!("[{}]{:<pad$}", label.color(color).bold(), "")
}

/// Write `message` with every line carrying the `[label]` tag
pub fn write_tagged<W: Write>(
  out: &mut W,
  color: Color,
  label: &str,
  message: &str,
) -> io::Result<()> {
  let prefix = tag(color, label);
  for line in message.lines() {
    writeln!(out, "{prefix} {line}")?;
  }
  Ok(())
}

fn emit(color: Color, label: &str, message: &str) {
  // Status lines are best effort; a closed stderr is not worth failing over
  let _ = write_tagged(&mut io::stderr().lock(), color, label, message);
}

pub fn info(message: &str) {
  emit(Color::Blue, "info", message);
}

pub fn warn(message: &str) {
  emit(Color::Yellow, "warn", message);
}

pub fn error(message: &str) {
  emit(Color::Red, "error", message);
}
