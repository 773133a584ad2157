use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use triage::config::{Config, Presentation};
use triage::{desk, display, faq, inbox, logging, Triage, TriageError};

#[derive(Parser)]
#[command(name = "triage")]
#[command(about = "HR Triage Router - route employee queries to the right HR team")]
#[command(version)]
struct Cli {
  /// Enable debug logging
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Configuration file path
  #[arg(short, long, global = true, env = "TRIAGE_CONFIG")]
  config: Option<PathBuf>,

  /// Print replies at once instead of typing them out
  #[arg(long, global = true)]
  no_animate: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
enum OutputFormat {
  Pretty,
  Json,
}

/// Options shared by the commands that triage a query
#[derive(Args)]
struct TriageOptions {
  /// Mark the ticket as urgent and escalate it to HRBP
  #[arg(short, long)]
  escalate: bool,

  /// Output format
  #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
  format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
  /// List the sample queries in the HR inbox
  Inbox,
  /// Triage a sample query from the inbox
  Select {
    /// Inbox position (1-based)
    index: usize,
    #[command(flatten)]
    options: TriageOptions,
  },
  /// Submit a new HR query for triage
  Analyze {
    /// The question, as the employee wrote it
    text: String,
    #[command(flatten)]
    options: TriageOptions,
  },
  /// Show the FAQ answers, or the answer for one topic
  Faq {
    /// leave, benefits or payroll
    topic: Option<String>,
  },
  /// Show the configuration in effect
  Config {
    /// Save it to this path instead of printing it
    #[arg(short, long, value_name = "PATH")]
    write: Option<PathBuf>,
  },
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  logging::init(cli.verbose);

  let config = Config::resolve(cli.config.as_deref()).context("Failed to load configuration")?;
  let presentation = presentation_for(&config, &cli);
  let mut stdout = io::stdout().lock();

  match cli.command {
    Commands::Inbox => {
      display::render_inbox(&mut stdout, inbox::numbered())?;
      logging::info("Pick a query with `triage select <N>` to see how it is routed.");
    }
    Commands::Select { index, options } => {
      let triage = desk::select_sample(index)?;
      report(&mut stdout, &triage, &options, &presentation)?;
    }
    Commands::Analyze { text, options } => match desk::submit(&text) {
      Ok(triage) => report(&mut stdout, &triage, &options, &presentation)?,
      Err(TriageError::EmptyQuery) => {
        logging::error(&TriageError::EmptyQuery.to_string());
        process::exit(1);
      }
      Err(e) => return Err(e.into()),
    },
    Commands::Faq { topic } => match topic {
      Some(topic) => {
        let topic: faq::FaqTopic = topic.parse()?;
        display::render_faq(&mut stdout, [(topic, topic.answer())])?;
      }
      None => display::render_faq(&mut stdout, faq::entries())?,
    },
    Commands::Config { write } => match write {
      Some(path) => {
        config
          .save_to_file(&path)
          .with_context(|| format!("Failed to write configuration to {}", path.display()))?;
        logging::info(&format!("Wrote configuration to {}", path.display()));
      }
      None => writeln!(stdout, "{}", serde_json::to_string_pretty(&config)?)?,
    },
  }

  Ok(())
}

/// Animation only makes sense on an interactive terminal
fn presentation_for(config: &Config, cli: &Cli) -> Presentation {
  if cli.no_animate || !console::Term::stdout().is_term() {
    config.presentation.instant()
  } else {
    config.presentation.clone()
  }
}

fn report<W: Write>(
  out: &mut W,
  triage: &Triage,
  options: &TriageOptions,
  presentation: &Presentation,
) -> Result<()> {
  let escalation = options.escalate.then(|| desk::escalate(triage));

  match options.format {
    OutputFormat::Json => {
      let mut value = serde_json::to_value(triage)?;
      value["escalated"] = serde_json::Value::Bool(escalation.is_some());
      writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
    }
    OutputFormat::Pretty => {
      display::analyzing_pause(&mut io::stderr(), presentation)?;
      display::render_triage(out, triage, presentation)?;
      if let Some(escalation) = &escalation {
        display::render_escalation(out, escalation)?;
        logging::warn("Ticket escalated to HR Business Partner");
      }
    }
  }

  Ok(())
}
