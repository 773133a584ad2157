//! Configuration management for the triage desk
//!
//! Only presentation settings live here. Routing rules, the FAQ table and
//! the inbox are fixed tables compiled into the crate.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::{Result, TriageError};

const LOCAL_CONFIG_PATHS: [&str; 2] = [".triage.json", "triage.json"];

pub const MIN_WIDTH: usize = 20;
pub const MAX_WIDTH: usize = 200;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
  #[serde(default)]
  pub presentation: Presentation,
}

/// How results are shown in the terminal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presentation {
  /// Type the suggested reply out one character at a time
  #[serde(default = "default_animate")]
  pub animate: bool,
  /// Pause between typed characters
  #[serde(default = "default_typing_delay_ms")]
  pub typing_delay_ms: u64,
  /// "Analyzing" pause before a result is shown
  #[serde(default = "default_analyzing_delay_ms")]
  pub analyzing_delay_ms: u64,
  /// Width of banners and boxes
  #[serde(default = "default_width")]
  pub width: usize,
}

fn default_animate() -> bool {
  true
}
fn default_typing_delay_ms() -> u64 {
  30
}
fn default_analyzing_delay_ms() -> u64 {
  1200
}
fn default_width() -> usize {
  80
}

impl Default for Presentation {
  fn default() -> Self {
    Self {
      animate: default_animate(),
      typing_delay_ms: default_typing_delay_ms(),
      analyzing_delay_ms: default_analyzing_delay_ms(),
      width: default_width(),
    }
  }
}

impl Presentation {
  pub fn typing_delay(&self) -> Duration {
    Duration::from_millis(self.typing_delay_ms)
  }

  pub fn analyzing_delay(&self) -> Duration {
    Duration::from_millis(self.analyzing_delay_ms)
  }

  /// Width used for banners, kept inside `MIN_WIDTH..=MAX_WIDTH`
  pub fn banner_width(&self) -> usize {
    self.width.clamp(MIN_WIDTH, MAX_WIDTH)
  }

  /// Reject settings that cannot be rendered
  pub fn validate(&self) -> Result<()> {
    if !(MIN_WIDTH..=MAX_WIDTH).contains(&self.width) {
      return Err(TriageError::invalid_width(self.width, MIN_WIDTH, MAX_WIDTH));
    }
    Ok(())
  }

  /// Settings with every pause removed
  pub fn instant(&self) -> Self {
    Self { animate: false, typing_delay_ms: 0, analyzing_delay_ms: 0, ..self.clone() }
  }
}

impl Config {
  /// Load configuration from a file
  pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = serde_json::from_str(&content)?;
    config.presentation.validate()?;
    Ok(config)
  }

  /// Load configuration from the current directory, the user config dir, or defaults
  pub fn load() -> Result<Self> {
    for path in LOCAL_CONFIG_PATHS {
      if Path::new(path).exists() {
        return Self::load_from_file(path);
      }
    }

    if let Some(path) = user_config_path().filter(|path| path.exists()) {
      return Self::load_from_file(path);
    }

    Ok(Config::default())
  }

  /// Load an explicit file when given, otherwise search the usual places
  pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
    match explicit {
      Some(path) => Self::load_from_file(path),
      None => Self::load(),
    }
  }

  /// Save configuration to a file
  pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
    let content = serde_json::to_string_pretty(self)?;
    std::fs::write(path, content)?;
    Ok(())
  }
}

/// `<config dir>/triage/config.json`
pub fn user_config_path() -> Option<PathBuf> {
  dirs::config_dir().map(|dir| dir.join("triage").join("config.json"))
}
