// src/config.rs

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::io::tokenizer::DEFAULT_DELIMITER;
use crate::model::{ColumnSchema, RegistryLoader};

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
  /// Periodic table CSV used when no path is given on the command line.
  pub data_path: Option<PathBuf>,
  pub delimiter: char,
  /// Reject the whole dataset on the first malformed row.
  pub strict: bool,
  pub schema: ColumnSchema,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      data_path: None,
      delimiter: DEFAULT_DELIMITER,
      strict: false,
      schema: ColumnSchema::default(),
    }
  }
}

impl Config {
  /// Loads config from standard OS location (e.g., ~/.config/vsepr-elements/settings.json)
  pub fn load() -> (Self, String) {
    match Self::get_path() {
      Some(path) => Self::load_from(&path),
      None => (
        Self::default(),
        "No config directory available. Using defaults.".to_string(),
      ),
    }
  }

  /// Loads config from an explicit file. Falls back to defaults on any error.
  pub fn load_from(path: &Path) -> (Self, String) {
    if !path.exists() {
      return (
        Self::default(),
        "No config found. Using defaults.".to_string(),
      );
    }
    match File::open(path) {
      Ok(file) => {
        let reader = BufReader::new(file);
        match serde_json::from_reader(reader) {
          Ok(cfg) => (cfg, format!("Config loaded from {:?}", path)),
          Err(e) => (Self::default(), format!("Error parsing config: {}", e)),
        }
      }
      Err(e) => (Self::default(), format!("Error opening config: {}", e)),
    }
  }

  /// Saves config to standard OS location
  pub fn save(&self) -> String {
    match Self::get_path() {
      Some(path) => self.save_to(&path),
      None => "No config directory available.".to_string(),
    }
  }

  pub fn save_to(&self, path: &Path) -> String {
    if let Some(parent) = path.parent() {
      let _ = fs::create_dir_all(parent);
    }

    match File::create(path) {
      Ok(file) => {
        let writer = BufWriter::new(file);
        match serde_json::to_writer_pretty(writer, self) {
          Ok(_) => format!("Config saved to {:?}", path),
          Err(e) => format!("Failed to save config: {}", e),
        }
      }
      Err(e) => format!("Could not create config file: {}", e),
    }
  }

  /// Loader configured with this schema, delimiter and strictness.
  pub fn loader(&self) -> RegistryLoader {
    RegistryLoader::new(self.schema, self.delimiter, self.strict)
  }

  pub fn get_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "vsepr", "vsepr-elements")
      .map(|proj| proj.config_dir().join("settings.json"))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let (cfg, msg) = Config::load_from(&dir.path().join("settings.json"));
    assert_eq!(cfg, Config::default());
    assert!(msg.contains("defaults"));
  }

  #[test]
  fn test_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");
    let cfg = Config {
      data_path: Some(PathBuf::from("/data/periodic.csv")),
      delimiter: ';',
      strict: true,
      schema: ColumnSchema {
        color: 60,
        ..ColumnSchema::default()
      },
    };
    assert!(cfg.save_to(&path).starts_with("Config saved"));
    let (loaded, _) = Config::load_from(&path);
    assert_eq!(loaded, cfg);
  }

  #[test]
  fn test_partial_file_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "strict": true }"#).unwrap();
    let (cfg, _) = Config::load_from(&path);
    assert!(cfg.strict);
    assert_eq!(cfg.delimiter, ',');
    assert_eq!(cfg.schema, ColumnSchema::default());
  }

  #[test]
  fn test_broken_file_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();
    let (cfg, msg) = Config::load_from(&path);
    assert_eq!(cfg, Config::default());
    assert!(msg.starts_with("Error parsing config"));
  }

  #[test]
  fn test_loader_follows_config() {
    let cfg = Config {
      strict: true,
      delimiter: ';',
      ..Config::default()
    };
    let loader = cfg.loader();
    assert!(loader.strict);
    assert_eq!(loader.delimiter, ';');
  }
}
