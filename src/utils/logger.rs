// src/utils/logger.rs

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::io::{self, IsTerminal, Write};
use std::sync::OnceLock;

static COLORS: OnceLock<bool> = OnceLock::new();
static LOGGER: TermLogger = TermLogger;

struct TermLogger;

/// Map `-v` repetitions to a level: warn, info, debug, then trace.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
  match verbose {
    0 => LevelFilter::Warn,
    1 => LevelFilter::Info,
    2 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  }
}

pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
  // Only colour when a person is watching stderr
  let _ = COLORS.set(io::stderr().is_terminal());
  log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

fn style(level: Level) -> (&'static str, &'static str) {
  match level {
    Level::Error => ("🔴", "\x1b[1;31m"), // Red & Bold
    Level::Warn => ("🟠", "\x1b[33m"),    // Orange
    Level::Info => ("🔵", "\x1b[34m"),    // Blue
    Level::Debug => ("⚪", "\x1b[90m"),   // Gray
    Level::Trace => ("▫️", "\x1b[90m"),
  }
}

impl log::Log for TermLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= log::max_level()
  }

  fn log(&self, record: &Record) {
    if !self.enabled(record.metadata()) {
      return;
    }
    let (icon, color) = style(record.level());

    // Format: "🟠  Skipping line 12: ..."
    let msg = if COLORS.get().copied().unwrap_or(false) {
      format!("{}  {}{}\x1b[0m\n", icon, color, record.args())
    } else {
      format!("{}  {}\n", icon, record.args())
    };

    let _ = io::stderr().lock().write_all(msg.as_bytes());
  }

  fn flush(&self) {
    let _ = io::stderr().flush();
  }
}
