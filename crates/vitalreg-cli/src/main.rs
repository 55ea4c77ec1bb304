//! `vitalreg`: terminal UI for the vital events registry.
//!
//! # Usage
//!
//! ```text
//! vitalreg --url http://localhost:8080 --user registrar --password secret
//! vitalreg --config ~/.config/vitalreg/config.toml --language am
//! ```

mod app;
mod client;
mod ui;

use std::{
  fs::File,
  io,
  path::PathBuf,
  sync::{Arc, Mutex},
  time::Duration,
};

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use client::{ApiClient, ApiConfig};
use crossterm::{
  event::{self, Event},
  execute,
  terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
  },
};
use ratatui::{Terminal, backend::CrosstermBackend};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;
use vitalreg_core::i18n::{Catalog, Language, Localizer};

// ─── CLI args ────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "vitalreg", about = "Terminal UI for the vital events registry")]
struct Args {
  /// Path to a TOML config file (url, username, password, language).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Base URL of the registry server (default: http://localhost:8080).
  #[arg(long, env = "VITALREG_URL")]
  url: Option<String>,

  /// API username.
  #[arg(long, env = "VITALREG_USER")]
  user: Option<String>,

  /// API password (plaintext).
  #[arg(long, env = "VITALREG_PASSWORD")]
  password: Option<String>,

  /// Initial UI language: en, am or om.
  #[arg(long, env = "VITALREG_LANGUAGE")]
  language: Option<Language>,

  /// Append logs to this file. The terminal itself is owned by the UI.
  #[arg(long, value_name = "FILE")]
  log_file: Option<PathBuf>,
}

// ─── Config file ─────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  url:      String,
  #[serde(default)]
  username: String,
  #[serde(default)]
  password: String,
  language: Option<Language>,
}

// ─── Entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();

  if let Some(path) = &args.log_file {
    let file = File::options()
      .create(true)
      .append(true)
      .open(path)
      .with_context(|| format!("opening log file {}", path.display()))?;
    tracing_subscriber::fmt()
      .with_env_filter(EnvFilter::from_default_env())
      .with_ansi(false)
      .with_writer(Mutex::new(file))
      .init();
  }

  // Load config file if provided.
  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flags override config file, which overrides defaults.
  let api_config = ApiConfig {
    base_url: args
      .url
      .or_else(|| (!file_cfg.url.is_empty()).then(|| file_cfg.url.clone()))
      .unwrap_or_else(|| "http://localhost:8080".to_string()),
    username: args
      .user
      .or_else(|| (!file_cfg.username.is_empty()).then(|| file_cfg.username.clone()))
      .unwrap_or_default(),
    password: args
      .password
      .or_else(|| (!file_cfg.password.is_empty()).then(|| file_cfg.password.clone()))
      .unwrap_or_default(),
  };
  let language = args.language.or(file_cfg.language).unwrap_or_default();

  let catalog = Catalog::builtin().context("loading translations")?;
  let client = ApiClient::new(api_config)?;
  let mut app = App::new(client, Localizer::new(Arc::new(catalog), language));

  // Set up the terminal.
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  // Load initial data.
  let load_result = app.load().await;

  // Run the event loop; restore terminal even on error.
  let run_result = if load_result.is_ok() {
    run_event_loop(&mut terminal, &mut app).await
  } else {
    load_result
  };

  // Restore terminal regardless of result.
  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  run_result
}

// ─── Event loop ──────────────────────────────────────────────────────────────

async fn run_event_loop(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App,
) -> Result<()> {
  loop {
    let size = terminal.size().context("reading terminal size")?;
    app.cert_viewport = ui::certificate::visible_rows(size.height);
    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    // Poll for an event, yielding control to tokio while waiting.
    let maybe_event = tokio::task::block_in_place(|| {
      if event::poll(Duration::from_millis(50))? {
        Ok::<_, io::Error>(Some(event::read()?))
      } else {
        Ok(None)
      }
    })?;

    if let Some(Event::Key(key)) = maybe_event {
      let cont = app.handle_key(key).await?;
      if !cont {
        break;
      }
    }
  }

  Ok(())
}
