//! lesson-tui - Terminal UI for Lesson Deck
//!
//! Presents the Unit 1 "Communication" lesson as a full-screen slide deck
//! with English, Russian and Uzbek interface text.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use liblessondeck::config::{resolve_data_path, Config};
use liblessondeck::content::{unit1_vocab, validate_vocab};
use liblessondeck::logging::{resolve_config, LogFormat};
use liblessondeck::speech::speaker_from_config;
use liblessondeck::{Language, LessonError, NavigationState};

use lesson_tui::app::{App, AppState, EventHandler, UiConfig};
use lesson_tui::slides::{build_registry, SlideSettings};
use lesson_tui::stage::Stage;
use lesson_tui::terminal::{install_panic_hook, TerminalSession};
use lesson_tui::ui::theme::Theme;
use lesson_tui::TuiError;

#[derive(Parser, Debug)]
#[command(name = "lesson-tui")]
#[command(about = "Interactive English lesson in the terminal", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "LESSONDECK_CONFIG")]
    config: Option<PathBuf>,

    /// Interface language (en, ru, uz)
    #[arg(short, long)]
    lang: Option<Language>,

    /// Slide to start on (1-based)
    #[arg(short, long)]
    start: Option<usize>,

    /// Log format (text, json, pretty)
    #[arg(long)]
    log_format: Option<LogFormat>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Do not read words aloud
    #[arg(long)]
    no_speech: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_code(&e));
    }
}

/// Exit code for the innermost error we know about
fn exit_code(error: &anyhow::Error) -> i32 {
    if let Some(e) = error.downcast_ref::<TuiError>() {
        return e.exit_code();
    }
    if let Some(e) = error.downcast_ref::<LessonError>() {
        return e.exit_code();
    }
    1
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().context("Failed to load config")?,
    };

    if let Some(lang) = cli.lang {
        config.lesson.language = lang.code().to_string();
    }
    if let Some(start) = cli.start {
        config.lesson.start_slide = start;
    }
    if cli.no_speech {
        config.speech.enabled = false;
    }
    Ok(config)
}

/// The terminal belongs to the UI, so logs always go to a file
fn init_logging(cli: &Cli, config: &Config) -> anyhow::Result<PathBuf> {
    let logging = resolve_config(&config.logging, cli.log_format, cli.verbose)?;
    let path = match &logging.file {
        Some(path) => path.clone(),
        None => resolve_data_path()?.join("lessondeck.log"),
    };

    logging
        .with_file(&path)
        .init()
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    Ok(path)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    let log_path = init_logging(&cli, &config)?;

    let vocab = unit1_vocab();
    validate_vocab(&vocab).map_err(LessonError::from)?;
    let registry = build_registry(&vocab);
    tracing::info!(
        len = registry.len(),
        vocab = vocab.len(),
        log = %log_path.display(),
        "Registry built"
    );

    let nav = NavigationState::new(registry.len(), config.lesson.language())
        .map_err(LessonError::from)?
        .with_start(config.lesson.start_index());

    let ui_config = UiConfig::from_settings(&config.ui);
    let rng = match config.lesson.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let stage = Stage::new(registry, vocab, speaker_from_config(&config.speech))
        .with_settings(SlideSettings::from_config(&config))
        .with_rng(rng)
        .with_theme(Theme::from(&ui_config))
        .with_transition(Duration::from_millis(ui_config.transition_ms));

    let tick_rate_ms = ui_config.tick_rate_ms;
    let mut app = App::new(AppState::new(nav).with_config(ui_config), stage);

    install_panic_hook();
    let mut session = TerminalSession::enter()?;
    let mut events = EventHandler::new(tick_rate_ms);
    let result = event_loop(&mut session, &mut app, &mut events);
    drop(events);
    session.restore()?;

    tracing::info!(slide = app.state.nav.current_index() + 1, "Lesson closed");
    Ok(result?)
}

fn event_loop(
    session: &mut TerminalSession,
    app: &mut App,
    events: &mut EventHandler,
) -> lesson_tui::Result<()> {
    while !app.should_quit() {
        session.terminal().draw(|frame| app.draw(frame))?;
        let event = events.next()?;
        app.dispatch(event);
    }
    Ok(())
}
