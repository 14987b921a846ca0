use clap::Parser;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io::{self, Write};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, RwLock};
use std::time::Duration;

mod actions;
mod background;
mod capabilities;
mod cli;
mod command_id;
mod dispatcher;
mod domain_models;
mod keybindings;
mod keymap;
mod logger;
mod middleware;
mod reducer;
mod reducers;
mod state;
mod utils;
mod view_models;
mod views;

use actions::{Action, BootstrapAction, GlobalAction};
use background::{spawn_background_worker, SharedState};
use cli::Cli;
use domain_models::{Credential, Location};
use gh_pr_config::AppConfig;
use middleware::{
    credential::CredentialMiddleware, github::GitHubMiddleware, keyboard::KeyboardMiddleware,
    location::LocationMiddleware, logging::LoggingMiddleware,
    pull_request::PullRequestMiddleware, translation::TranslationMiddleware, Middleware,
};
use state::AppState;
use utils::clipboard::SystemClipboard;

fn main() -> anyhow::Result<()> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let log_file = logger::init()?;
    log::info!("Starting gh-pr-recent, logging to {}", log_file.display());

    let app_config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load(),
    };
    let location = Location::parse(cli.location.as_deref().unwrap_or_default());
    let fallback_credential = Credential::new(cli.token.as_deref().unwrap_or_default());

    // Terminal escape sequences from the clipboard, written by the render loop
    let (terminal_tx, terminal_rx) = channel::<String>();

    let github = GitHubMiddleware::new(&app_config)?;
    let runtime = github.runtime_handle();

    // Executed in this order; any of them may consume an action
    let middleware: Vec<Box<dyn Middleware>> = vec![
        Box::new(LoggingMiddleware::new()),
        Box::new(KeyboardMiddleware::new()),
        Box::new(TranslationMiddleware::new()),
        Box::new(CredentialMiddleware::new()),
        Box::new(LocationMiddleware::new(fallback_credential)),
        Box::new(github),
        Box::new(PullRequestMiddleware::new(
            runtime,
            Box::new(SystemClipboard::new(terminal_tx)),
        )),
    ];

    let shared_state: SharedState = Arc::new(RwLock::new(AppState::new(location, app_config)));
    let (action_tx, action_rx) = channel::<Action>();
    let (result_tx, result_rx) = channel::<Action>();

    let worker = spawn_background_worker(
        action_rx,
        action_tx.clone(),
        result_tx,
        shared_state.clone(),
        middleware,
    );

    action_tx
        .send(Action::Bootstrap(BootstrapAction::Start))
        .map_err(|_| anyhow::anyhow!("Background worker is not running"))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &shared_state, &action_tx, &result_rx, &terminal_rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // The worker may already be gone after a Quit from the keyboard
    let _ = action_tx.send(Action::Global(GlobalAction::Quit));
    if worker.join().is_err() {
        log::error!("Background worker panicked");
    }

    result?;

    let shareable = shared_state
        .read()
        .map(|state| state.location.shareable().to_query_string())
        .unwrap_or_default();
    if !shareable.is_empty() {
        println!("?{}", shareable);
    }

    log::info!("Exiting gh-pr-recent");
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    shared_state: &SharedState,
    action_tx: &Sender<Action>,
    result_rx: &Receiver<Action>,
    terminal_rx: &Receiver<String>,
) -> anyhow::Result<()> {
    // The main thread owns the authoritative state; the shared copy is a snapshot
    let mut state = shared_state
        .read()
        .map_err(|e| anyhow::anyhow!("State lock poisoned: {}", e))?
        .clone();

    loop {
        // Reduce everything the middleware chain let through
        let mut changed = false;
        while let Ok(action) = result_rx.try_recv() {
            state = reducer::reduce(state, &action);
            changed = true;
        }
        if changed {
            match shared_state.write() {
                Ok(mut shared) => *shared = state.clone(),
                Err(e) => log::error!("Failed to publish state: {}", e),
            }
        }

        terminal.draw(|frame| {
            let area = frame.area();
            views::render(&state, area, frame);
        })?;

        for sequence in terminal_rx.try_iter() {
            let mut stdout = io::stdout().lock();
            stdout.write_all(sequence.as_bytes())?;
            stdout.flush()?;
        }

        if !state.running {
            break;
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press
                    && action_tx
                        .send(Action::Global(GlobalAction::KeyPressed(key)))
                        .is_err()
                {
                    log::error!("Background worker gone, stopping");
                    break;
                }
            }
        }
    }

    Ok(())
}
