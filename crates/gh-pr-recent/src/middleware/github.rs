//! GitHub Middleware
//!
//! Issues the search request whenever the credential changes (and on
//! refresh), and reports the outcome as actions. Every request carries a
//! [`FetchTicket`]; the reducer only accepts the result of the latest one.

use crate::actions::{Action, CredentialAction, PullRequestAction, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::{Credential, FetchTicket, Pr};
use crate::middleware::Middleware;
use crate::state::AppState;
use anyhow::Context;
use gh_client::{lookback_start, recent_involvement_query, GitHubClient, OctocrabClient};
use gh_pr_config::AppConfig;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::runtime::{Handle, Runtime};

const SOURCE: &str = "Fetch";

/// Middleware for the GitHub search request
pub struct GitHubMiddleware {
    /// Tokio runtime the requests run on
    runtime: Runtime,
    api_base_url: Option<String>,
    lookback_days: i64,
    /// Credential of the most recent submission
    current: Credential,
    /// Bumped on every fetch and credential change; a ticket is current while
    /// its id equals this value
    generation: Arc<AtomicU64>,
}

impl GitHubMiddleware {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;
        Ok(Self {
            runtime,
            api_base_url: config.api_base_url.clone(),
            lookback_days: config.lookback_days,
            current: Credential::default(),
            generation: Arc::new(AtomicU64::new(0)),
        })
    }

    /// Handle for spawning other async work on the same runtime
    pub fn runtime_handle(&self) -> Handle {
        self.runtime.handle().clone()
    }

    fn on_submit(&mut self, credential: &Credential, dispatcher: &Dispatcher) {
        if *credential == self.current {
            log::debug!("GitHubMiddleware: credential unchanged, not fetching");
            return;
        }

        self.current = credential.clone();
        self.generation.fetch_add(1, Ordering::SeqCst);

        if credential.is_empty() {
            log::info!("GitHubMiddleware: empty credential, not fetching");
            return;
        }
        self.fetch(dispatcher);
    }

    fn on_refresh(&mut self, dispatcher: &Dispatcher) {
        if self.current.is_empty() {
            dispatcher.dispatch(Action::StatusBar(StatusBarAction::warning(
                "No token set, press t to enter one",
                SOURCE,
            )));
            return;
        }
        self.fetch(dispatcher);
    }

    /// Start one search request for the current credential
    fn fetch(&mut self, dispatcher: &Dispatcher) {
        let since = match lookback_start(chrono::Utc::now(), self.lookback_days) {
            Ok(since) => since,
            Err(e) => {
                log::error!("GitHubMiddleware: {:#}", e);
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                    format!("Failed to fetch PRs: {}", e),
                    SOURCE,
                )));
                return;
            }
        };
        let ticket = FetchTicket {
            id: self.generation.fetch_add(1, Ordering::SeqCst) + 1,
            credential: self.current.clone(),
        };
        let query = recent_involvement_query(since);
        log::info!("GitHubMiddleware: fetch #{} with query '{}'", ticket.id, query);

        dispatcher.dispatch(Action::PullRequest(PullRequestAction::LoadStart(
            ticket.clone(),
        )));
        dispatcher.dispatch(Action::StatusBar(StatusBarAction::running(
            "Loading pull requests...",
            SOURCE,
        )));

        let api_base_url = self.api_base_url.clone();
        let generation = Arc::clone(&self.generation);
        let dispatcher = dispatcher.clone();

        self.runtime.spawn(async move {
            let result = search(ticket.credential.expose(), api_base_url.as_deref(), &query).await;
            let is_latest = generation.load(Ordering::SeqCst) == ticket.id;

            match result {
                Ok(prs) => {
                    log::info!("GitHubMiddleware: fetch #{} returned {} PRs", ticket.id, prs.len());
                    if is_latest {
                        dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
                            format!("Loaded {} pull requests", prs.len()),
                            SOURCE,
                        )));
                    }
                    dispatcher.dispatch(Action::PullRequest(PullRequestAction::Loaded {
                        ticket,
                        prs,
                    }));
                }
                Err(e) => {
                    log::error!("GitHubMiddleware: fetch #{} failed: {:#}", ticket.id, e);
                    if is_latest {
                        dispatcher.dispatch(Action::StatusBar(StatusBarAction::error(
                            format!("Failed to fetch PRs: {}", e),
                            SOURCE,
                        )));
                    }
                    dispatcher.dispatch(Action::PullRequest(PullRequestAction::LoadError {
                        ticket,
                        error: format!("{:#}", e),
                    }));
                }
            }
        });
    }
}

async fn search(token: &str, api_base_url: Option<&str>, query: &str) -> anyhow::Result<Vec<Pr>> {
    let client = OctocrabClient::from_token(token, api_base_url)?;
    let prs = client.search_pull_requests(query).await?;
    Ok(prs.into_iter().map(Pr::from).collect())
}

impl Middleware for GitHubMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Credential(CredentialAction::Submit(credential)) => {
                self.on_submit(credential, dispatcher);
                // The reducer records the new credential
                true
            }
            Action::PullRequest(PullRequestAction::Refresh) => {
                self.on_refresh(dispatcher);
                false
            }
            _ => true,
        }
    }
}
