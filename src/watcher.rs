//! The poll/compare/notify loop.

use anyhow::Result;
use chrono::Utc;
use log::{error, info};
use serde_json::Value;
use tokio::time::sleep;

use crate::config::Config;
use crate::error::WatchError;
use crate::practicum_client::PracticumClient;
use crate::telegram_client::TelegramClient;
use crate::verdict::{check_response, parse_status};

/// Everything one cycle is allowed to mutate.
#[derive(Debug)]
pub struct WatchState {
    /// Lower bound for the next query, epoch seconds. Advances after every
    /// successful poll so a cycle only sees changes not yet reported.
    pub from_date: i64,
    /// Rendered verdict from the last change we announced.
    pub last_verdict: Option<String>,
    /// Last failure we announced, so a flapping API is reported once.
    pub last_error: Option<String>,
}

impl WatchState {
    pub fn new(from_date: i64) -> Self {
        Self {
            from_date,
            last_verdict: None,
            last_error: None,
        }
    }
}

/// Inspect one successful poll: render the first entry's verdict and decide
/// whether it is news.
///
/// An empty homework list is "nothing new", not a failure.
fn process(homeworks: &[Value], state: &mut WatchState) -> Result<Option<String>, WatchError> {
    let Some(first) = homeworks.first() else {
        return Ok(None);
    };

    let message = parse_status(first)?;
    if state.last_verdict.as_deref() == Some(message.as_str()) {
        return Ok(None);
    }

    state.last_verdict = Some(message.clone());
    Ok(Some(message))
}

/// Decide whether a failure should be announced, updating the dedup slot.
/// A repeat of the last announced failure stays quiet; a different one is
/// news again.
fn should_announce(message: &str, state: &mut WatchState) -> bool {
    if state.last_error.as_deref() == Some(message) {
        return false;
    }
    state.last_error = Some(message.to_string());
    true
}

pub struct Watcher {
    cfg: Config,
    practicum: PracticumClient,
    telegram: TelegramClient,
}

impl Watcher {
    pub fn new(cfg: Config) -> Self {
        let practicum = PracticumClient::new(
            cfg.endpoint.clone(),
            cfg.practicum_token.clone(),
            cfg.request_timeout,
        );
        let telegram = TelegramClient::new(&cfg.telegram_token, cfg.telegram_chat_id);

        Self {
            cfg,
            practicum,
            telegram,
        }
    }

    /// Run forever. Only process termination stops the loop.
    pub async fn run(&self) -> Result<()> {
        let mut state = WatchState::new(Utc::now().timestamp());
        let interval = self.cfg.poll_interval;

        info!(
            "Watching for review-status changes every {}s",
            interval.as_secs()
        );

        loop {
            match self.cycle(&mut state).await {
                Ok(Some(message)) => self.telegram.send(&message).await,
                Ok(None) => info!("No changes, next poll in {}s", interval.as_secs()),
                Err(err) => self.report_failure(&err, &mut state).await,
            }
            sleep(interval).await;
        }
    }

    /// One pass through poll -> validate -> render -> compare. The poll
    /// timestamp only advances when the whole pass succeeds, so a failed
    /// cycle retries with identical parameters.
    async fn cycle(&self, state: &mut WatchState) -> Result<Option<String>, WatchError> {
        let polled_at = Utc::now().timestamp();

        let response = self.practicum.homework_statuses(state.from_date).await?;
        let homeworks = check_response(&response)?;
        let message = process(homeworks, state)?;

        state.from_date = polled_at;
        Ok(message)
    }

    /// Log the failure and announce it once per distinct error.
    async fn report_failure(&self, err: &WatchError, state: &mut WatchState) {
        let message = format!("Bot failure: {err}");
        error!("{message}");

        if should_announce(&message, state) {
            self.telegram.send(&message).await;
        }
    }
}
