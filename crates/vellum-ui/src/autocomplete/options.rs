use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{trace, warn};
use regex::RegexBuilder;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;
use vellum_engine::time::Debouncer;

use super::completer::{Completer, KeyedOption, OptionValue, OptionsSource};
use super::trigger::deburr;

/// Options fetched and filtered for one `load` call.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionsBatch {
    pub generation: u64,
    pub completer: String,
    pub query: String,
    pub options: Vec<KeyedOption>,
}

/// Fetches options for the active completer and applies supersession.
///
/// Every [`load`](Self::load) cancels the previous request and bumps the
/// generation. Batches from older generations are dropped on receipt, so the
/// last *issued* request wins regardless of completion order. Cancellation is
/// cooperative: an in-flight fetch runs to completion and its result is
/// discarded.
///
/// Without a tokio runtime, debounced requests wait in an `Instant`-driven
/// [`Debouncer`] released by [`poll_deferred`](Self::poll_deferred).
pub struct OptionsLoader {
    generation: u64,
    max_results: usize,
    debounce: Duration,
    token: Option<CancellationToken>,
    in_flight: bool,
    deferred: Debouncer<Deferred>,
    tx: UnboundedSender<OptionsBatch>,
    rx: UnboundedReceiver<OptionsBatch>,
}

/// A debounced request parked until its quiet period ends.
struct Deferred {
    generation: u64,
    completer: Arc<dyn Completer>,
    query: String,
}

impl OptionsLoader {
    pub fn new(max_results: usize, debounce: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            generation: 0,
            max_results,
            debounce,
            token: None,
            in_flight: false,
            deferred: Debouncer::new(debounce),
            tx,
            rx,
        }
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    /// Starts fetching options for `query`.
    ///
    /// A static list from a non-debounced completer resolves immediately and
    /// is returned. Anything else runs on the current tokio runtime and is
    /// delivered through [`try_next`](Self::try_next) / [`next`](Self::next).
    pub fn load(&mut self, completer: Arc<dyn Completer>, query: &str) -> Option<OptionsBatch> {
        self.cancel();
        self.generation += 1;
        let generation = self.generation;
        let max = self.max_results;

        let debounce = if completer.is_debounced() { self.debounce } else { Duration::ZERO };
        let query = query.to_string();

        // Debounced completers are not asked for options until the quiet
        // period has passed.
        let source = if debounce.is_zero() { Some(completer.options(&query)) } else { None };
        if let Some(OptionsSource::List(raw)) = source {
            let options = filter_options(&query, key_options(completer.as_ref(), raw), max);
            return Some(OptionsBatch {
                generation,
                completer: completer.name().to_string(),
                query,
                options,
            });
        }

        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(_) if source.is_none() => {
                trace!("autocomplete: no tokio runtime; deferring {query:?} to poll_deferred");
                self.deferred.schedule(Instant::now(), Deferred { generation, completer, query });
                return None;
            }
            Err(_) => {
                warn!(
                    "autocomplete: no tokio runtime; dropping option fetch for {:?}",
                    completer.name()
                );
                return None;
            }
        };

        let token = CancellationToken::new();
        self.token = Some(token.clone());
        self.in_flight = true;
        let tx = self.tx.clone();

        handle.spawn(async move {
            if !debounce.is_zero() {
                tokio::select! {
                    _ = token.cancelled() => return,
                    _ = tokio::time::sleep(debounce) => {}
                }
            }

            let raw = match source {
                Some(source) => source.resolve().await,
                None => completer.options(&query).resolve().await,
            };

            if token.is_cancelled() {
                trace!("autocomplete: discarding superseded options for {query:?}");
                return;
            }

            let options = filter_options(&query, key_options(completer.as_ref(), raw), max);
            let batch = OptionsBatch {
                generation,
                completer: completer.name().to_string(),
                query,
                options,
            };
            let _ = tx.send(batch);
        });

        None
    }

    /// Cancels the outstanding request, if any.
    pub fn cancel(&mut self) {
        if let Some(token) = self.token.take() {
            token.cancel();
        }
        self.deferred.cancel();
        self.in_flight = false;
    }

    /// Deadline of a request parked for lack of a runtime.
    pub fn deferred_deadline(&self) -> Option<Instant> {
        self.deferred.deadline()
    }

    /// Releases a parked debounced request once its quiet period has passed.
    ///
    /// Only static lists can be resolved here; a pending future needs a
    /// runtime and is dropped.
    pub fn poll_deferred(&mut self, now: Instant) -> Option<OptionsBatch> {
        let Deferred { generation, completer, query } = self.deferred.poll(now)?;
        if generation != self.generation {
            return None;
        }
        match completer.options(&query) {
            OptionsSource::List(raw) => {
                let options = filter_options(&query, key_options(completer.as_ref(), raw), self.max_results);
                Some(OptionsBatch { generation, completer: completer.name().to_string(), query, options })
            }
            OptionsSource::Pending(_) => {
                warn!(
                    "autocomplete: no tokio runtime; dropping option fetch for {:?}",
                    completer.name()
                );
                None
            }
        }
    }

    /// Returns a delivered batch for the current generation without waiting.
    pub fn try_next(&mut self) -> Option<OptionsBatch> {
        while let Ok(batch) = self.rx.try_recv() {
            if let Some(batch) = self.accept(batch) {
                return Some(batch);
            }
        }
        None
    }

    /// Waits for the current request to deliver.
    ///
    /// Returns `None` immediately when nothing is in flight. A fetch that never
    /// resolves keeps this pending until the future is dropped.
    pub async fn next(&mut self) -> Option<OptionsBatch> {
        while self.in_flight {
            let batch = self.rx.recv().await?;
            if let Some(batch) = self.accept(batch) {
                return Some(batch);
            }
        }
        None
    }

    fn accept(&mut self, batch: OptionsBatch) -> Option<OptionsBatch> {
        if batch.generation != self.generation {
            trace!(
                "autocomplete: dropping stale batch {} (current {})",
                batch.generation, self.generation
            );
            return None;
        }
        self.in_flight = false;
        self.token = None;
        Some(batch)
    }
}

impl Drop for OptionsLoader {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Keys raw options as `"{name}-{index}"` and resolves label, keywords and
/// disabled state through the completer.
pub fn key_options(completer: &dyn Completer, raw: Vec<OptionValue>) -> Vec<KeyedOption> {
    raw.into_iter()
        .enumerate()
        .map(|(index, value)| KeyedOption::from_raw(completer, index, value))
        .collect()
}

/// Keeps options whose keywords or text label contain a word starting with
/// `query`, accent- and case-insensitively. Original order; at most `max`.
pub fn filter_options(query: &str, options: Vec<KeyedOption>, max: usize) -> Vec<KeyedOption> {
    let pattern = format!(r"(?:\b|\s|^){}", regex::escape(&deburr(query)));
    let re = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re,
        Err(e) => {
            warn!("autocomplete: cannot build filter for {query:?}: {e}");
            return Vec::new();
        }
    };

    options
        .into_iter()
        .filter(|option| option.search_terms().any(|term| re.is_match(&deburr(term))))
        .take(max)
        .collect()
}
