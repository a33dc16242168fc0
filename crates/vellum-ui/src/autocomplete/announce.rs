use std::time::{Duration, Instant};

use vellum_engine::time::Debouncer;

/// A result-count message for screen readers. Hosts speak it assertively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub message: String,
}

/// Message for a freshly applied option list.
pub fn announcement_for(count: usize, filter_value: &str) -> Announcement {
    let message = match (count, filter_value.is_empty()) {
        (0, _) => "No results.".to_string(),
        (1, false) => "1 result found, use up and down arrow keys to navigate.".to_string(),
        (n, false) => format!("{n} results found, use up and down arrow keys to navigate."),
        (1, true) => "Initial 1 result loaded. Type to filter all available results. \
                      Use up and down arrow keys to navigate."
            .to_string(),
        (n, true) => format!(
            "Initial {n} results loaded. Type to filter all available results. \
             Use up and down arrow keys to navigate."
        ),
    };
    Announcement { message }
}

/// Debounced announcement queue; only the last message in a burst is spoken.
#[derive(Debug, Clone)]
pub struct Announcer {
    debouncer: Debouncer<Announcement>,
}

impl Announcer {
    pub fn new(delay: Duration) -> Self {
        Self { debouncer: Debouncer::new(delay) }
    }

    pub fn schedule(&mut self, now: Instant, announcement: Announcement) {
        self.debouncer.schedule(now, announcement);
    }

    pub fn poll(&mut self, now: Instant) -> Option<Announcement> {
        self.debouncer.poll(now)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    pub fn cancel(&mut self) {
        self.debouncer.cancel();
    }
}
