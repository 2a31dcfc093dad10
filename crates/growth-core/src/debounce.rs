// File: crates/growth-core/src/debounce.rs
// Summary: Trailing-edge debounce held as plain state; the caller supplies the clock.

use std::time::{Duration, Instant};

/// Default quiet period after the last edit before recomputing.
pub const RECOMPUTE_DELAY: Duration = Duration::from_millis(40);

/// Identifies one scheduled firing; a newer schedule supersedes older tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Pending {
    token: Token,
    due: Instant,
}

#[derive(Clone, Debug)]
pub struct Debouncer {
    delay: Duration,
    next_token: u64,
    pending: Option<Pending>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, next_token: 0, pending: None }
    }

    pub fn delay(&self) -> Duration { self.delay }

    /// (Re)arm the timer, cancelling whatever was pending.
    pub fn schedule(&mut self, now: Instant) -> Token {
        let token = Token(self.next_token);
        self.next_token += 1;
        self.pending = Some(Pending { token, due: now + self.delay });
        token
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Fire at most once: returns the token when the pending deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<Token> {
        match self.pending {
            Some(p) if now >= p.due => {
                self.pending = None;
                Some(p.token)
            }
            _ => None,
        }
    }

    pub fn deadline(&self) -> Option<Instant> { self.pending.map(|p| p.due) }
    pub fn is_pending(&self) -> bool { self.pending.is_some() }
}

impl Default for Debouncer {
    fn default() -> Self { Self::new(RECOMPUTE_DELAY) }
}
