//! In-memory user directory backing the demo binary

use crate::error::LookupError;
use crate::lookup::LookupResult;
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
}

const NAMES: &[&str] = &[
    "Ada Lovelace",
    "Alan Turing",
    "Alonzo Church",
    "Barbara Liskov",
    "Brian Kernighan",
    "Claude Shannon",
    "Dennis Ritchie",
    "Donald Knuth",
    "Edsger Dijkstra",
    "Frances Allen",
    "Grace Hopper",
    "Guido van Rossum",
    "Hedy Lamarr",
    "John McCarthy",
    "Ken Thompson",
    "Leslie Lamport",
    "Linus Torvalds",
    "Margaret Hamilton",
    "Niklaus Wirth",
    "Radia Perlman",
    "Robin Milner",
    "Tony Hoare",
];

/// Simulated remote user search
pub struct UserDirectory {
    users: Vec<User>,
    latency: Duration,
    fail_every: Option<usize>,
    calls: AtomicUsize,
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new(Duration::ZERO, None)
    }
}

impl UserDirectory {
    /// `fail_every = Some(n)` makes every n-th search fail
    pub fn new(latency: Duration, fail_every: Option<usize>) -> Self {
        let users = NAMES
            .iter()
            .zip(1..)
            .map(|(name, id)| User {
                id,
                name: name.to_string(),
                email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            })
            .collect();
        Self {
            users,
            latency,
            fail_every: fail_every.filter(|&n| n > 0),
            calls: AtomicUsize::new(0),
        }
    }

    /// Case-insensitive substring search over names. Blocks for the configured latency.
    pub fn search(&self, term: &str) -> LookupResult<User> {
        let call = self.calls.fetch_add(1, Ordering::Relaxed) + 1;
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }

        if self.fail_every.is_some_and(|n| call % n == 0) {
            return Err(LookupError::failed(format!("user service unavailable (call {call})")));
        }

        let needle = term.to_lowercase();
        Ok(self
            .users
            .iter()
            .filter(|u| u.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}
