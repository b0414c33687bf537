//! Ambient environment capability: wall-clock time and randomness.
//!
//! Record creation stamps dates and mints tokens from the current time and
//! a random value. Those inputs come through this trait so `create`/`submit`
//! stay deterministic under test; the browser implementation lives in the
//! `client` crate.

#[cfg(test)]
#[path = "env_test.rs"]
mod env_test;

/// Clock and randomness source for record creation.
pub trait Environment {
    /// Milliseconds since the Unix epoch.
    fn now_ms(&self) -> i64;

    /// Current instant as an ISO-8601 UTC string,
    /// e.g. `2025-07-12T09:30:00.000Z`.
    fn now_iso(&self) -> String;

    /// Uniform random value in `[0, 1)`.
    fn random(&self) -> f64;
}

/// Fixed-output [`Environment`] for deterministic tests.
#[derive(Clone, Debug)]
pub struct FixedEnvironment {
    pub now_ms: i64,
    pub now_iso: String,
    pub random: f64,
}

impl FixedEnvironment {
    #[must_use]
    pub fn new(now_ms: i64, now_iso: &str, random: f64) -> Self {
        Self {
            now_ms,
            now_iso: now_iso.to_owned(),
            random,
        }
    }
}

impl Environment for FixedEnvironment {
    fn now_ms(&self) -> i64 {
        self.now_ms
    }

    fn now_iso(&self) -> String {
        self.now_iso.clone()
    }

    fn random(&self) -> f64 {
        self.random
    }
}
