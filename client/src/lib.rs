//! # client
//!
//! Browser adapter for the portfolio content stores. Supplies the
//! capabilities the `store` crate abstracts over — `localStorage`
//! persistence, the `Date`/`Math.random` clock, snapshot fetching — plus
//! the theme plumbing, JSON export downloads, and form feedback banners.
//!
//! Everything browser-facing is gated behind the `browser` cargo feature
//! with native no-op fallbacks, so the crate builds and its pure paths test
//! without a wasm target.

pub mod admin;
pub mod app;
pub mod env;
pub mod export;
pub mod feedback;
pub mod net;
pub mod storage;
pub mod theme;
