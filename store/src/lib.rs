//! # store
//!
//! Record stores for a static portfolio site: blog posts, contact
//! submissions, and the light/dark theme choice.
//!
//! The site itself is static; edits live in browser storage until the owner
//! exports a JSON file and redeploys it. This crate owns the record model,
//! the store mechanics, and the derived-field algorithms. Ambient
//! capabilities (key/value persistence, wall-clock time, randomness) enter
//! through the [`storage::Storage`] and [`env::Environment`] traits so every
//! store runs and tests without a browser; the browser implementations live
//! in the `client` crate.

pub mod contact;
pub mod env;
pub mod post;
pub mod record;
pub mod storage;
pub mod text;
pub mod theme;
