//! Snapshot loaders for the deployed JSON data files.
//!
//! Browser (`browser` feature): real HTTP via `gloo-net`. Native: stubs
//! returning `None`.
//!
//! ERROR HANDLING
//! ==============
//! Any failure — network error, non-success status, malformed body — yields
//! `None` so startup can fall back to defaults per store. Nothing here
//! surfaces a failure value past the boot sequence.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "net_test.rs"]
mod net_test;

use store::contact::ContactSubmission;
use store::post::BlogPost;

/// Snapshot path for the blog post list.
pub const POSTS_SNAPSHOT_PATH: &str = "/data/blog-posts.json";

/// Snapshot path for the contact submission list.
pub const CONTACTS_SNAPSHOT_PATH: &str = "/data/contacts.json";

/// Fetch the deployed blog post snapshot, once at startup.
pub async fn fetch_posts() -> Option<Vec<BlogPost>> {
    #[cfg(feature = "browser")]
    {
        fetch_list(POSTS_SNAPSHOT_PATH).await
    }
    #[cfg(not(feature = "browser"))]
    {
        None
    }
}

/// Fetch the deployed contact snapshot, once at startup.
pub async fn fetch_contacts() -> Option<Vec<ContactSubmission>> {
    #[cfg(feature = "browser")]
    {
        fetch_list(CONTACTS_SNAPSHOT_PATH).await
    }
    #[cfg(not(feature = "browser"))]
    {
        None
    }
}

#[cfg(feature = "browser")]
async fn fetch_list<T: serde::de::DeserializeOwned>(path: &str) -> Option<Vec<T>> {
    let resp = gloo_net::http::Request::get(path).send().await.ok()?;
    if !resp.ok() {
        return None;
    }
    resp.json::<Vec<T>>().await.ok()
}
