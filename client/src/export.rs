//! Manual JSON export as a browser file download.
//!
//! Exporting is the only supported path for propagating in-session edits
//! back into the versioned site data: the owner downloads the file and
//! commits it into the static site's `data/` directory by hand.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use store::contact::{ContactStore, ContactSubmission};
use store::env::Environment;
use store::post::{BlogPost, PostStore};
use store::record::Record;
use store::storage::Storage;

/// Download the current post list as `blog-posts.json`.
pub fn export_posts<S: Storage, E: Environment>(posts: &PostStore<S, E>) {
    download(BlogPost::EXPORT_FILE, &posts.export_data_uri());
}

/// Download the current contact list as `contacts.json`.
pub fn export_contacts<S: Storage, E: Environment>(contacts: &ContactStore<S, E>) {
    download(ContactSubmission::EXPORT_FILE, &contacts.export_data_uri());
}

/// Offer `data_uri` as a download named `file_name` via a synthetic anchor.
fn download(file_name: &str, data_uri: &str) {
    #[cfg(feature = "browser")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(element) = document.create_element("a") else {
            return;
        };
        let _ = element.set_attribute("href", data_uri);
        let _ = element.set_attribute("download", file_name);
        if let Some(anchor) = element.dyn_ref::<web_sys::HtmlElement>() {
            anchor.click();
        }
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (file_name, data_uri);
    }
}
