//! Application startup: explicit store construction and snapshot hydration.
//!
//! DESIGN
//! ======
//! The stores are built once here and handed to whatever page wiring needs
//! them, instead of hanging off ambient globals. Storage and clock
//! capabilities are injected so the same store logic runs in native tests.
//! The snapshot fetch happens exactly once per page session; a slow fetch
//! only delays default-population, and a failed one never surfaces past
//! this boundary.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::cell::RefCell;
use std::rc::Rc;

use store::contact::{ContactDraft, ContactStore, ContactSubmission};
use store::post::{self, PostStore};
use store::theme::{Theme, ThemeManager};

use crate::env::BrowserEnvironment;
use crate::feedback;
use crate::net;
use crate::storage::LocalStorage;
use crate::theme;

/// The constructed stores for one page session.
pub struct App {
    pub posts: PostStore<LocalStorage, BrowserEnvironment>,
    pub contacts: ContactStore<LocalStorage, BrowserEnvironment>,
    /// Shared with the system-preference listener for the page lifetime.
    pub theme: Rc<RefCell<ThemeManager<LocalStorage>>>,
}

/// Install the panic hook and console logger. Call once before [`boot`].
pub fn init_logging() {
    #[cfg(feature = "browser")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
    }
}

/// Build the stores, hydrate them from the deployed snapshots, and apply
/// the initial theme.
///
/// Load failures never surface: posts fall back to the seeded defaults and
/// contacts to an empty list, each with a logged note.
pub async fn boot() -> App {
    let mut posts = PostStore::new(LocalStorage, BrowserEnvironment);
    match net::fetch_posts().await {
        Some(records) => {
            posts.replace_all(records);
        }
        None => {
            log::info!("no blog posts snapshot found, using default posts");
            posts.replace_all(post::default_posts());
        }
    }

    let mut contacts = ContactStore::new(LocalStorage, BrowserEnvironment);
    match net::fetch_contacts().await {
        Some(records) => contacts.replace_all(records),
        None => log::info!("no contacts snapshot found, starting with an empty list"),
    }

    let theme = Rc::new(RefCell::new(ThemeManager::new(
        LocalStorage,
        theme::system_preference(),
    )));
    theme::apply(theme.borrow().current());
    #[cfg(feature = "browser")]
    theme::watch_system_preference(Rc::clone(&theme));

    App {
        posts,
        contacts,
        theme,
    }
}

/// Capture a contact-form submission and surface the outcome as a banner.
///
/// Capture itself cannot fail; the error banner
/// ([`feedback::show_error`]) stays available for the form wiring when the
/// surrounding submission flow breaks.
pub fn submit_contact(app: &mut App, draft: ContactDraft) -> ContactSubmission {
    let submission = app.contacts.submit(draft);
    feedback::show_success();
    submission
}

/// Flip the theme as an explicit user choice and apply it to the document.
pub fn toggle_theme(app: &App) -> Theme {
    let next = app.theme.borrow_mut().toggle();
    theme::apply(next);
    next
}
