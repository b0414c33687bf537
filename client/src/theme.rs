//! Theme application and system-preference plumbing.
//!
//! Reads `prefers-color-scheme`, applies the chosen theme as a `data-theme`
//! attribute on the `<html>` element for the site CSS, and keeps tracking
//! live preference changes until the user makes an explicit choice. The
//! precedence rules live in [`store::theme::ThemeManager`]; this module is
//! only the browser glue around them.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "browser")]
use std::cell::RefCell;
#[cfg(feature = "browser")]
use std::rc::Rc;

use store::theme::Theme;
#[cfg(feature = "browser")]
use store::theme::ThemeManager;

#[cfg(feature = "browser")]
use crate::storage::LocalStorage;

#[cfg(any(test, feature = "browser"))]
const COLOR_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Read the OS/browser color-scheme preference. Defaults to light outside
/// a browser or when `matchMedia` is unavailable.
#[must_use]
pub fn system_preference() -> Theme {
    #[cfg(feature = "browser")]
    {
        let prefers_dark = web_sys::window()
            .and_then(|w| w.match_media(COLOR_SCHEME_QUERY).ok().flatten())
            .is_some_and(|query| query.matches());
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }
    #[cfg(not(feature = "browser"))]
    {
        Theme::Light
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "browser")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = theme;
    }
}

/// Track live `prefers-color-scheme` changes for the page session.
///
/// The manager decides whether a change still applies (it stops once an
/// explicit choice exists); applied changes update the document attribute.
#[cfg(feature = "browser")]
pub fn watch_system_preference(manager: Rc<RefCell<ThemeManager<LocalStorage>>>) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::Closure;

    let Some(query) = web_sys::window().and_then(|w| w.match_media(COLOR_SCHEME_QUERY).ok().flatten())
    else {
        return;
    };
    let callback = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
        move |event: web_sys::MediaQueryListEvent| {
            let preference = if event.matches() { Theme::Dark } else { Theme::Light };
            if manager.borrow_mut().system_preference_changed(preference) {
                apply(preference);
            }
        },
    );
    let _ = query.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref());
    // The listener lives for the whole page session.
    callback.forget();
}
