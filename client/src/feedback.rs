//! Transient form feedback banners.
//!
//! The contact form surfaces its outcome as a banner that auto-hides after
//! a fixed delay; showing one banner hides its counterpart first so success
//! and error are never visible together. There is no retry flow.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

/// How long a banner stays visible, in milliseconds.
pub const AUTO_HIDE_MS: u32 = 5_000;

/// Element id of the success banner.
pub const SUCCESS_BANNER_ID: &str = "form-success";

/// Element id of the error banner.
pub const ERROR_BANNER_ID: &str = "form-error";

/// Show the success banner and schedule its auto-hide.
pub fn show_success() {
    show(SUCCESS_BANNER_ID, ERROR_BANNER_ID);
}

/// Show the error banner and schedule its auto-hide.
pub fn show_error() {
    show(ERROR_BANNER_ID, SUCCESS_BANNER_ID);
}

fn show(visible_id: &str, hidden_id: &str) {
    #[cfg(feature = "browser")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(other) = document.get_element_by_id(hidden_id) {
            let _ = other.class_list().add_1("hidden");
        }
        let Some(banner) = document.get_element_by_id(visible_id) else {
            return;
        };
        let _ = banner.class_list().remove_1("hidden");

        let banner_id = visible_id.to_owned();
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(AUTO_HIDE_MS).await;
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                if let Some(banner) = document.get_element_by_id(&banner_id) {
                    let _ = banner.class_list().add_1("hidden");
                }
            }
        });
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (visible_id, hidden_id);
    }
}
