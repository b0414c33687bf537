//! Browser clock and randomness for record creation.

#[cfg(test)]
#[path = "env_test.rs"]
mod env_test;

use store::env::Environment;

/// [`Environment`] backed by `Date` and `Math.random`.
///
/// Native builds return fixed zero values; no native path mints records,
/// the fallbacks only keep the crate compiling and testable off-wasm.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserEnvironment;

impl Environment for BrowserEnvironment {
    fn now_ms(&self) -> i64 {
        #[cfg(feature = "browser")]
        {
            js_sys::Date::now() as i64
        }
        #[cfg(not(feature = "browser"))]
        {
            0
        }
    }

    fn now_iso(&self) -> String {
        #[cfg(feature = "browser")]
        {
            String::from(js_sys::Date::new_0().to_iso_string())
        }
        #[cfg(not(feature = "browser"))]
        {
            String::new()
        }
    }

    fn random(&self) -> f64 {
        #[cfg(feature = "browser")]
        {
            js_sys::Math::random()
        }
        #[cfg(not(feature = "browser"))]
        {
            0.0
        }
    }
}
