//! Admin-surface gating.
//!
//! Admin visibility is a build-time cargo feature, not a runtime hostname
//! check: dev bundles are built with `--features admin`, production bundles
//! without. This is a development convenience, not a security boundary —
//! there is no authentication anywhere in the system.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

/// True when this build includes the admin surface.
#[must_use]
pub fn admin_enabled() -> bool {
    cfg!(feature = "admin")
}
