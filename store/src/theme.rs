//! Light/dark theme choice with system-preference fallback.
//!
//! PRECEDENCE
//! ==========
//! An explicit user choice, once persisted, permanently overrides the
//! system signal for that browser profile. Until then the applied theme
//! tracks live system-preference changes. Construction and tracking never
//! write storage; only `set`/`toggle` do, which is what makes a choice
//! explicit.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::storage::Storage;

/// Persisted-storage key for the explicit theme choice.
pub const THEME_KEY: &str = "theme";

/// The two-valued theme the site CSS consumes via `data-theme`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value. Anything but the two known strings is
    /// treated as no stored choice.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Theme state for one browser profile.
#[derive(Debug)]
pub struct ThemeManager<S: Storage> {
    storage: S,
    current: Theme,
    has_explicit_choice: bool,
}

impl<S: Storage> ThemeManager<S> {
    /// Resolve the initial theme: a persisted explicit choice wins,
    /// otherwise the system preference applies.
    #[must_use]
    pub fn new(storage: S, system_preference: Theme) -> Self {
        let stored = storage.get(THEME_KEY).and_then(|value| Theme::parse(&value));
        Self {
            current: stored.unwrap_or(system_preference),
            has_explicit_choice: stored.is_some(),
            storage,
        }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Record an explicit choice and persist it.
    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        self.has_explicit_choice = true;
        self.storage.set(THEME_KEY, theme.as_str());
    }

    /// Flip light/dark as an explicit choice; returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.flipped();
        self.set(next);
        next
    }

    /// React to a live system-preference change. Returns `true` when the
    /// change was applied; ignored once an explicit choice exists.
    pub fn system_preference_changed(&mut self, preference: Theme) -> bool {
        if self.has_explicit_choice {
            return false;
        }
        self.current = preference;
        true
    }
}
