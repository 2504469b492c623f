//! Page configuration injected into the app at construction.
//!
//! DESIGN
//! ======
//! Public page settings are baked in at build time (like the public env vars
//! of a browser bundle), so the SSR render and the hydrated client resolve the
//! same values. Render paths receive a `PageConfig` through context and never
//! read the environment themselves.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Welcome text shown when `PAGE_WELCOME` is unset or empty.
pub const PAGE_WELCOME_FALLBACK: &str = "A Monster Tamagotchi and Battle game for EOS blockchain!";

/// Resolved page configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageConfig {
    pub welcome: String,
}

impl PageConfig {
    /// Build a config from an optional welcome value, applying the fallback
    /// literal when the value is absent or empty.
    pub fn from_value(welcome: Option<&str>) -> Self {
        let welcome = match welcome {
            Some(value) if !value.is_empty() => value.to_owned(),
            _ => PAGE_WELCOME_FALLBACK.to_owned(),
        };
        Self { welcome }
    }

    /// Build a config from the `PAGE_WELCOME` value captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_value(option_env!("PAGE_WELCOME"))
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::from_value(None)
    }
}
