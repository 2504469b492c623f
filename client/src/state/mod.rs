//! Client state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shared state is provided through Leptos context as `RwSignal<T>` by the
//! root `App`; page-local state (the composer toggle) lives with its page.

pub mod composer;
pub mod messages;
pub mod session;
