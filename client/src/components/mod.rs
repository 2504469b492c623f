//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are the collaborators the home page composes: page chrome, the
//! 3D monster profile host, the message board, and the message composer.
//! Shared data is read from Leptos context providers, never passed through
//! the page.

pub mod message_board;
pub mod message_sender_modal;
pub mod monster_profile;
pub mod page_container;
