//! Visibility of the message composer modal.
//!
//! DESIGN
//! ======
//! Two explicit states instead of a boolean flag. The composer component is
//! mounted only while `Open`, so its draft text and validation state do not
//! outlive a close.

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

/// Composer modal lifecycle owned by the home page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ComposerState {
    #[default]
    Closed,
    Open,
}

impl ComposerState {
    /// Transition for the "compose message" intent.
    pub fn open(self) -> Self {
        Self::Open
    }

    /// Transition for the composer's completion signal. Idempotent.
    pub fn close(self) -> Self {
        Self::Closed
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}
