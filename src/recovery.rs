//! Handling of malformed records while reading.
//!
//! In [`RecoveryMode::Strict`] the first structural problem aborts the record.
//! In [`RecoveryMode::Lenient`] the reader skips what it cannot parse, keeps
//! everything else, and records a message for each problem it stepped over.

use crate::error::{MarcError, Result};
use log::warn;

/// Strategy for malformed or truncated records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecoveryMode {
    /// Return an error for any malformation (default)
    #[default]
    Strict,
    /// Salvage whatever can be parsed
    Lenient,
}

/// Problems stepped over while reading one record.
#[derive(Debug, Clone, Default)]
pub struct RecoveryContext {
    mode: RecoveryMode,
    messages: Vec<String>,
}

impl RecoveryContext {
    /// Context for one record.
    #[must_use]
    pub fn new(mode: RecoveryMode) -> Self {
        RecoveryContext {
            mode,
            messages: Vec::new(),
        }
    }

    /// Mode in effect.
    #[must_use]
    pub fn mode(&self) -> RecoveryMode {
        self.mode
    }

    /// Fail in strict mode; otherwise log and remember the problem.
    ///
    /// # Errors
    ///
    /// Returns `error` unchanged in strict mode.
    pub fn recover(&mut self, error: MarcError, context: &str) -> Result<()> {
        match self.mode {
            RecoveryMode::Strict => Err(error),
            RecoveryMode::Lenient => {
                warn!("{context}: {error}");
                self.messages.push(format!("{context}: {error}"));
                Ok(())
            },
        }
    }

    /// Messages recorded so far.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Whether anything had to be skipped.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.messages.is_empty()
    }

    pub(crate) fn into_messages(self) -> Vec<String> {
        self.messages
    }
}
