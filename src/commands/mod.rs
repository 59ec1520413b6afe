//! Top-level command orchestration.
//!
//! Each primary action lives in its own module with a `run` function. The
//! shared [`CommandContext`] carries the path builder, the authenticator,
//! and the logger so tests can substitute a temporary state directory and a
//! stub authenticator.
//!
//! Every command follows the same sequence: resolve identities, enforce the
//! authorization matrix, authenticate (when a real authenticator is compiled
//! in), derive the state path for the correct target user, and invoke exactly
//! one state-file primitive. Authorization always runs before path
//! derivation so unauthorized calls spend nothing on the target.

pub mod disable;
pub mod enable;
pub mod status;

use crate::auth::Authenticator;
use crate::logging::Logger;
use crate::paths::StatePaths;

/// Shared collaborators handed to every command.
pub struct CommandContext<'a> {
    /// Path builder rooted at the active state directory.
    pub paths: StatePaths,
    /// Authentication collaborator consulted before mutating operations.
    pub auth: &'a dyn Authenticator,
    /// Diagnostic reporter.
    pub log: Logger,
}

impl std::fmt::Debug for CommandContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandContext")
            .field("paths", &self.paths)
            .field("log", &self.log)
            .finish_non_exhaustive()
    }
}

impl<'a> CommandContext<'a> {
    /// Assemble a context from its collaborators.
    #[must_use]
    pub fn new(paths: StatePaths, auth: &'a dyn Authenticator, log: Logger) -> Self {
        Self { paths, auth, log }
    }
}
