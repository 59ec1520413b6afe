// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed state directory and a ready-made
// command context so each integration test can exercise the command layer
// against an isolated filesystem without repeating boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use gauthctl::auth::StubAuthenticator;
use gauthctl::commands::CommandContext;
use gauthctl::identity;
use gauthctl::logging::Logger;
use gauthctl::paths::StatePaths;

/// Stub authenticator with a `'static` lifetime for borrowing into contexts.
pub static STUB_AUTH: StubAuthenticator = StubAuthenticator;

/// An isolated state directory backed by a [`tempfile::TempDir`].
///
/// The directory is deleted when dropped, taking any state files written by
/// the test with it.
pub struct TestStateDir {
    /// Temporary directory standing in for the compiled-in state directory.
    pub dir: tempfile::TempDir,
}

impl TestStateDir {
    /// Create a fresh, empty state directory.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp state dir"),
        }
    }

    /// Root of the state directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Command context rooted at this state directory, with the stub
    /// authenticator and a quiet logger.
    pub fn ctx(&self) -> CommandContext<'static> {
        CommandContext::new(StatePaths::new(self.path()), &STUB_AUTH, Logger::new(false))
    }

    /// State-file path for the user running the test suite.
    pub fn my_state_path(&self) -> PathBuf {
        let me = identity::invoking_user().expect("test process has a passwd entry");
        self.path().join(me)
    }

    /// Pre-populate a state file for `username`.
    pub fn seed(&self, username: &str, payload: &[u8]) {
        std::fs::write(self.path().join(username), payload).expect("seed state file");
    }
}
