//! State-file path derivation.
//!
//! Pure string work: no I/O, no canonicalization. The state directory is a
//! compile-time constant injected by `build.rs`, but [`StatePaths`] takes it
//! as a construction argument so tests can substitute a temporary directory.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::GauthError;

/// Compiled-in state directory (see `build.rs`, `GAUTH_STATEDIR`).
pub const STATE_DIR: &str = env!("GAUTH_STATEDIR");

/// Suffix of the transient sibling file used as the atomic-rename source.
const TEMP_SUFFIX: &str = ".new";

/// Derives per-user state-file paths under a fixed state directory.
#[derive(Debug, Clone)]
pub struct StatePaths {
    state_dir: PathBuf,
}

impl StatePaths {
    /// Create a path builder rooted at `state_dir`.
    #[must_use]
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        Self {
            state_dir: state_dir.into(),
        }
    }

    /// Create a path builder rooted at the compiled-in [`STATE_DIR`].
    #[must_use]
    pub fn system() -> Self {
        Self::new(STATE_DIR)
    }

    /// Path of the state file for `username`: `{state_dir}/{username}`.
    ///
    /// # Errors
    ///
    /// Returns [`GauthError::InvalidUsername`] if `username` is empty or
    /// contains `/` or NUL. Validation happens here, before any syscall
    /// could touch the state directory.
    pub fn state_path(&self, username: &str) -> Result<PathBuf, GauthError> {
        validate_username(username)?;
        Ok(self.state_dir.join(username))
    }
}

/// Reject names that cannot serve as a single filename component.
///
/// # Errors
///
/// Returns [`GauthError::InvalidUsername`] for empty names and names
/// containing `/` or NUL.
pub fn validate_username(username: &str) -> Result<(), GauthError> {
    if username.is_empty() || username.contains('/') || username.contains('\0') {
        return Err(GauthError::InvalidUsername(username.to_string()));
    }
    Ok(())
}

/// Sibling temporary path for `state_path`, with the literal `.new` suffix
/// appended to the full name.
#[must_use]
pub fn temp_path(state_path: &Path) -> PathBuf {
    let mut name = OsString::from(state_path.as_os_str());
    name.push(TEMP_SUFFIX);
    PathBuf::from(name)
}
