//! Domain-specific error types for gauthctl.
//!
//! Internal modules return typed errors via [`thiserror`] while command
//! handlers at the CLI boundary convert them to [`anyhow::Error`] through the
//! standard `?` operator. Every variant's `Display` output is the single
//! diagnostic line the process prints to standard error before exiting 1,
//! formatted as `{operation}: {os-error}` where a system error is involved.

use std::io;

use thiserror::Error;

/// Top-level error type for gauthctl.
///
/// Covers identity resolution, path validation, the authorization matrix,
/// authentication, and the state-file primitives.
#[derive(Error, Debug)]
pub enum GauthError {
    /// The invoking UID has no entry in the system password database.
    #[error("Unable to determine invoking user: no password database entry for uid {uid}")]
    IdentityUnknown {
        /// Real UID of the process.
        uid: u32,
    },

    /// A supplied or resolved username is unusable as a filename component.
    #[error("Invalid username '{0}': must be non-empty and contain no '/' or NUL")]
    InvalidUsername(String),

    /// A non-root invoker attempted `--disable`.
    #[error("Only root is allowed to disable 2FA for user {0}")]
    NotAuthorized(String),

    /// `--enable` was requested while a state file already exists.
    #[error("2FA configuration already exists for user {0}")]
    AlreadyEnabled(String),

    /// The PAM conversation rejected the invoking user.
    #[error("Authentication failed for user {user}: {reason}")]
    AuthFailed {
        /// User the conversation ran against.
        user: String,
        /// Human-readable reason from the authenticator.
        reason: String,
    },

    /// An `enable` primitive failed; the temporary file has been cleaned up.
    #[error(transparent)]
    Enable(#[from] EnableError),

    /// `disable` failed for a reason other than the file being absent.
    #[error("Unable to remove state file: {source}")]
    RemoveFailed {
        /// Underlying unlink error.
        source: io::Error,
    },
}

/// Failure modes of the atomic `enable` operation, one per step of the
/// write-temp-then-rename protocol.
#[derive(Error, Debug)]
pub enum EnableError {
    /// Pre-unlinking the leftover temporary file failed (and it was not
    /// simply absent).
    #[error("Unable to pre-unlink temporary file: {source}")]
    TempUnlink {
        /// Underlying unlink error.
        source: io::Error,
    },

    /// Exclusive creation of the temporary file failed. A pre-existing file
    /// here indicates a concurrent writer and is never overwritten.
    #[error("Unable to open temporary file for writing: {source}")]
    TempCreate {
        /// Underlying open error.
        source: io::Error,
    },

    /// Reading the config payload stream failed.
    #[error("Reading config stream failed: {source}")]
    InputRead {
        /// Underlying read error.
        source: io::Error,
    },

    /// Writing to the temporary file failed.
    #[error("Writing temporary file failed: {source}")]
    TempWrite {
        /// Underlying write error.
        source: io::Error,
    },

    /// Closing the temporary file reported an error.
    #[error("Closing temporary file failed: {source}")]
    TempClose {
        /// Underlying close error.
        source: io::Error,
    },

    /// The final rename onto the state path failed; nothing was replaced.
    #[error("Replacing state file failed: {source}")]
    Commit {
        /// Underlying rename error.
        source: io::Error,
    },
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn identity_unknown_display() {
        let e = GauthError::IdentityUnknown { uid: 4242 };
        assert_eq!(
            e.to_string(),
            "Unable to determine invoking user: no password database entry for uid 4242"
        );
    }

    #[test]
    fn invalid_username_display() {
        let e = GauthError::InvalidUsername("a/b".to_string());
        assert!(e.to_string().contains("a/b"));
        assert!(e.to_string().contains("no '/' or NUL"));
    }

    #[test]
    fn not_authorized_display_names_target() {
        let e = GauthError::NotAuthorized("alice".to_string());
        assert_eq!(
            e.to_string(),
            "Only root is allowed to disable 2FA for user alice"
        );
    }

    #[test]
    fn already_enabled_display_names_user() {
        let e = GauthError::AlreadyEnabled("alice".to_string());
        assert!(e.to_string().contains("alice"));
        assert!(e.to_string().contains("already exists"));
    }

    #[test]
    fn auth_failed_display() {
        let e = GauthError::AuthFailed {
            user: "alice".to_string(),
            reason: "account expired".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Authentication failed for user alice: account expired"
        );
    }

    #[test]
    fn enable_errors_name_the_failing_operation() {
        let source = || io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let cases = [
            (
                EnableError::TempUnlink { source: source() },
                "Unable to pre-unlink temporary file",
            ),
            (
                EnableError::TempCreate { source: source() },
                "Unable to open temporary file for writing",
            ),
            (
                EnableError::InputRead { source: source() },
                "Reading config stream failed",
            ),
            (
                EnableError::TempWrite { source: source() },
                "Writing temporary file failed",
            ),
            (
                EnableError::TempClose { source: source() },
                "Closing temporary file failed",
            ),
            (
                EnableError::Commit { source: source() },
                "Replacing state file failed",
            ),
        ];
        for (err, prefix) in cases {
            let msg = err.to_string();
            assert!(msg.starts_with(prefix), "unexpected message: {msg}");
            assert!(msg.contains("denied"), "missing os error in: {msg}");
        }
    }

    #[test]
    fn enable_error_converts_transparently() {
        let e: GauthError = EnableError::Commit {
            source: io::Error::other("boom"),
        }
        .into();
        assert_eq!(e.to_string(), "Replacing state file failed: boom");
    }

    #[test]
    fn remove_failed_keeps_os_error_in_message_and_chain() {
        let e = GauthError::RemoveFailed {
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(e.to_string(), "Unable to remove state file: denied");
        assert!(e.source().is_some());
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn error_types_are_send_sync() {
        assert_send_sync::<GauthError>();
        assert_send_sync::<EnableError>();
    }

    #[test]
    fn errors_convert_to_anyhow() {
        let e = GauthError::AlreadyEnabled("bob".to_string());
        let _anyhow_err: anyhow::Error = e.into();
    }
}
