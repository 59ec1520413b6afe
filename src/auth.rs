//! Authentication collaborator for the mutating commands.
//!
//! The dispatcher talks to a PAM conversation only through the
//! [`Authenticator`] trait. The default build uses [`StubAuthenticator`]
//! (always succeeds); enabling the `pam` cargo feature swaps in
//! [`PamAuthenticator`], which runs a real conversation under the service
//! name `gauthctl` and checks both the authentication and the account
//! management result. There is no path that ignores a PAM failure.

use crate::error::GauthError;

/// Service name the PAM stack is consulted under.
pub const PAM_SERVICE: &str = "gauthctl";

/// Verifies the invoking user before a mutating operation.
pub trait Authenticator {
    /// Authenticate `username` and check account availability.
    ///
    /// # Errors
    ///
    /// Returns [`GauthError::AuthFailed`] when either step is rejected.
    fn authenticate(&self, username: &str) -> Result<(), GauthError>;
}

/// Authenticator that accepts every user.
///
/// Used by builds without the `pam` feature and by tests; deployment is
/// expected to rely on the operating system having already authenticated
/// the session in that configuration.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubAuthenticator;

impl Authenticator for StubAuthenticator {
    fn authenticate(&self, _username: &str) -> Result<(), GauthError> {
        Ok(())
    }
}

/// PAM-backed authenticator: `authenticate` then `acct_mgmt` under
/// [`PAM_SERVICE`], prompting on the controlling terminal.
#[cfg(feature = "pam")]
#[derive(Debug, Default, Clone, Copy)]
pub struct PamAuthenticator;

#[cfg(feature = "pam")]
impl Authenticator for PamAuthenticator {
    fn authenticate(&self, username: &str) -> Result<(), GauthError> {
        use pam_client::conv_cli::Conversation;
        use pam_client::{Context, Flag};

        let fail = |reason: String| GauthError::AuthFailed {
            user: username.to_string(),
            reason,
        };

        let mut ctx = Context::new(PAM_SERVICE, Some(username), Conversation::new())
            .map_err(|e| fail(e.to_string()))?;
        ctx.authenticate(Flag::NONE)
            .map_err(|e| fail(e.to_string()))?;
        ctx.acct_mgmt(Flag::NONE).map_err(|e| fail(e.to_string()))?;
        Ok(())
    }
}

/// The authenticator selected at build time.
#[cfg(feature = "pam")]
#[must_use]
pub fn default_authenticator() -> PamAuthenticator {
    PamAuthenticator
}

/// The authenticator selected at build time.
#[cfg(not(feature = "pam"))]
#[must_use]
pub fn default_authenticator() -> StubAuthenticator {
    StubAuthenticator
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_accepts_any_user() {
        let auth = StubAuthenticator;
        assert!(auth.authenticate("alice").is_ok());
        assert!(auth.authenticate("root").is_ok());
    }

    #[test]
    fn stub_is_usable_as_trait_object() {
        let auth: &dyn Authenticator = &StubAuthenticator;
        assert!(auth.authenticate("alice").is_ok());
    }
}
