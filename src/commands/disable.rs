//! Disable command: remove 2FA state for a named user. Root only.

use anyhow::Result;

use crate::commands::CommandContext;
use crate::error::GauthError;
use crate::{identity, state};

/// Run the disable command against `target`.
///
/// The root check comes first; the state path for the target user is only
/// derived once the invoker is authorized, and authentication (when wired
/// in) runs against the *invoking* user, not the target.
///
/// # Errors
///
/// Returns an error if the invoker is not root, the target name is invalid,
/// authentication fails, or the unlink fails for a reason other than the
/// file being absent. Disabling an absent state is success.
pub fn run(ctx: &CommandContext<'_>, target: &str) -> Result<()> {
    authorize(identity::invoking_is_root(), target)?;

    let invoker = identity::invoking_user()?;
    ctx.auth.authenticate(&invoker)?;

    let state_path = ctx.paths.state_path(target)?;
    ctx.log
        .debug(&format!("state file: {}", state_path.display()));

    state::disable(&state_path)?;
    ctx.log.info("GAuth disabled successfully");
    Ok(())
}

/// Authorization rule for disable: only root may remove another user's
/// (or even their own) 2FA state.
fn authorize(invoker_is_root: bool, target: &str) -> Result<(), GauthError> {
    if invoker_is_root {
        Ok(())
    } else {
        Err(GauthError::NotAuthorized(target.to_string()))
    }
}
