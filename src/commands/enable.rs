//! Enable command: provision the invoking user's 2FA state from a payload
//! stream (file descriptor 3 in the deployed binary).

use std::io::Read;

use anyhow::Result;

use crate::commands::CommandContext;
use crate::error::GauthError;
use crate::{identity, state};

/// Run the enable command for the invoking user.
///
/// Refuses to touch the input stream while a state file already exists, so
/// a conflicting call cannot consume a payload some other invocation was
/// meant to receive.
///
/// # Errors
///
/// Returns an error if identity resolution, authentication, the
/// already-enabled precondition, or the atomic write fails.
pub fn run(ctx: &CommandContext<'_>, input: &mut impl Read) -> Result<()> {
    let user = identity::invoking_user()?;
    ctx.auth.authenticate(&user)?;

    let state_path = ctx.paths.state_path(&user)?;
    ctx.log
        .debug(&format!("state file: {}", state_path.display()));

    if state::status(&state_path) {
        return Err(GauthError::AlreadyEnabled(user).into());
    }

    state::enable(&state_path, input).map_err(GauthError::from)?;
    ctx.log.info("GAuth set up successfully");
    Ok(())
}
