//! Status command: report whether 2FA state exists for the invoking user.

use anyhow::Result;

use crate::commands::CommandContext;
use crate::{identity, state};

/// Run the status command for the invoking user.
///
/// Returns `true` when the state file exists and is readable. Performs no
/// mutation and no authentication; presence of one's own state file is not
/// sensitive to the owner.
///
/// # Errors
///
/// Returns an error if the invoking user cannot be resolved or their name
/// fails validation.
pub fn run(ctx: &CommandContext<'_>) -> Result<bool> {
    let user = identity::invoking_user()?;
    let state_path = ctx.paths.state_path(&user)?;

    ctx.log
        .debug(&format!("state file: {}", state_path.display()));

    let present = state::status(&state_path);
    // The summary is the one piece of stdout output besides help/version;
    // diagnostics stay on stderr.
    println!(
        "2FA is {} for user {user}",
        if present { "enabled" } else { "not enabled" }
    );
    Ok(present)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    use crate::auth::StubAuthenticator;
    use crate::identity::invoking_user;
    use crate::logging::Logger;
    use crate::paths::StatePaths;

    fn test_ctx(dir: &tempfile::TempDir) -> CommandContext<'static> {
        CommandContext::new(
            StatePaths::new(dir.path()),
            &StubAuthenticator,
            Logger::new(false),
        )
    }

    #[test]
    fn status_false_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = test_ctx(&dir);
        assert!(!run(&ctx).unwrap());
    }

    #[test]
    fn status_true_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = test_ctx(&dir);
        let me = invoking_user().unwrap();
        std::fs::write(dir.path().join(&me), b"key").unwrap();

        assert!(run(&ctx).unwrap());
    }

    #[test]
    fn status_never_mutates() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = test_ctx(&dir);
        let me = invoking_user().unwrap();
        let state = dir.path().join(&me);
        std::fs::write(&state, b"key").unwrap();

        assert!(run(&ctx).unwrap());
        assert!(run(&ctx).unwrap());
        assert_eq!(std::fs::read(&state).unwrap(), b"key");
    }
}
