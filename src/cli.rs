//! Command-line surface for gauthctl.
//!
//! The primary actions are mutually exclusive flags (not subcommands), to
//! keep the surface the companion tooling already invokes:
//! `--enable`/`-e`, `--disable USERNAME`/`-d`, `--status`/`-s`, plus clap's
//! built-in `--help`/`-h` and `--version`/`-V`.

use clap::{ArgGroup, Parser};

/// Version string injected by `build.rs`, falling back to the crate version.
pub const VERSION: &str = match option_env!("GAUTHCTL_VERSION") {
    Some(v) => v,
    None => env!("CARGO_PKG_VERSION"),
};

/// Top-level CLI entry point.
#[derive(Parser, Debug)]
#[command(
    name = "gauthctl",
    about = "Manage per-user gauth 2FA state for the companion PAM module",
    version = VERSION,
    group(ArgGroup::new("action").required(true).multiple(false))
)]
pub struct Cli {
    /// Enable gauth for the invoking user using the config supplied on fd 3
    #[arg(short = 'e', long, group = "action")]
    pub enable: bool,

    /// Disable gauth for the given user (root only)
    #[arg(short = 'd', long, value_name = "USERNAME", group = "action")]
    pub disable: Option<String>,

    /// Check whether gauth is enabled for the invoking user
    #[arg(short = 's', long, group = "action")]
    pub status: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// The single primary action selected on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Provision the invoking user's 2FA from fd 3.
    Enable,
    /// Remove 2FA state for the named user.
    Disable(String),
    /// Report whether 2FA state exists for the invoking user.
    Status,
}

impl Cli {
    /// The action selected by the parsed flags.
    ///
    /// The required, mutually exclusive arg group guarantees exactly one
    /// flag is set, so this never has to guess.
    #[must_use]
    pub fn action(&self) -> Action {
        if let Some(user) = &self.disable {
            Action::Disable(user.clone())
        } else if self.status {
            Action::Status
        } else {
            Action::Enable
        }
    }
}
