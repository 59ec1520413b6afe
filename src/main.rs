//! gauthctl binary entry point.

use std::fs::File;
use std::os::fd::FromRawFd;

use clap::Parser;
use clap::error::ErrorKind;

use gauthctl::auth::default_authenticator;
use gauthctl::cli::{Action, Cli};
use gauthctl::commands::{self, CommandContext};
use gauthctl::logging::Logger;
use gauthctl::paths::StatePaths;

/// File descriptor carrying the config payload during `--enable`.
const PAYLOAD_FD: i32 = 3;

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // clap routes help/version to stdout and usage errors to stderr;
            // only the exit codes need adjusting (usage errors are 1, not
            // clap's default 2).
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            return code;
        }
    };

    let log = Logger::new(cli.verbose);

    // Process-wide, before the first open: inherited defaults must never
    // widen the permissions of anything this process creates.
    // SAFETY: umask cannot fail and no other thread exists yet.
    unsafe {
        libc::umask(0o077);
    }

    let auth = default_authenticator();
    let ctx = CommandContext::new(StatePaths::system(), &auth, log);

    let result = match cli.action() {
        Action::Enable => {
            // SAFETY: fd 3 is the documented payload descriptor attached by
            // the caller; ownership is taken exactly once, here, and the
            // descriptor is not used elsewhere in the process. If the caller
            // did not attach it, reads fail and surface as InputRead.
            let mut input = unsafe { File::from_raw_fd(PAYLOAD_FD) };
            commands::enable::run(&ctx, &mut input).map(|()| 0)
        }
        Action::Disable(target) => commands::disable::run(&ctx, &target).map(|()| 0),
        // 0 when enabled, 1 when not: callers branch on the exit code.
        Action::Status => commands::status::run(&ctx).map(|present| i32::from(!present)),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            log.error(&e.to_string());
            1
        }
    }
}
