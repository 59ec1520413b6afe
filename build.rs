//! Build script: embeds the package version and state directory as env vars.

use std::process::Command;

fn main() {
    // Prefer GAUTHCTL_VERSION env var if set (e.g., by a packaging workflow),
    // otherwise fall back to git describe for local development builds.
    if let Ok(version) = std::env::var("GAUTHCTL_VERSION") {
        println!("cargo:rustc-env=GAUTHCTL_VERSION={version}");
    } else if let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        && output.status.success()
    {
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        println!("cargo:rustc-env=GAUTHCTL_VERSION={version}");
    }

    // State directory for per-user 2FA files. Packagers override this to
    // match where the companion PAM module looks.
    let state_dir =
        std::env::var("GAUTH_STATEDIR").unwrap_or_else(|_| "/var/lib/gauth".to_string());
    println!("cargo:rustc-env=GAUTH_STATEDIR={state_dir}");

    println!("cargo:rerun-if-env-changed=GAUTHCTL_VERSION");
    println!("cargo:rerun-if-env-changed=GAUTH_STATEDIR");
}
