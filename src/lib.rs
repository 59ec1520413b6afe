//! Per-user 2FA state management for the companion gauth PAM module.
//!
//! The binary provisions (`--enable`), removes (`--disable`), and reports
//! (`--status`) a single per-user configuration file under a compiled-in
//! state directory, holding the payload delivered verbatim on file
//! descriptor 3, with mode `0600` and atomic replace semantics.
//!
//! The library is organised into small layers, leaves first:
//!
//! - **[`identity`]** — map the process's real UID to a username
//! - **[`paths`]** — derive state/temp paths from a username (no I/O)
//! - **[`state`]** — the atomic write / unlink / presence primitives
//! - **[`auth`]** — the PAM collaborator behind the [`auth::Authenticator`] trait
//! - **[`commands`]** — per-action orchestration and the authorization matrix
//! - **[`cli`]**, **[`error`]**, **[`logging`]** — surface, taxonomy, diagnostics

pub mod auth;
pub mod cli;
pub mod commands;
pub mod error;
pub mod identity;
pub mod logging;
pub mod paths;
pub mod state;
