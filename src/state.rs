//! State-file engine: the three primitives behind the commands.
//!
//! `enable` follows the create-temp-then-rename idiom: the payload is
//! written to an exclusively created `{state}.new` sibling with mode `0600`
//! and committed with a single `rename`, so other processes observe either
//! the old file or the complete new one, never a truncated or over-permissive
//! intermediate. `disable` and `status` are an idempotent unlink and an
//! openability probe.
//!
//! The engine never calls `fsync`; durability across power loss is not a
//! property of the protocol (a reboot mid-enable may leave the old file or
//! none).

use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind, Read, Write};
use std::os::fd::IntoRawFd;
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};

use crate::error::{EnableError, GauthError};
use crate::paths::temp_path;

/// Chunk size for the payload copy loop.
const COPY_BUF_SIZE: usize = 4096;

/// Permission bits for the temporary file and, via rename, the state file.
const STATE_MODE: u32 = 0o600;

/// Unlinks the temporary file on drop unless the rename committed it.
struct TempGuard {
    path: PathBuf,
    armed: bool,
}

impl TempGuard {
    fn new(path: PathBuf) -> Self {
        Self { path, armed: true }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for TempGuard {
    fn drop(&mut self) {
        if self.armed {
            let _ = fs::remove_file(&self.path);
        }
    }
}

/// Atomically replace the contents of `state_path` with the bytes read from
/// `input` until end-of-stream.
///
/// On every failure path the temporary file is closed and unlinked before
/// returning; `state_path` itself is only ever touched by the final rename.
///
/// # Errors
///
/// Returns the [`EnableError`] variant naming the step that failed; see the
/// module docs for the protocol.
pub fn enable(state_path: &Path, input: &mut impl Read) -> Result<(), EnableError> {
    let tmp = temp_path(state_path);

    // A leftover temporary from a crashed run is stale; remove it up front.
    match fs::remove_file(&tmp) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(EnableError::TempUnlink { source: e }),
    }

    // Exclusive creation: if the file reappeared since the pre-unlink, a
    // concurrent writer owns it and must not be clobbered. create_new also
    // refuses to follow a symlink planted at this path.
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .mode(STATE_MODE)
        .open(&tmp)
        .map_err(|e| EnableError::TempCreate { source: e })?;

    // From here on the temporary exists on disk and must not outlive the
    // call. On early return the guard unlinks the path and the file handle
    // then closes; unlink-before-close is fine on POSIX.
    let mut guard = TempGuard::new(tmp.clone());

    copy_payload(input, &mut file)?;

    // Surface the close result instead of dropping it; a failed close can
    // mean the payload never fully reached the file.
    let fd = file.into_raw_fd();
    // SAFETY: fd was just detached via into_raw_fd, so this is its single
    // owner and the only close.
    if unsafe { libc::close(fd) } != 0 {
        return Err(EnableError::TempClose {
            source: io::Error::last_os_error(),
        });
    }

    // The atomic commit point.
    fs::rename(&tmp, state_path).map_err(|e| EnableError::Commit { source: e })?;
    guard.disarm();
    Ok(())
}

/// Copy `input` to `out` until a zero-length read. Short reads continue the
/// loop; `Interrupted` retries.
fn copy_payload(input: &mut impl Read, out: &mut File) -> Result<u64, EnableError> {
    let mut buf = [0_u8; COPY_BUF_SIZE];
    let mut total: u64 = 0;
    loop {
        let n = match input.read(&mut buf) {
            Ok(0) => return Ok(total),
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(EnableError::InputRead { source: e }),
        };
        out.write_all(&buf[..n])
            .map_err(|e| EnableError::TempWrite { source: e })?;
        total += n as u64;
    }
}

/// Remove the state file. Absence counts as success, so repeated disables
/// are idempotent.
///
/// # Errors
///
/// Returns [`GauthError::RemoveFailed`] for any unlink failure other than
/// `NotFound`.
pub fn disable(state_path: &Path) -> Result<(), GauthError> {
    match fs::remove_file(state_path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(GauthError::RemoveFailed { source: e }),
    }
}

/// Whether a state file exists and is openable for reading.
///
/// Transient open errors (including permission problems) report absent; the
/// dispatcher runs as the owning user or root, so in practice this means
/// "no usable 2FA configuration".
#[must_use]
pub fn status(state_path: &Path) -> bool {
    File::open(state_path).is_ok()
}
