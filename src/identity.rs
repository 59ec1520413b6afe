//! Invoking-user identity resolution.
//!
//! Identity is taken from the kernel-reported **real** UID and the system
//! password database, never from environment variables like `USER` or
//! `LOGNAME`, so a caller cannot spoof the target of `--enable`/`--status`.

use std::ffi::CStr;

use crate::error::GauthError;

/// Real UID of the calling process.
#[must_use]
pub fn invoking_uid() -> u32 {
    // SAFETY: getuid has no preconditions and cannot fail.
    unsafe { libc::getuid() }
}

/// Whether the calling process's real UID is 0.
#[must_use]
pub fn invoking_is_root() -> bool {
    invoking_uid() == 0
}

/// Username of the calling process per the password database.
///
/// # Errors
///
/// Returns [`GauthError::IdentityUnknown`] when the real UID has no
/// password-database entry.
pub fn invoking_user() -> Result<String, GauthError> {
    let uid = invoking_uid();
    username_for_uid(uid).ok_or(GauthError::IdentityUnknown { uid })
}

/// Look up a username by UID via `getpwuid_r`, growing the scratch buffer
/// on `ERANGE`.
fn username_for_uid(uid: u32) -> Option<String> {
    // SAFETY: sysconf has no preconditions; -1 means "no fixed limit".
    let suggested = unsafe { libc::sysconf(libc::_SC_GETPW_R_SIZE_MAX) };
    let mut buf_len = usize::try_from(suggested).unwrap_or(1024).max(64);

    loop {
        let mut buf = vec![0_u8; buf_len];
        // SAFETY: all-zero passwd is a valid initial value; getpwuid_r fills
        // it in on success.
        let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
        let mut result: *mut libc::passwd = std::ptr::null_mut();

        // SAFETY: pwd, buf, and result outlive the call, and buf.len() is the
        // true capacity of buf.
        let rc = unsafe {
            libc::getpwuid_r(
                uid,
                &raw mut pwd,
                buf.as_mut_ptr().cast(),
                buf.len(),
                &raw mut result,
            )
        };

        if rc == libc::ERANGE {
            // Entry exists but did not fit; retry with more scratch space.
            buf_len = buf_len.saturating_mul(2);
            if buf_len > 1 << 20 {
                return None;
            }
            continue;
        }
        if rc != 0 || result.is_null() {
            return None;
        }

        // SAFETY: on success pw_name points at a NUL-terminated string
        // stored inside buf, which is still alive here.
        let name = unsafe { CStr::from_ptr(pwd.pw_name) };
        return Some(name.to_string_lossy().into_owned());
    }
}
