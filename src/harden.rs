//! Process hardening before any secret is generated.

/// Mark the process non-dumpable: no core files, no ptrace attach from
/// unprivileged processes.
#[cfg(target_os = "linux")]
pub fn harden() {
    if unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) } != 0 {
        tracing::warn!(
            "prctl(PR_SET_DUMPABLE) failed: {}",
            std::io::Error::last_os_error()
        );
    }
}

#[cfg(not(target_os = "linux"))]
pub fn harden() {}
