use anyhow::Result;

/// PID and real UID of the running process, read once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessIdentity {
    pub pid: u32,
    pub uid: u32,
}

impl ProcessIdentity {
    #[cfg(unix)]
    pub fn current() -> Result<Self> {
        use rustix::process::{getpid, getuid};

        // getpid never returns 0 for a userspace process
        let pid = getpid().as_raw_nonzero().get();
        let uid = getuid().as_raw();

        Ok(Self {
            pid: u32::try_from(pid)?,
            uid,
        })
    }

    #[cfg(not(unix))]
    pub fn current() -> Result<Self> {
        Err(anyhow::anyhow!(
            "process identity is not available on this platform"
        ))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn pid_matches_std() {
        let identity = ProcessIdentity::current().unwrap();
        assert_eq!(identity.pid, std::process::id());
    }

    #[test]
    fn stable_within_a_run() {
        let first = ProcessIdentity::current().unwrap();
        let second = ProcessIdentity::current().unwrap();
        assert_eq!(first, second);
    }
}
