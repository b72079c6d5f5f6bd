//! Process identifiers - unique addresses for spawned actors.

use std::fmt::{Error, Formatter};

/// Unique address of an actor for its whole lifetime.
///
/// Issued by the kernel starting at 1 and never reused, not even after the
/// owning actor is killed.
#[derive(Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Pid(u64);

impl Pid {
    pub const fn new(raw: u64) -> Self {
        Pid(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for Pid {
    fn from(raw: u64) -> Self {
        Pid(raw)
    }
}

impl From<Pid> for u64 {
    fn from(pid: Pid) -> Self {
        pid.0
    }
}

impl std::fmt::Display for Pid {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "<{}>", self.0)
    }
}

impl std::fmt::Debug for Pid {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "<{}>", self.0)
    }
}

/// Monotonic PID source.
#[derive(Debug, Default)]
pub(crate) struct PidAllocator {
    last: u64,
}

impl PidAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next PID, strictly greater than every PID issued before.
    pub fn next(&mut self) -> Pid {
        self.last += 1;
        Pid(self.last)
    }

    /// Number of PIDs issued so far.
    pub fn issued(&self) -> u64 {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocator_starts_at_one() {
        let mut pids = PidAllocator::new();
        assert_eq!(pids.issued(), 0);
        assert_eq!(pids.next(), Pid::new(1));
        assert_eq!(pids.next(), Pid::new(2));
        assert_eq!(pids.issued(), 2);
    }

    #[test]
    fn test_allocator_strictly_increasing() {
        let mut pids = PidAllocator::new();
        let mut previous = pids.next();
        for _ in 0..1000 {
            let pid = pids.next();
            assert!(pid > previous);
            previous = pid;
        }
    }

    #[test]
    fn test_pid_display_and_conversion() {
        let pid = Pid::from(42);
        assert_eq!(pid.to_string(), "<42>");
        assert_eq!(format!("{pid:?}"), "<42>");
        assert_eq!(u64::from(pid), 42);
        assert_eq!(pid.get(), 42);
    }
}
