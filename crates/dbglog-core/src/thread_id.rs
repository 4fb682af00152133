//! Numeric identity of the calling thread.
//!
//! On Linux this is the kernel thread id, which matches what `top -H` and
//! `/proc/<pid>/task` show. Other Unix systems report the `pthread_self`
//! handle. Elsewhere the std [`ThreadId`](std::thread::ThreadId) is hashed.
//! Ids are distinct across live threads of one process and mean nothing
//! across processes.

/// Resolve the id of the current thread.
#[cfg(target_os = "linux")]
pub fn resolve() -> u64 {
    // SAFETY: gettid takes no arguments, touches no memory and cannot fail.
    let tid = unsafe { libc::syscall(libc::SYS_gettid) };
    tid as u64
}

/// Resolve the id of the current thread.
#[cfg(all(unix, not(target_os = "linux")))]
pub fn resolve() -> u64 {
    // SAFETY: pthread_self has no preconditions and always succeeds.
    let handle = unsafe { libc::pthread_self() };
    handle as usize as u64
}

/// Resolve the id of the current thread.
#[cfg(not(unix))]
pub fn resolve() -> u64 {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut hasher = DefaultHasher::new();
    std::thread::current().id().hash(&mut hasher);
    hasher.finish()
}
