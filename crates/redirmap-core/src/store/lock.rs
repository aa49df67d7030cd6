//! Write serialization for the load-modify-save cycle.
//!
//! Two layers: a mutex owned by the `RuleStore` (threads sharing one store),
//! and on Unix an advisory `flock(LOCK_EX)` on a sidecar lock file (separate
//! store handles and separate processes). The sidecar is never renamed, so the
//! lock survives the atomic replace of the rules file itself.

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::StoreError;

/// Held for the duration of one load-modify-save cycle. Dropping it releases
/// the file lock first, then the in-process mutex.
#[must_use = "the store is only locked while the guard is alive"]
pub struct StoreGuard<'a> {
    _file: File,
    _mutex: MutexGuard<'a, ()>,
}

pub(super) fn acquire<'a>(mutex: &'a Mutex<()>, lock_path: &Path) -> Result<StoreGuard<'a>, StoreError> {
    // A panic in another writer leaves no partial state behind: saves are atomic.
    let guard = mutex.lock().unwrap_or_else(PoisonError::into_inner);
    let file = open_lock_file(lock_path)?;
    lock_exclusive(&file, lock_path)?;
    tracing::trace!(path = %lock_path.display(), "store lock acquired");
    Ok(StoreGuard {
        _file: file,
        _mutex: guard,
    })
}

fn open_lock_file(path: &Path) -> Result<File, StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| StoreError::lock(parent, e))?;
    }
    OpenOptions::new()
        .create(true)
        .truncate(false)
        .read(true)
        .write(true)
        .open(path)
        .map_err(|e| StoreError::lock(path, e))
}

#[cfg(unix)]
fn lock_exclusive(file: &File, path: &Path) -> Result<(), StoreError> {
    use std::os::unix::io::AsRawFd;

    loop {
        let rc = unsafe { libc::flock(file.as_raw_fd(), libc::LOCK_EX) };
        if rc == 0 {
            return Ok(());
        }
        let err = std::io::Error::last_os_error();
        if err.kind() != std::io::ErrorKind::Interrupted {
            return Err(StoreError::lock(path, err));
        }
    }
}

/// No advisory locking off Unix; the in-process mutex still serializes writers.
#[cfg(not(unix))]
fn lock_exclusive(_file: &File, _path: &Path) -> Result<(), StoreError> {
    Ok(())
}
