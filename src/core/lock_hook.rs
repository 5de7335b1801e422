//! External mutual exclusion around dispatch
//!
//! A [`LockHook`] lets the application serialize logging with its own
//! resources: the logger acquires it before touching shared state and
//! releases it on every exit path through [`HookGuard`].

use parking_lot::{Condvar, Mutex};
use std::sync::Arc;

pub trait LockHook: Send + Sync {
    fn acquire(&self);
    fn release(&self);
}

/// Lock hook built from an acquire/release closure pair
///
/// # Examples
///
/// ```
/// use slot_logger::{FnLockHook, Logger};
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let depth = Arc::new(AtomicUsize::new(0));
/// let (a, r) = (Arc::clone(&depth), Arc::clone(&depth));
/// let logger = Logger::new();
/// logger.set_lock_hook(Arc::new(FnLockHook::new(
///     move || { a.fetch_add(1, Ordering::SeqCst); },
///     move || { r.fetch_sub(1, Ordering::SeqCst); },
/// )));
/// logger.info("hello");
/// assert_eq!(depth.load(Ordering::SeqCst), 0);
/// ```
pub struct FnLockHook<A, R> {
    acquire: A,
    release: R,
}

impl<A, R> FnLockHook<A, R>
where
    A: Fn() + Send + Sync,
    R: Fn() + Send + Sync,
{
    pub fn new(acquire: A, release: R) -> Self {
        Self { acquire, release }
    }
}

impl<A, R> LockHook for FnLockHook<A, R>
where
    A: Fn() + Send + Sync,
    R: Fn() + Send + Sync,
{
    fn acquire(&self) {
        (self.acquire)()
    }

    fn release(&self) {
        (self.release)()
    }
}

/// Blocking process-wide lock usable as a hook
///
/// Unlike a guard-based mutex, acquire and release are separate calls, so the
/// held state is a flag protected by a mutex and waiters park on a condvar.
#[derive(Debug, Default)]
pub struct MutexLockHook {
    held: Mutex<bool>,
    released: Condvar,
}

impl MutexLockHook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_held(&self) -> bool {
        *self.held.lock()
    }
}

impl LockHook for MutexLockHook {
    fn acquire(&self) {
        let mut held = self.held.lock();
        while *held {
            self.released.wait(&mut held);
        }
        *held = true;
    }

    fn release(&self) {
        let mut held = self.held.lock();
        *held = false;
        self.released.notify_one();
    }
}

/// Holds an acquired hook; releases it when dropped
#[must_use = "the hook is released as soon as the guard is dropped"]
pub struct HookGuard {
    hook: Option<Arc<dyn LockHook>>,
}

impl HookGuard {
    pub fn acquire(hook: Option<Arc<dyn LockHook>>) -> Self {
        if let Some(ref hook) = hook {
            hook.acquire();
        }
        Self { hook }
    }
}

impl Drop for HookGuard {
    fn drop(&mut self) {
        if let Some(hook) = self.hook.take() {
            hook.release();
        }
    }
}
