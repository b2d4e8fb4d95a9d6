/*!
 * Sync Root
 *
 * The single guard protecting a container's sequence, exposed as an opaque
 * handle for compound operations
 */

use crate::core::errors::{ListError, ListResult};
use parking_lot::{ReentrantMutex, ReentrantMutexGuard};
use std::cell::{RefCell, RefMut};
use std::fmt;

/// Guard over a container's storage
///
/// The mutex is reentrant: a thread holding a [`SyncRootGuard`] may keep
/// calling the container's operations, while every other thread blocks until
/// the guard is dropped.
///
/// # Example
///
/// ```ignore
/// let _guard = list.sync_root().lock();
/// if !list.contains(&item) {
///     list.add(item)?; // no other thread can interleave here
/// }
/// ```
pub struct SyncRoot<T> {
    cell: ReentrantMutex<RefCell<Vec<T>>>,
    fair_unlock: bool,
}

/// Held lock on a [`SyncRoot`]; grants no access to the elements
#[must_use = "the sync root is unlocked as soon as the guard is dropped"]
pub struct SyncRootGuard<'a, T> {
    guard: Option<ReentrantMutexGuard<'a, RefCell<Vec<T>>>>,
    fair_unlock: bool,
}

impl<T> SyncRoot<T> {
    pub(crate) fn new(items: Vec<T>, fair_unlock: bool) -> Self {
        Self {
            cell: ReentrantMutex::new(RefCell::new(items)),
            fair_unlock,
        }
    }

    /// Acquire the guard, blocking until it is available
    pub fn lock(&self) -> SyncRootGuard<'_, T> {
        SyncRootGuard {
            guard: Some(self.cell.lock()),
            fair_unlock: self.fair_unlock,
        }
    }

    /// Acquire the guard without blocking
    pub fn try_lock(&self) -> Option<SyncRootGuard<'_, T>> {
        self.cell.try_lock().map(|guard| SyncRootGuard {
            guard: Some(guard),
            fair_unlock: self.fair_unlock,
        })
    }

    /// Whether two handles guard the same storage
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }

    /// Run `f` with the storage cell while holding the guard
    pub(crate) fn locked<R>(&self, f: impl FnOnce(&RefCell<Vec<T>>) -> R) -> R {
        let guard = self.lock();
        f(guard.cell())
    }

    /// Shared access to the elements under the guard
    ///
    /// Mutable borrows never run element code (drops are deferred until the
    /// guard is released), so a shared borrow cannot collide with one.
    pub(crate) fn read<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        self.locked(|cell| f(&cell.borrow()))
    }

    /// Exclusive access to the elements under the guard
    pub(crate) fn write<R>(&self, f: impl FnOnce(&mut Vec<T>) -> ListResult<R>) -> ListResult<R> {
        self.locked(|cell| f(&mut *borrow_mut(cell)?))
    }

    pub(crate) fn into_inner(self) -> Vec<T> {
        self.cell.into_inner().into_inner()
    }
}

/// Exclusive borrow of the storage, refused while element code running on
/// this thread already holds a borrow
pub(crate) fn borrow_mut<T>(cell: &RefCell<Vec<T>>) -> ListResult<RefMut<'_, Vec<T>>> {
    cell.try_borrow_mut().map_err(|_| {
        ListError::invalid_operation("list modified re-entrantly from inside an element callback")
    })
}

impl<'a, T> SyncRootGuard<'a, T> {
    fn cell(&self) -> &RefCell<Vec<T>> {
        match self.guard.as_ref() {
            Some(guard) => &**guard,
            None => unreachable!("guard is only taken on drop"),
        }
    }
}

impl<T> Drop for SyncRootGuard<'_, T> {
    fn drop(&mut self) {
        if let Some(guard) = self.guard.take() {
            if self.fair_unlock {
                ReentrantMutexGuard::unlock_fair(guard);
            }
        }
    }
}

impl<T> fmt::Debug for SyncRoot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncRoot")
            .field("fair_unlock", &self.fair_unlock)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Debug for SyncRootGuard<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncRootGuard").finish_non_exhaustive()
    }
}
