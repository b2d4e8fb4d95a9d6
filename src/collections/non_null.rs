/*!
 * Non-Null Synchronized List
 *
 * Synchronized list whose elements are never null: null values are rejected
 * at construction and on every write that stores an element.
 */

use super::container::SyncContainer;
use super::policy::{WriteOp, WritePolicy};
use crate::core::errors::{ListError, ListResult};

/// Element types with a null value
pub trait Nullable {
    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nullable for *const T {
    #[inline]
    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }
}

impl<T: ?Sized> Nullable for *mut T {
    #[inline]
    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }
}

/// Policy rejecting null elements
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RejectNull;

impl<T: Nullable> WritePolicy<T> for RejectNull {
    const NAME: &'static str = "reject_null";

    fn admit_value(op: WriteOp, value: &T) -> ListResult<()> {
        if value.is_null() {
            return Err(ListError::null_argument("value"));
        }
        <Self as WritePolicy<T>>::admit_write(op)
    }

    fn check_source(items: &[T]) -> ListResult<()> {
        match items.iter().position(Nullable::is_null) {
            Some(index) => Err(ListError::out_of_range("source", index, items.len())),
            None => Ok(()),
        }
    }
}

/// Thread-safe list that never holds a null element
///
/// # Example
///
/// ```ignore
/// let list: NonNullSyncList<Option<Arc<Job>>> = NonNullSyncList::new();
/// list.add(Some(job))?;
/// assert!(list.add(None).is_err());
/// ```
pub type NonNullSyncList<T> = SyncContainer<T, RejectNull>;
