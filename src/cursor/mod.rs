/*!
 * Cursors
 *
 * Forward-only iteration with checked casts at the untyped boundary.
 *
 * ## Layers
 *
 * - **RawCursor**: untyped cursor yielding `Option<RawValue>` (None is null)
 * - **TypedCursor**: wraps any raw cursor and casts each element to `T`
 *
 * Raw cursors own their position state. A typed cursor never re-implements
 * the "not started" / "finished" checks; it relies on the raw cursor to
 * report them.
 */

mod position;
mod raw;
mod typed;

pub use position::Position;
pub use raw::{DynCursor, DynSeq, SliceCursor, SnapshotCursor};
pub use typed::{typed_cursor, TypedCursor};

use crate::core::errors::{ListError, ListResult};
use std::any::Any;
use std::fmt;

/// Borrowed untyped element with the name of its runtime type
#[derive(Clone, Copy)]
pub struct RawValue<'a> {
    value: &'a dyn Any,
    type_name: &'static str,
}

impl<'a> RawValue<'a> {
    #[inline]
    pub fn of<T: Any>(value: &'a T) -> Self {
        Self {
            value,
            type_name: std::any::type_name::<T>(),
        }
    }

    #[inline]
    pub(crate) fn from_parts(value: &'a dyn Any, type_name: &'static str) -> Self {
        Self { value, type_name }
    }

    /// Checked cast to `T`
    pub fn downcast<T: Any>(&self) -> ListResult<&'a T> {
        self.value
            .downcast_ref::<T>()
            .ok_or_else(|| ListError::invalid_cast::<T>(self.type_name))
    }

    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    #[inline]
    pub fn as_any(&self) -> &'a dyn Any {
        self.value
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for RawValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawValue")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Untyped forward-only cursor
///
/// # Contract
///
/// - A fresh cursor sits before the first element
/// - `current` fails with `InvalidOperation` before the first `move_next`
///   and after `move_next` has returned `false`
/// - `reset` returns the cursor to its initial position
///
/// Resources held by a cursor are released when it is dropped.
pub trait RawCursor {
    /// Advance to the next element, returning `false` once exhausted
    fn move_next(&mut self) -> bool;

    /// Element at the current position; `None` is the null value
    fn current(&self) -> ListResult<Option<RawValue<'_>>>;

    /// Rewind to before the first element
    fn reset(&mut self);
}

impl<C: RawCursor + ?Sized> RawCursor for Box<C> {
    #[inline]
    fn move_next(&mut self) -> bool {
        (**self).move_next()
    }

    #[inline]
    fn current(&self) -> ListResult<Option<RawValue<'_>>> {
        (**self).current()
    }

    #[inline]
    fn reset(&mut self) {
        (**self).reset()
    }
}

impl<C: RawCursor + ?Sized> RawCursor for &mut C {
    #[inline]
    fn move_next(&mut self) -> bool {
        (**self).move_next()
    }

    #[inline]
    fn current(&self) -> ListResult<Option<RawValue<'_>>> {
        (**self).current()
    }

    #[inline]
    fn reset(&mut self) {
        (**self).reset()
    }
}

/// Anything that can hand out fresh raw cursors
pub trait RawSource {
    type Cursor<'a>: RawCursor
    where
        Self: 'a;

    fn raw_cursor(&self) -> Self::Cursor<'_>;

    /// Typed view over a fresh cursor
    fn typed_cursor<T>(&self) -> TypedCursor<T, Self::Cursor<'_>> {
        TypedCursor::new(self.raw_cursor())
    }
}

impl<T: Any> RawSource for [T] {
    type Cursor<'a> = SliceCursor<'a, T> where Self: 'a;

    fn raw_cursor(&self) -> Self::Cursor<'_> {
        SliceCursor::new(self)
    }
}

impl<T: Any> RawSource for Vec<T> {
    type Cursor<'a> = SliceCursor<'a, T> where Self: 'a;

    fn raw_cursor(&self) -> Self::Cursor<'_> {
        SliceCursor::new(self.as_slice())
    }
}

impl<T: Any, const N: usize> RawSource for [T; N] {
    type Cursor<'a> = SliceCursor<'a, T> where Self: 'a;

    fn raw_cursor(&self) -> Self::Cursor<'_> {
        SliceCursor::new(self.as_slice())
    }
}
