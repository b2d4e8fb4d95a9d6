/*!
 * Typed Cursor
 *
 * Checked-cast wrapper over any raw cursor with deterministic disposal
 */

use super::{RawCursor, RawSource, RawValue};
use crate::core::errors::{ListError, ListResult};
use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use tracing::trace;

/// Typed view over a raw cursor
///
/// Each read casts the raw element to `T`. Position checks are left to the
/// inner cursor.
///
/// # Disposal
///
/// `dispose()` drops the inner cursor, releasing whatever it holds. It is
/// idempotent, and dropping the typed cursor disposes it on every exit path.
/// A disposed cursor is exhausted: `move_next` returns `false` and reads fail
/// with `InvalidOperation`.
pub struct TypedCursor<T, C> {
    inner: Option<C>,
    _element: PhantomData<fn() -> T>,
}

/// Typed cursor over an optional source
///
/// Fails with `NullArgument` when the source is absent.
pub fn typed_cursor<T, S>(source: Option<&S>) -> ListResult<TypedCursor<T, S::Cursor<'_>>>
where
    S: RawSource + ?Sized,
{
    let source = source.ok_or_else(|| ListError::null_argument("source"))?;
    Ok(TypedCursor::new(source.raw_cursor()))
}

impl<T, C> TypedCursor<T, C> {
    pub fn new(inner: C) -> Self {
        trace!(
            element = std::any::type_name::<T>(),
            "typed cursor created"
        );
        Self {
            inner: Some(inner),
            _element: PhantomData,
        }
    }

    /// Release the inner cursor; later calls are no-ops
    pub fn dispose(&mut self) {
        if let Some(inner) = self.inner.take() {
            drop(inner);
            trace!(
                element = std::any::type_name::<T>(),
                "typed cursor disposed"
            );
        }
    }

    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.inner.is_none()
    }

    /// Take the inner cursor without disposing it
    pub fn into_inner(mut self) -> Option<C> {
        self.inner.take()
    }

    fn live(&self) -> ListResult<&C> {
        self.inner
            .as_ref()
            .ok_or_else(|| ListError::invalid_operation("cursor has been disposed"))
    }
}

impl<T, C: RawCursor> TypedCursor<T, C> {
    pub fn move_next(&mut self) -> bool {
        self.inner.as_mut().is_some_and(|inner| inner.move_next())
    }

    pub fn reset(&mut self) {
        if let Some(inner) = self.inner.as_mut() {
            inner.reset();
        }
    }

    /// Current element without the cast
    pub fn current_raw(&self) -> ListResult<Option<RawValue<'_>>> {
        self.live()?.current()
    }
}

impl<T: Any + Clone, C: RawCursor> TypedCursor<T, C> {
    /// Current element cast to `T`
    ///
    /// # Errors
    ///
    /// - `InvalidOperation` before the first advance, after exhaustion or after disposal
    /// - `InvalidCast` when the raw element is not a `T`
    /// - `NullReference` when the raw element is null
    pub fn current(&self) -> ListResult<T> {
        match self.current_raw()? {
            Some(raw) => raw.downcast::<T>().cloned(),
            None => Err(ListError::null_reference::<T>()),
        }
    }

    /// Current element where null maps to `None`
    pub fn current_nullable(&self) -> ListResult<Option<T>> {
        self.current_raw()?
            .map(|raw| raw.downcast::<T>().cloned())
            .transpose()
    }
}

impl<T: Any + Clone, C: RawCursor> Iterator for TypedCursor<T, C> {
    type Item = ListResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.move_next() {
            Some(self.current())
        } else {
            None
        }
    }
}

impl<T, C> Drop for TypedCursor<T, C> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<T, C: fmt::Debug> fmt::Debug for TypedCursor<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedCursor")
            .field("element", &std::any::type_name::<T>())
            .field("inner", &self.inner)
            .finish()
    }
}
