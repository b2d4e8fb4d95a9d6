/*!
 * Raw Cursors
 *
 * Untyped cursors over slices, heterogeneous sequences and container snapshots
 */

use super::{Position, RawCursor, RawSource, RawValue};
use crate::core::errors::ListResult;
use std::any::Any;
use std::fmt;

/// Cursor over a borrowed slice
#[derive(Debug)]
pub struct SliceCursor<'a, T> {
    items: &'a [T],
    position: Position,
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items,
            position: Position::new(),
        }
    }
}

impl<T: Any> RawCursor for SliceCursor<'_, T> {
    fn move_next(&mut self) -> bool {
        self.position.advance(self.items.len())
    }

    fn current(&self) -> ListResult<Option<RawValue<'_>>> {
        let index = self.position.index()?;
        Ok(Some(RawValue::of(&self.items[index])))
    }

    fn reset(&mut self) {
        self.position.reset();
    }
}

/// Cursor over an owned copy of a container's elements
///
/// Produced by `SyncContainer::raw_cursor`; the copy is taken under a single
/// guard acquisition, so later mutations of the container are not observed.
#[derive(Debug, Clone)]
pub struct SnapshotCursor<T> {
    items: Vec<T>,
    position: Position,
}

impl<T> SnapshotCursor<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            position: Position::new(),
        }
    }

    /// Number of elements captured by the snapshot
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T: Any> RawCursor for SnapshotCursor<T> {
    fn move_next(&mut self) -> bool {
        self.position.advance(self.items.len())
    }

    fn current(&self) -> ListResult<Option<RawValue<'_>>> {
        let index = self.position.index()?;
        Ok(Some(RawValue::of(&self.items[index])))
    }

    fn reset(&mut self) {
        self.position.reset();
    }
}

struct DynItem {
    value: Box<dyn Any + Send + Sync>,
    type_name: &'static str,
}

/// Heterogeneous sequence of untyped, possibly null values
///
/// # Example
///
/// ```ignore
/// let seq = DynSeq::new().value("one").null().value(3i32);
/// let mut cursor = seq.typed_cursor::<i32>();
/// ```
#[derive(Default)]
pub struct DynSeq {
    items: Vec<Option<DynItem>>,
}

impl DynSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value of any type
    pub fn value<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.push(value);
        self
    }

    /// Append the null value
    pub fn null(mut self) -> Self {
        self.push_null();
        self
    }

    pub fn push<T: Any + Send + Sync>(&mut self, value: T) {
        self.items.push(Some(DynItem {
            value: Box::new(value),
            type_name: std::any::type_name::<T>(),
        }));
    }

    pub fn push_null(&mut self) {
        self.items.push(None);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Debug for DynSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(
                self.items
                    .iter()
                    .map(|item| item.as_ref().map_or("null", |item| item.type_name)),
            )
            .finish()
    }
}

impl RawSource for DynSeq {
    type Cursor<'a> = DynCursor<'a>;

    fn raw_cursor(&self) -> Self::Cursor<'_> {
        DynCursor {
            items: &self.items,
            position: Position::new(),
        }
    }
}

/// Cursor over a [`DynSeq`]
pub struct DynCursor<'a> {
    items: &'a [Option<DynItem>],
    position: Position,
}

impl RawCursor for DynCursor<'_> {
    fn move_next(&mut self) -> bool {
        self.position.advance(self.items.len())
    }

    fn current(&self) -> ListResult<Option<RawValue<'_>>> {
        let index = self.position.index()?;
        Ok(self.items[index].as_ref().map(|item| {
            let value: &dyn Any = &*item.value;
            RawValue::from_parts(value, item.type_name)
        }))
    }

    fn reset(&mut self) {
        self.position.reset();
    }
}

impl fmt::Debug for DynCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynCursor")
            .field("len", &self.items.len())
            .field("position", &self.position)
            .finish()
    }
}
