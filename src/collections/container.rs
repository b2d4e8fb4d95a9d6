/*!
 * Synchronized Container
 *
 * One ordered sequence behind one guard, parameterized by a write policy.
 * Every primitive acquires the guard exactly once.
 */

use super::list::Unrestricted;
use super::policy::{WriteOp, WritePolicy};
use super::sync_root::{borrow_mut, SyncRoot};
use crate::core::config::ListConfig;
use crate::core::errors::{ListError, ListResult};
use crate::cursor::{RawSource, SnapshotCursor, TypedCursor};
use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use tracing::debug;

/// Thread-safe ordered sequence of `T`
///
/// # Atomicity
///
/// Each operation is atomic with respect to every other operation on the
/// same container. Sequences of operations are not: lock [`Self::sync_root`]
/// to make a check-then-act sequence atomic.
///
/// # Iteration
///
/// Cursors copy the elements under one guard acquisition and then advance
/// without the guard. Mutations made after a cursor is created are not
/// visible through it.
pub struct SyncContainer<T, P = Unrestricted> {
    root: SyncRoot<T>,
    config: ListConfig,
    _policy: PhantomData<fn() -> P>,
}

impl<T, P: WritePolicy<T>> SyncContainer<T, P> {
    /// Create an empty container
    pub fn new() -> Self {
        Self::with_config(ListConfig::default())
    }

    pub fn with_config(config: ListConfig) -> Self {
        let items = Vec::with_capacity(config.initial_capacity);
        Self::build(items, config)
    }

    /// Create a container holding the elements of an ordered sequence
    pub fn from_vec(items: Vec<T>) -> ListResult<Self> {
        Self::initialize(Some(items), ListConfig::default())
    }

    pub fn from_vec_with_config(items: Vec<T>, config: ListConfig) -> ListResult<Self> {
        Self::initialize(Some(items), config)
    }

    /// Create a container from any countable collection, in its iteration order
    pub fn from_collection<I>(collection: I) -> ListResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Self::initialize(Some(collection), ListConfig::default())
    }

    /// Create a container from a source that may be absent
    ///
    /// Fails with `NullArgument` when `source` is `None`.
    pub fn from_source<I>(source: Option<I>) -> ListResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Self::initialize(source, ListConfig::default())
    }

    /// Build the guarded sequence from a source, letting the policy veto it
    pub(crate) fn initialize<I>(source: Option<I>, config: ListConfig) -> ListResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let source = source.ok_or_else(|| ListError::null_argument("source"))?;
        let mut items: Vec<T> = source.into_iter().collect();
        items.reserve(config.initial_capacity.saturating_sub(items.len()));

        if let Err(err) = P::check_source(&items) {
            debug!(
                policy = P::NAME,
                list = config.label_or_default(),
                len = items.len(),
                error = %err,
                "construction source rejected"
            );
            return Err(err);
        }

        Ok(Self::build(items, config))
    }

    /// Place an accepted sequence behind the guard
    pub(crate) fn build(items: Vec<T>, config: ListConfig) -> Self {
        let items = P::shape_source(items);
        debug!(
            policy = P::NAME,
            list = config.label_or_default(),
            len = items.len(),
            fair_unlock = config.fair_unlock,
            "synchronized container created"
        );

        Self {
            root: SyncRoot::new(items, config.fair_unlock),
            config,
            _policy: PhantomData,
        }
    }

    // Read primitives

    /// Number of elements
    pub fn len(&self) -> usize {
        self.root.read(|items| items.len())
    }

    pub fn is_empty(&self) -> bool {
        self.root.read(|items| items.is_empty())
    }

    /// Element at `index`
    pub fn get(&self, index: usize) -> ListResult<T>
    where
        T: Clone,
    {
        self.root.read(|items| {
            items
                .get(index)
                .cloned()
                .ok_or_else(|| ListError::out_of_range("index", index, items.len()))
        })
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.root.read(|items| items.contains(value))
    }

    /// Index of the first element equal to `value`
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.root.read(|items| items.iter().position(|item| item == value))
    }

    /// Copy every element into `dest`, starting at `offset`
    ///
    /// # Errors
    ///
    /// - `ArgumentOutOfRange` if `offset` lies beyond `dest`
    /// - `InvalidArgument` if `dest` has too few slots after `offset`
    pub fn copy_to(&self, dest: &mut [T], offset: usize) -> ListResult<()>
    where
        T: Clone,
    {
        self.root.read(|items| {
            if offset > dest.len() {
                return Err(ListError::out_of_range("offset", offset, dest.len()));
            }
            let room = dest.len() - offset;
            if items.len() > room {
                return Err(ListError::invalid_argument(
                    "dest",
                    format!(
                        "{} elements do not fit in {} slots after offset {}",
                        items.len(),
                        room,
                        offset
                    ),
                ));
            }
            dest[offset..offset + items.len()].clone_from_slice(items);
            Ok(())
        })
    }

    /// Copy of all elements, taken under one guard acquisition
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.root.read(|items| items.to_vec())
    }

    /// Run `f` over the elements while holding the guard
    ///
    /// `f` may read the container again from the same thread, but any attempt
    /// to modify it from inside `f` fails with `InvalidOperation`.
    pub fn with_slice<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        self.root.read(f)
    }

    // Write primitives

    /// Append `value`, returning its index
    pub fn add(&self, value: T) -> ListResult<usize> {
        self.admit_value(WriteOp::Add, &value)?;
        self.root.locked(|cell| {
            let mut items = borrow_mut(cell)?;
            items.push(value);
            Ok(items.len() - 1)
        })
    }

    /// Insert `value` at `index`, shifting later elements; `index` may equal the length
    pub fn insert(&self, index: usize, value: T) -> ListResult<()> {
        self.admit_value(WriteOp::Insert, &value)?;
        self.root.locked(|cell| {
            let mut items = borrow_mut(cell)?;
            let len = items.len();
            if index > len {
                drop(items);
                return Err(ListError::out_of_range("index", index, len));
            }
            items.insert(index, value);
            Ok(())
        })
    }

    /// Replace the element at `index`
    pub fn set(&self, index: usize, value: T) -> ListResult<()> {
        self.admit_value(WriteOp::Set, &value)?;
        let previous = self.root.locked(|cell| {
            let mut items = borrow_mut(cell)?;
            let len = items.len();
            if index >= len {
                drop(items);
                return Err(ListError::out_of_range("index", index, len));
            }
            Ok(std::mem::replace(&mut items[index], value))
        })?;
        drop(previous);
        Ok(())
    }

    /// Remove and return the element at `index`
    pub fn remove_at(&self, index: usize) -> ListResult<T> {
        self.admit_write(WriteOp::RemoveAt)?;
        self.root.write(|items| {
            if index >= items.len() {
                return Err(ListError::out_of_range("index", index, items.len()));
            }
            Ok(items.remove(index))
        })
    }

    /// Remove the first element equal to `value`
    ///
    /// The membership probe and the removal share one guard acquisition.
    /// Returns `false`, leaving the container untouched, when no element matches.
    pub fn remove(&self, value: &T) -> ListResult<bool>
    where
        T: PartialEq,
    {
        self.admit_write(WriteOp::Remove)?;
        let removed = self.root.locked(|cell| {
            let position = cell.borrow().iter().position(|item| item == value);
            position
                .map(|index| borrow_mut(cell).map(|mut items| items.remove(index)))
                .transpose()
        })?;
        Ok(removed.is_some())
    }

    /// Remove every element
    pub fn clear(&self) -> ListResult<()> {
        self.admit_write(WriteOp::Clear)?;
        let removed = self.root.write(|items| Ok(std::mem::take(items)))?;
        drop(removed);
        Ok(())
    }

    // Introspection

    #[inline]
    pub fn is_read_only(&self) -> bool {
        P::READ_ONLY
    }

    #[inline]
    pub fn is_fixed_size(&self) -> bool {
        P::FIXED_SIZE
    }

    /// Always true; every primitive is guarded
    #[inline]
    pub fn is_synchronized(&self) -> bool {
        true
    }

    /// The guard shared by every primitive of this container
    #[inline]
    pub fn sync_root(&self) -> &SyncRoot<T> {
        &self.root
    }

    #[inline]
    pub fn policy_name(&self) -> &'static str {
        P::NAME
    }

    #[inline]
    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Take the elements out of the container
    pub fn into_vec(self) -> Vec<T> {
        self.root.into_inner()
    }

    fn admit_write(&self, op: WriteOp) -> ListResult<()> {
        P::admit_write(op).inspect_err(|err| self.log_rejection(op, err))
    }

    fn admit_value(&self, op: WriteOp, value: &T) -> ListResult<()> {
        P::admit_value(op, value).inspect_err(|err| self.log_rejection(op, err))
    }

    fn log_rejection(&self, op: WriteOp, err: &ListError) {
        debug!(
            policy = P::NAME,
            list = self.config.label_or_default(),
            op = %op,
            error = %err,
            "write rejected"
        );
    }
}

/// Untyped interop: values arrive as `dyn Any` and are cast before storing
impl<T: Any, P: WritePolicy<T>> SyncContainer<T, P> {
    /// Checked-cast form of [`Self::add`]; fails with `InvalidCast` for a foreign type
    pub fn add_dyn(&self, value: Box<dyn Any + Send>) -> ListResult<usize> {
        self.admit_write(WriteOp::Add)?;
        self.add(cast_value(value)?)
    }

    pub fn insert_dyn(&self, index: usize, value: Box<dyn Any + Send>) -> ListResult<()> {
        self.admit_write(WriteOp::Insert)?;
        self.insert(index, cast_value(value)?)
    }

    pub fn set_dyn(&self, index: usize, value: Box<dyn Any + Send>) -> ListResult<()> {
        self.admit_write(WriteOp::Set)?;
        self.set(index, cast_value(value)?)
    }
}

impl<T: Any + Clone, P: WritePolicy<T>> SyncContainer<T, P> {
    /// Untyped cursor over a snapshot of the elements
    pub fn raw_cursor(&self) -> SnapshotCursor<T> {
        SnapshotCursor::new(self.snapshot())
    }

    /// Typed cursor over a snapshot of the elements
    pub fn cursor(&self) -> TypedCursor<T, SnapshotCursor<T>> {
        TypedCursor::new(self.raw_cursor())
    }
}

fn cast_value<T: Any>(value: Box<dyn Any + Send>) -> ListResult<T> {
    value
        .downcast::<T>()
        .map(|value| *value)
        .map_err(|_| ListError::invalid_cast::<T>("dyn Any"))
}

impl<T: Any + Clone, P: WritePolicy<T>> RawSource for SyncContainer<T, P> {
    type Cursor<'a> = SnapshotCursor<T> where Self: 'a;

    fn raw_cursor(&self) -> Self::Cursor<'_> {
        SyncContainer::raw_cursor(self)
    }
}

impl<T, P: WritePolicy<T>> Default for SyncContainer<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, P: WritePolicy<T>> Clone for SyncContainer<T, P> {
    fn clone(&self) -> Self {
        Self::build(self.snapshot(), self.config.clone())
    }
}

impl<T: fmt::Debug, P: WritePolicy<T>> fmt::Debug for SyncContainer<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.read(|items| {
            f.debug_struct("SyncContainer")
                .field("policy", &P::NAME)
                .field("items", &items)
                .finish()
        })
    }
}

impl<'a, T: Clone, P: WritePolicy<T>> IntoIterator for &'a SyncContainer<T, P> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshot().into_iter()
    }
}
