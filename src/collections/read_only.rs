/*!
 * Synchronized Read-Only List
 *
 * Fixed-content list, populated once at construction either from explicit
 * elements or by synthesizing one element per index
 */

use super::container::SyncContainer;
use super::policy::{WriteOp, WritePolicy};
use crate::core::config::ListConfig;
use crate::core::errors::{ListError, ListResult};
use tracing::debug;

/// Policy rejecting every write
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadOnly;

impl<T> WritePolicy<T> for ReadOnly {
    const NAME: &'static str = "read_only";
    const READ_ONLY: bool = true;
    const FIXED_SIZE: bool = true;

    fn admit_write(op: WriteOp) -> ListResult<()> {
        Err(ListError::not_supported(op.name()))
    }

    fn shape_source(mut items: Vec<T>) -> Vec<T> {
        items.shrink_to_fit();
        items
    }
}

/// Thread-safe list whose elements never change after construction
pub type SyncReadOnlyList<T> = SyncContainer<T, ReadOnly>;

/// Synthesizes the element for an index during auto-population
///
/// Implementations should be deterministic per index and must not touch the
/// container being populated.
pub trait ItemFactory<T> {
    fn create_new_item(&mut self, index: usize) -> ListResult<T>;
}

impl<T, F> ItemFactory<T> for F
where
    F: FnMut(usize) -> ListResult<T>,
{
    fn create_new_item(&mut self, index: usize) -> ListResult<T> {
        self(index)
    }
}

/// Factory default-constructing every element
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultItem;

impl<T: Default> ItemFactory<T> for DefaultItem {
    fn create_new_item(&mut self, _index: usize) -> ListResult<T> {
        Ok(T::default())
    }
}

impl<T> SyncContainer<T, ReadOnly> {
    /// `len` default-constructed elements, built through [`DefaultItem`]
    ///
    /// An element type without a default constructor is rejected at compile
    /// time by the `T: Default` bound.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        match Self::with_factory(len, DefaultItem) {
            Ok(list) => list,
            Err(_) => unreachable!("default construction cannot fail"),
        }
    }

    /// `len` elements synthesized by `factory`, called once per index in ascending order
    ///
    /// The first factory error aborts construction.
    pub fn with_factory<F>(len: usize, factory: F) -> ListResult<Self>
    where
        F: ItemFactory<T>,
    {
        Self::with_factory_and_config(len, factory, ListConfig::default())
    }

    /// Like [`Self::with_factory`] with an explicit configuration
    ///
    /// The list holds exactly `len` elements and never grows, so
    /// `config.initial_capacity` is not reserved; the other fields apply.
    pub fn with_factory_and_config<F>(
        len: usize,
        mut factory: F,
        config: ListConfig,
    ) -> ListResult<Self>
    where
        F: ItemFactory<T>,
    {
        let mut items = Vec::with_capacity(len);
        for index in 0..len {
            match factory.create_new_item(index) {
                Ok(item) => items.push(item),
                Err(err) => {
                    debug!(
                        list = config.label_or_default(),
                        index,
                        len,
                        error = %err,
                        "item factory failed"
                    );
                    return Err(err);
                }
            }
        }
        Ok(Self::build(items, config))
    }

    /// Like [`Self::with_factory`], where the factory may be unavailable
    ///
    /// A missing default constructor is normally caught at compile time by the
    /// `T: Default` bound of [`Self::with_len`]. This is the runtime fallback
    /// for callers that discover the absence dynamically: it fails with
    /// `MissingConstructor` when `factory` is `None`.
    pub fn with_optional_factory<F>(len: usize, factory: Option<F>) -> ListResult<Self>
    where
        F: ItemFactory<T>,
    {
        let factory = factory.ok_or_else(ListError::missing_constructor::<T>)?;
        Self::with_factory(len, factory)
    }

    /// Read-only list over explicit elements, in order
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::build(items.into_iter().collect(), ListConfig::default())
    }
}
