/*!
 * Sync Lists Library
 * Thread-safe, strongly typed list containers with pluggable write policies
 */

pub mod collections;
pub mod core;
pub mod cursor;
pub mod monitoring;

// Re-exports
pub use crate::core::{ErrorKind, ListConfig, ListError, ListResult};
pub use collections::{
    DefaultItem, ItemFactory, NonNullSyncList, Nullable, ReadOnly, RejectNull, SyncContainer,
    SyncList, SyncReadOnlyList, SyncRoot, SyncRootGuard, Unrestricted, WriteOp, WritePolicy,
};
pub use cursor::{
    typed_cursor, DynCursor, DynSeq, RawCursor, RawSource, RawValue, SliceCursor, SnapshotCursor,
    TypedCursor,
};
pub use monitoring::init_tracing;
