/*!
 * Synchronized Collections
 *
 * Thread-safe, strongly typed lists sharing one container implementation.
 *
 * ## Design
 *
 * A single [`SyncContainer`] owns the sequence and its guard. The variants
 * differ only in the write policy the container is parameterized with:
 *
 * - **SyncList**: `Unrestricted`, every write admitted
 * - **NonNullSyncList**: `RejectNull`, null elements refused
 * - **SyncReadOnlyList**: `ReadOnly`, every write refused
 *
 * Policy checks run before the guard is acquired, so a rejected write never
 * contends for the lock and never leaves a partial mutation behind.
 */

mod container;
mod list;
mod non_null;
mod policy;
mod read_only;
mod sync_root;

pub use container::SyncContainer;
pub use list::{SyncList, Unrestricted};
pub use non_null::{NonNullSyncList, Nullable, RejectNull};
pub use policy::{WriteOp, WritePolicy};
pub use read_only::{DefaultItem, ItemFactory, ReadOnly, SyncReadOnlyList};
pub use sync_root::{SyncRoot, SyncRootGuard};
