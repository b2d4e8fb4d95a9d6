/*!
 * Write Policies
 *
 * Rules deciding whether a mutating primitive may proceed. A container is
 * parameterized by exactly one policy; checks run before the guard is taken.
 */

use crate::core::errors::ListResult;
use std::fmt;

/// Mutating primitive being attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriteOp {
    Add,
    Insert,
    Set,
    RemoveAt,
    Remove,
    Clear,
}

impl WriteOp {
    pub const fn name(self) -> &'static str {
        match self {
            WriteOp::Add => "add",
            WriteOp::Insert => "insert",
            WriteOp::Set => "set",
            WriteOp::RemoveAt => "remove_at",
            WriteOp::Remove => "remove",
            WriteOp::Clear => "clear",
        }
    }

    /// Whether the operation stores a new element
    pub const fn stores_value(self) -> bool {
        matches!(self, WriteOp::Add | WriteOp::Insert | WriteOp::Set)
    }
}

impl fmt::Display for WriteOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Write policy for containers of `T`
///
/// Policies are zero-sized markers; every hook is an associated function.
pub trait WritePolicy<T>: Send + Sync + 'static {
    /// Name used in diagnostics and tracing
    const NAME: &'static str;

    const READ_ONLY: bool = false;

    const FIXED_SIZE: bool = false;

    /// Admit an operation that stores no new element
    fn admit_write(op: WriteOp) -> ListResult<()> {
        let _ = op;
        Ok(())
    }

    /// Admit an operation storing `value`
    fn admit_value(op: WriteOp, value: &T) -> ListResult<()> {
        let _ = value;
        Self::admit_write(op)
    }

    /// Veto a construction source before it is placed behind the guard
    fn check_source(items: &[T]) -> ListResult<()> {
        let _ = items;
        Ok(())
    }

    /// Shape the accepted construction source into the guarded sequence
    fn shape_source(items: Vec<T>) -> Vec<T> {
        items
    }
}
