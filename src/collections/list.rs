/*!
 * Synchronized List
 *
 * Public mutable list with no write restrictions
 */

use super::container::SyncContainer;
use super::policy::WritePolicy;
use crate::core::config::ListConfig;

/// Policy admitting every write
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unrestricted;

impl<T> WritePolicy<T> for Unrestricted {
    const NAME: &'static str = "unrestricted";
}

/// Thread-safe mutable list
///
/// # Example
///
/// ```ignore
/// let list = Arc::new(SyncList::new());
/// list.add("job-1".to_string())?;
/// let first = list.get(0)?;
/// ```
pub type SyncList<T> = SyncContainer<T, Unrestricted>;

impl<T> From<Vec<T>> for SyncContainer<T, Unrestricted> {
    fn from(items: Vec<T>) -> Self {
        Self::build(items, ListConfig::default())
    }
}

impl<T> FromIterator<T> for SyncContainer<T, Unrestricted> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build(iter.into_iter().collect(), ListConfig::default())
    }
}
