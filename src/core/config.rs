/*!
 * Container Configuration
 *
 * Construction-time configuration for synchronized containers
 */

use super::errors::{ListError, ListResult};
use serde::{Deserialize, Serialize};

/// Synchronized container configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Capacity reserved for the underlying sequence at construction;
    /// read-only lists are sized exactly and ignore it
    pub initial_capacity: usize,
    /// Release the guard fairly so waiting threads are served in order
    pub fair_unlock: bool,
    /// Name attached to tracing events emitted for this container
    pub label: Option<String>,
}

impl ListConfig {
    /// Configuration for lists shared by many contending threads
    ///
    /// Fair unlocking trades throughput for bounded waiting.
    pub fn high_contention() -> Self {
        Self {
            fair_unlock: true,
            ..Self::default()
        }
    }

    /// Configuration with a reserved capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            initial_capacity: capacity,
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_fair_unlock(mut self, fair: bool) -> Self {
        self.fair_unlock = fair;
        self
    }

    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> ListResult<Self> {
        serde_json::from_str(json).map_err(|e| ListError::invalid_argument("json", e.to_string()))
    }

    /// Label used in tracing output
    pub(crate) fn label_or_default(&self) -> &str {
        self.label.as_deref().unwrap_or("unnamed")
    }
}
