//! Shared handler state

use std::sync::Arc;

use crate::shipping::RateTable;

// =============================================================================
// AppState
// =============================================================================

/// Shared, read-only request state
#[derive(Clone, Debug)]
pub struct AppState {
    /// Rate table every shipping and checkout request is priced against
    pub rate_table: Arc<RateTable>,
}

impl AppState {
    #[must_use]
    pub fn new(rate_table: RateTable) -> Self {
        Self {
            rate_table: Arc::new(rate_table),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(RateTable::default())
    }
}
