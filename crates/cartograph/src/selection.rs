//! In-progress connect-gesture selection.

/// Zero or one node id pending as the first endpoint of a connect gesture.
///
/// Holds the id, not a copy of the node; color derivation peeks at it through
/// [`PendingSelection::current`].
#[derive(Debug, Clone, Default)]
pub struct PendingSelection {
    pending: Option<String>,
}

impl PendingSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `node_id` as the pending first endpoint.
    ///
    /// Callers clear any previous selection first; a `begin` over an existing
    /// pending id replaces it.
    pub fn begin(&mut self, node_id: impl Into<String>) {
        self.pending = Some(node_id.into());
    }

    /// Returns and clears the pending id, completing (or rejecting) the
    /// gesture.
    pub fn resolve(&mut self) -> Option<String> {
        self.pending.take()
    }

    /// Clears the pending id without creating an edge.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Read-only peek, used by color derivation.
    pub fn current(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_none()
    }
}
