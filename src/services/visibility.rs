//! Visibility Observer
//!
//! Hook for "reveal on scroll" style effects. The view state calls it when
//! the visible section changes; it is optional and injected, never global.

use crate::state::ContentTab;

/// Notified when a content section becomes visible
pub trait VisibilityObserver: Send + Sync {
    /// Re-arm reveal effects for the newly shown section
    fn section_shown(&self, tab: ContentTab);
}

/// Observer that records section changes in the log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingVisibilityObserver;

impl VisibilityObserver for TracingVisibilityObserver {
    fn section_shown(&self, tab: ContentTab) {
        tracing::debug!(?tab, "Section shown");
    }
}
