//! ToastState - Transient Notifications

use crate::constants::TOAST_CAPACITY;
use crate::helpers::BoundedDeque;

/// Notification styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient, already-localized notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

impl Toast {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == ToastKind::Error
    }
}

/// A toast with its dismissal id
#[derive(Debug, Clone)]
pub struct ToastEntry {
    pub id: u64,
    pub toast: Toast,
}

/// Visible notifications, oldest first
#[derive(Debug)]
pub struct ToastState {
    entries: BoundedDeque<ToastEntry>,
    next_id: u64,
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new(TOAST_CAPACITY)
    }
}

impl ToastState {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: BoundedDeque::new(capacity),
            next_id: 1,
        }
    }

    /// Show a toast; returns its id for later dismissal
    pub fn push(&mut self, toast: Toast) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(ToastEntry { id, toast });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|entry| entry.id != id);
    }

    pub fn entries(&self) -> impl Iterator<Item = &ToastEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.entries.last().map(|entry| &entry.toast)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut toasts = ToastState::new(3);
        let first = toasts.push(Toast::success("Success!", "one"));
        let second = toasts.push(Toast::error("Error", "two"));
        assert_ne!(first, second);

        toasts.dismiss(first);
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.latest().map(|t| t.description.as_str()), Some("two"));
        assert!(toasts.latest().is_some_and(Toast::is_error));
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut toasts = ToastState::new(2);
        toasts.push(Toast::success("a", "1"));
        toasts.push(Toast::success("b", "2"));
        toasts.push(Toast::success("c", "3"));
        let titles: Vec<_> = toasts.entries().map(|e| e.toast.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "c"]);
    }

    #[test]
    fn test_dismiss_unknown_is_noop() {
        let mut toasts = ToastState::default();
        toasts.push(Toast::success("a", "1"));
        toasts.dismiss(42);
        assert_eq!(toasts.len(), 1);
    }
}
