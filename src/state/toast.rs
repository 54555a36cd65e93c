//! Notification queue backing the toast surface.
//!
//! DESIGN
//! ======
//! Pushing returns the toast's id so callers (or the auto-dismiss
//! timer) can dismiss exactly the toast they created; ids are a
//! per-tab monotonic counter.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Visual emphasis of a notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// A single queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

/// Ordered queue of visible notifications.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Queue a notification and return its id.
    pub fn push(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        variant: ToastVariant,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            title: title.into(),
            description: description.into(),
            variant,
        });
        id
    }

    /// Remove the toast with `id`; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}
