//! Host window notification seam
//!
//! The layout core is embedded in a larger editor; the host window needs to
//! know when the active pane or the pane count changes (e.g. to retarget
//! pane-scoped commands or enable a global Save action). Notifications are
//! dispatched only after the tree is fully consistent, so a handler may
//! query the tree re-entrantly without observing partial state.

use crate::layout::PaneId;

/// Receiver for layout change notifications.
pub trait HostNotifier {
    /// A different pane became active.
    fn active_pane_changed(&self, pane: PaneId);

    /// The number of leaf panes changed.
    fn pane_count_changed(&self, count: usize);
}

/// Notifier that discards all notifications.
///
/// Default for trees constructed without a host, and useful in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpHostNotifier;

impl HostNotifier for NoOpHostNotifier {
    fn active_pane_changed(&self, _pane: PaneId) {}

    fn pane_count_changed(&self, _count: usize) {}
}

/// Notifier backed by caller-supplied closures.
pub struct CallbackHostNotifier {
    on_active: Box<dyn Fn(PaneId)>,
    on_count: Box<dyn Fn(usize)>,
}

impl CallbackHostNotifier {
    /// Creates a notifier from two callbacks.
    #[must_use]
    pub fn new(on_active: impl Fn(PaneId) + 'static, on_count: impl Fn(usize) + 'static) -> Self {
        Self {
            on_active: Box::new(on_active),
            on_count: Box::new(on_count),
        }
    }
}

impl HostNotifier for CallbackHostNotifier {
    fn active_pane_changed(&self, pane: PaneId) {
        (self.on_active)(pane);
    }

    fn pane_count_changed(&self, count: usize) {
        (self.on_count)(count);
    }
}

impl std::fmt::Debug for CallbackHostNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackHostNotifier").finish_non_exhaustive()
    }
}
