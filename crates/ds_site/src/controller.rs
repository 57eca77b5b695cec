use tracing::{debug, info};

use crate::view::ViewId;

/// Where a navigation request came from. Only used for logging and for the
/// navbar to know when to fold the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationSource {
    Menu,
    MobileMenu,
    Brand,
    Footer,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationEvent {
    pub sequence: u64,
    pub from: ViewId,
    pub to: ViewId,
    pub source: NavigationSource,
}

impl NavigationEvent {
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Single owner of the current view. `navigate` is the only way to change it.
#[derive(Debug, Default)]
pub struct ViewController {
    current: ViewId,
    sequence: u64,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ViewId {
        self.current
    }

    pub fn is_active(&self, view: ViewId) -> bool {
        self.current == view
    }

    /// Number of navigations performed so far, self loops included.
    pub fn navigation_count(&self) -> u64 {
        self.sequence
    }

    pub fn navigate(&mut self, target: ViewId, source: NavigationSource) -> NavigationEvent {
        self.sequence += 1;

        let event = NavigationEvent {
            sequence: self.sequence,
            from: self.current,
            to: target,
            source,
        };

        if event.changed() {
            info!(from = %event.from, to = %event.to, source = ?source, "Navigate");
        } else {
            debug!(view = %target, source = ?source, "Navigate to active view");
        }

        self.current = target;
        event
    }
}
