use tracing::debug;

use crate::controller::{NavigationEvent, NavigationSource};

/// Navbar-local UI state. Nothing here is visible outside the navbar except
/// through the navigations it requests.
#[derive(Debug)]
pub struct Navbar {
    compact_threshold: f32,
    compact: bool,
    mobile_menu_open: bool,
}

impl Navbar {
    pub fn new(compact_threshold: f32) -> Self {
        Self {
            compact_threshold,
            compact: false,
            mobile_menu_open: false,
        }
    }

    pub fn is_compact(&self) -> bool {
        self.compact
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn on_scroll(&mut self, offset: f32) {
        self.compact = offset > self.compact_threshold;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
        debug!(open = self.mobile_menu_open, "Mobile menu toggled");
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    pub fn after_navigation(&mut self, event: &NavigationEvent) {
        if event.source == NavigationSource::MobileMenu {
            self.close_mobile_menu();
        }
    }
}
