use tracing::debug;

use crate::contact_form::ContactForm;
use crate::content::SiteContent;
use crate::controller::{NavigationEvent, NavigationSource, ViewController};
use crate::links::OutboundLinks;
use crate::map_tab::MapTabs;
use crate::marquee::Marquee;
use crate::navbar::Navbar;
use crate::template::{self, Block};
use crate::transition::{ScrollReset, TransitionRegion, Visible};
use crate::view::ViewId;

/// Root state of the site. Owned by the application and handed explicitly to
/// every consumer, which read from it and call [`Site::navigate`].
pub struct Site {
    pub content: SiteContent,
    pub links: OutboundLinks,
    pub navbar: Navbar,
    pub map_tabs: MapTabs,
    pub contact_form: ContactForm,
    pub marquee: Marquee,

    controller: ViewController,
    region: TransitionRegion,
    scroll_reset: ScrollReset,
    scroll_offset: f32,
}

impl Site {
    pub fn new(content: SiteContent) -> Self {
        let shell = &content.shell;

        let controller = ViewController::new();
        let region = TransitionRegion::new(controller.current(), shell.transition_seconds);
        let scroll_reset = ScrollReset::new(shell.scroll_reset_seconds);
        let navbar = Navbar::new(shell.compact_threshold_px);
        let marquee = Marquee::new(shell.marquee_seconds, shell.marquee_repeats);
        let links = OutboundLinks::new(&content.brand);

        Self {
            content,
            links,
            navbar,
            map_tabs: MapTabs::new(),
            contact_form: ContactForm::new(),
            marquee,
            controller,
            region,
            scroll_reset,
            scroll_offset: 0.0,
        }
    }

    pub fn current(&self) -> ViewId {
        self.controller.current()
    }

    pub fn is_active(&self, view: ViewId) -> bool {
        self.controller.is_active(view)
    }

    pub fn navigation_count(&self) -> u64 {
        self.controller.navigation_count()
    }

    pub fn navigate(
        &mut self,
        target: ViewId,
        source: NavigationSource,
        now: f64,
    ) -> NavigationEvent {
        let event = self.controller.navigate(target, source);

        self.region.retarget(target, now);
        self.scroll_reset.request(self.scroll_offset, now);
        self.navbar.after_navigation(&event);

        // The outgoing contact view stays on screen during its exit fade, so
        // input is dropped both when leaving and when coming back.
        let touches_contact = event.from == ViewId::Contact || event.to == ViewId::Contact;
        if event.changed() && touches_contact && !self.contact_form.is_empty() {
            debug!("Discarding contact form input");
            self.contact_form.clear();
        }

        event
    }

    /// The view the region draws this frame and how opaque it is.
    pub fn visible(&mut self, now: f64) -> Visible {
        self.region.visible(now)
    }

    pub fn blocks(&self, view: ViewId) -> Vec<Block<'_>> {
        template::view_blocks(&self.content, view)
    }

    /// Called by the shell with the scroll offset it observed this frame.
    pub fn report_scroll(&mut self, offset: f32) {
        self.scroll_offset = offset;
        self.navbar.on_scroll(offset);
    }

    /// Offset the shell must apply this frame while a scroll reset runs.
    pub fn forced_scroll_offset(&mut self, now: f64) -> Option<f32> {
        self.scroll_reset.offset(now)
    }

    pub fn is_animating(&mut self, now: f64) -> bool {
        self.region.is_animating(now) || self.scroll_reset.is_running(now)
    }
}
