//! Fade and scroll handoff between views.
//!
//! The region runs in "wait" mode: the outgoing view fades out completely
//! before the incoming one fades in, so at most one view is drawn at a time.
//! A navigation that arrives mid-transition cancels the earlier target and
//! restarts from whatever is visible at that instant.
//!
//! All functions take the current time in seconds, which keeps the state
//! machine independent of the UI clock.

use tracing::debug;

use crate::view::ViewId;

pub const DEFAULT_FADE_SECONDS: f64 = 0.8;
pub const DEFAULT_SCROLL_RESET_SECONDS: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Present,
    Exiting {
        outgoing: ViewId,
        from_opacity: f32,
        started: f64,
    },
    Entering {
        started: f64,
    },
}

/// What the region should draw this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visible {
    pub view: ViewId,
    pub opacity: f32,
}

#[derive(Debug)]
pub struct TransitionRegion {
    target: ViewId,
    phase: Phase,
    fade_seconds: f64,
}

impl TransitionRegion {
    pub fn new(initial: ViewId, fade_seconds: f64) -> Self {
        Self {
            target: initial,
            phase: Phase::Present,
            fade_seconds: fade_seconds.max(0.0),
        }
    }

    /// The latest requested view.
    pub fn target(&self) -> ViewId {
        self.target
    }

    pub fn phase(&mut self, now: f64) -> Phase {
        self.advance(now);
        self.phase
    }

    pub fn is_animating(&mut self, now: f64) -> bool {
        self.phase(now) != Phase::Present
    }

    pub fn visible(&mut self, now: f64) -> Visible {
        self.advance(now);

        match self.phase {
            Phase::Present => Visible {
                view: self.target,
                opacity: 1.0,
            },
            Phase::Exiting {
                outgoing,
                from_opacity,
                started,
            } => Visible {
                view: outgoing,
                opacity: self.exit_opacity(from_opacity, started, now),
            },
            Phase::Entering { started } => Visible {
                view: self.target,
                opacity: self.enter_opacity(started, now),
            },
        }
    }

    /// Point the region at a new view. Retargeting the view that is already
    /// present does not fade; the caller still resets the scroll.
    pub fn retarget(&mut self, to: ViewId, now: f64) {
        self.advance(now);

        match self.phase {
            Phase::Present => {
                if to != self.target {
                    self.phase = Phase::Exiting {
                        outgoing: self.target,
                        from_opacity: 1.0,
                        started: now,
                    };
                }
            }
            Phase::Exiting {
                outgoing,
                from_opacity,
                started,
            } => {
                if to == outgoing {
                    // Fade the same view back in from where it is.
                    let opacity = self.exit_opacity(from_opacity, started, now);
                    self.phase = Phase::Entering {
                        started: now - f64::from(opacity) * self.fade_seconds,
                    };
                }
            }
            Phase::Entering { started } => {
                if to != self.target {
                    self.phase = Phase::Exiting {
                        outgoing: self.target,
                        from_opacity: self.enter_opacity(started, now),
                        started: now,
                    };
                }
            }
        }

        debug!(view = %to, phase = ?self.phase, "Transition retarget");
        self.target = to;
        self.advance(now);
    }

    fn exit_opacity(&self, from_opacity: f32, started: f64, now: f64) -> f32 {
        if self.fade_seconds <= 0.0 {
            return 0.0;
        }
        let faded = ((now - started) / self.fade_seconds) as f32;
        (from_opacity - faded).clamp(0.0, 1.0)
    }

    fn enter_opacity(&self, started: f64, now: f64) -> f32 {
        if self.fade_seconds <= 0.0 {
            return 1.0;
        }
        (((now - started) / self.fade_seconds) as f32).clamp(0.0, 1.0)
    }

    fn advance(&mut self, now: f64) {
        if let Phase::Exiting {
            from_opacity,
            started,
            ..
        } = self.phase
        {
            let exit_end = started + f64::from(from_opacity) * self.fade_seconds;
            if now >= exit_end {
                self.phase = Phase::Entering { started: exit_end };
            }
        }

        if let Phase::Entering { started } = self.phase {
            if now >= started + self.fade_seconds {
                self.phase = Phase::Present;
            }
        }
    }
}

/// Smoothed scroll back to the top of the page.
#[derive(Debug)]
pub struct ScrollReset {
    duration: f64,
    running: Option<(f32, f64)>,
}

impl ScrollReset {
    pub fn new(duration: f64) -> Self {
        Self {
            duration: duration.max(0.0),
            running: None,
        }
    }

    pub fn request(&mut self, current_offset: f32, now: f64) {
        self.running = Some((current_offset.max(0.0), now));
    }

    pub fn is_running(&self, now: f64) -> bool {
        matches!(self.running, Some((_, started)) if now < started + self.duration)
    }

    /// Offset to force on the scroll area, `None` once the reset has finished
    /// and the user owns the scroll position again.
    pub fn offset(&mut self, now: f64) -> Option<f32> {
        let (from, started) = self.running?;

        if self.duration <= 0.0 || now >= started + self.duration {
            self.running = None;
            return Some(0.0);
        }

        let t = (((now - started) / self.duration) as f32).clamp(0.0, 1.0);
        let eased = 1.0 - (1.0 - t).powi(3);
        Some(from * (1.0 - eased))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FADE: f64 = 0.8;

    fn region() -> TransitionRegion {
        TransitionRegion::new(ViewId::Home, FADE)
    }

    #[test]
    fn steady_state_shows_one_opaque_view() {
        let mut region = region();

        assert_eq!(
            region.visible(0.0),
            Visible {
                view: ViewId::Home,
                opacity: 1.0
            }
        );
        assert!(!region.is_animating(0.0));
    }

    #[test]
    fn outgoing_fades_out_before_incoming_fades_in() {
        let mut region = region();
        region.retarget(ViewId::About, 10.0);

        let halfway_out = region.visible(10.4);
        assert_eq!(halfway_out.view, ViewId::Home);
        assert!((halfway_out.opacity - 0.5).abs() < 1e-4);

        let halfway_in = region.visible(11.2);
        assert_eq!(halfway_in.view, ViewId::About);
        assert!((halfway_in.opacity - 0.5).abs() < 1e-4);

        assert_eq!(
            region.visible(11.7),
            Visible {
                view: ViewId::About,
                opacity: 1.0
            }
        );
        assert_eq!(region.phase(11.7), Phase::Present);
    }

    #[test]
    fn opacity_is_monotone_within_each_phase() {
        let mut region = region();
        region.retarget(ViewId::Contact, 0.0);

        let mut previous = 1.0;
        for step in 0..8 {
            let visible = region.visible(f64::from(step) * 0.1);
            assert_eq!(visible.view, ViewId::Home);
            assert!(visible.opacity <= previous);
            previous = visible.opacity;
        }

        let mut previous = 0.0;
        for step in 8..=16 {
            let visible = region.visible(f64::from(step) * 0.1 + 1e-9);
            assert_eq!(visible.view, ViewId::Contact);
            assert!(visible.opacity >= previous);
            previous = visible.opacity;
        }
    }

    #[test]
    fn same_view_while_present_does_not_fade() {
        let mut region = region();
        region.retarget(ViewId::Home, 3.0);

        assert_eq!(region.phase(3.0), Phase::Present);
        assert_eq!(region.visible(3.1).opacity, 1.0);
    }

    #[test]
    fn retarget_during_exit_replaces_the_target() {
        let mut region = region();
        region.retarget(ViewId::About, 0.0);
        region.retarget(ViewId::Profile, 0.2);

        // Home keeps fading at the same pace
        let visible = region.visible(0.4);
        assert_eq!(visible.view, ViewId::Home);
        assert!((visible.opacity - 0.5).abs() < 1e-4);

        assert_eq!(region.target(), ViewId::Profile);
        assert_eq!(region.visible(1.0).view, ViewId::Profile);
        assert_eq!(region.visible(2.0).opacity, 1.0);
    }

    #[test]
    fn retarget_during_enter_fades_the_entering_view_out_from_its_opacity() {
        let mut region = region();
        region.retarget(ViewId::About, 0.0);
        // About is at 0.25 opacity at t = 1.0
        region.retarget(ViewId::Expertise, 1.0);

        let visible = region.visible(1.0);
        assert_eq!(visible.view, ViewId::About);
        assert!((visible.opacity - 0.25).abs() < 1e-4);

        // 0.25 of opacity takes 0.2s to fade
        let visible = region.visible(1.3);
        assert_eq!(visible.view, ViewId::Expertise);
        assert!(visible.opacity > 0.0 && visible.opacity < 1.0);

        assert_eq!(region.phase(2.1), Phase::Present);
        assert_eq!(region.visible(2.1).view, ViewId::Expertise);
    }

    #[test]
    fn returning_to_the_outgoing_view_fades_it_back_in() {
        let mut region = region();
        region.retarget(ViewId::About, 0.0);
        region.retarget(ViewId::Home, 0.2);

        let visible = region.visible(0.2);
        assert_eq!(visible.view, ViewId::Home);
        assert!((visible.opacity - 0.75).abs() < 1e-4);

        assert_eq!(region.visible(0.5).opacity, 1.0);
        assert_eq!(region.target(), ViewId::Home);
    }

    #[test]
    fn zero_duration_switches_immediately() {
        let mut region = TransitionRegion::new(ViewId::Home, 0.0);
        region.retarget(ViewId::Contact, 5.0);

        assert_eq!(
            region.visible(5.0),
            Visible {
                view: ViewId::Contact,
                opacity: 1.0
            }
        );
    }

    #[test]
    fn scroll_reset_reaches_top() {
        let mut scroll = ScrollReset::new(0.6);
        scroll.request(900.0, 1.0);

        let midway = scroll.offset(1.3).unwrap();
        assert!(midway > 0.0 && midway < 900.0);
        assert!(scroll.is_running(1.3));

        assert_eq!(scroll.offset(1.7), Some(0.0));
        assert_eq!(scroll.offset(1.8), None);
    }

    #[test]
    fn scroll_reset_restarts_from_current_offset() {
        let mut scroll = ScrollReset::new(0.6);
        scroll.request(900.0, 0.0);
        let midway = scroll.offset(0.3).unwrap();

        scroll.request(midway, 0.3);

        assert_eq!(scroll.offset(0.3), Some(midway));
        assert_eq!(scroll.offset(1.0), Some(0.0));
    }

    #[test]
    fn idle_scroll_reset_forces_nothing() {
        let mut scroll = ScrollReset::new(0.6);

        assert_eq!(scroll.offset(0.0), None);
        assert!(!scroll.is_running(0.0));
    }
}
