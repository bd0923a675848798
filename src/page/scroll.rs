// Page scroll state and the smooth-scroll glide
//
// The offset is the top of the viewport in document pixels. Nav clicks start
// a glide: a fixed-duration eased animation toward a target offset. A glide
// has no completion callback - each tick moves the offset, and a new request
// simply re-targets. Manual scrolling interrupts an in-flight glide.

use std::time::{Duration, Instant};

/// Offset past which the navbar switches to its "scrolled" treatment, in px.
pub const SCROLLED_THRESHOLD_PX: f32 = 100.0;

/// How long a nav-click glide takes.
pub const GLIDE_DURATION: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy)]
struct Glide {
    from: f32,
    target: f32,
    started: Instant,
}

/// Vertical scroll position over a document of known height.
#[derive(Debug, Clone)]
pub struct ScrollState {
    offset: f32,
    max_offset: f32,
    glide: Option<Glide>,
}

impl ScrollState {
    pub fn new(document_height: f32, viewport_height: f32) -> Self {
        Self {
            offset: 0.0,
            max_offset: (document_height - viewport_height).max(0.0),
            glide: None,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Whether the page has scrolled past the navbar-styling threshold.
    pub fn scrolled(&self) -> bool {
        self.offset > SCROLLED_THRESHOLD_PX
    }

    pub fn is_gliding(&self) -> bool {
        self.glide.is_some()
    }

    /// Viewport or document geometry changed; re-derive the scroll range.
    pub fn set_bounds(&mut self, document_height: f32, viewport_height: f32) {
        self.max_offset = (document_height - viewport_height).max(0.0);
        self.offset = self.offset.clamp(0.0, self.max_offset);
    }

    /// Apply a manual scroll delta. Cancels any in-flight glide - the user
    /// took over.
    pub fn scroll_by(&mut self, delta: f32) {
        self.glide = None;
        self.offset = (self.offset + delta).clamp(0.0, self.max_offset);
    }

    /// Start (or re-target) a glide toward `target`.
    pub fn glide_to(&mut self, target: f32, now: Instant) {
        self.glide = Some(Glide {
            from: self.offset,
            target: target.clamp(0.0, self.max_offset),
            started: now,
        });
    }

    /// Advance the glide, if any. Returns true when the offset moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(glide) = self.glide else {
            return false;
        };

        let elapsed = now.saturating_duration_since(glide.started);
        let t = if GLIDE_DURATION.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / GLIDE_DURATION.as_secs_f32()).clamp(0.0, 1.0)
        };
        // Ease-out cubic: fast start, settling finish
        let eased = 1.0 - (1.0 - t).powi(3);

        let previous = self.offset;
        self.offset = glide.from + (glide.target - glide.from) * eased;
        if t >= 1.0 {
            self.glide = None;
        }
        self.offset != previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    #[test]
    fn test_scrolled_threshold() {
        let mut scroll = ScrollState::new(2000.0, 500.0);
        assert!(!scroll.scrolled());

        scroll.scroll_by(100.0);
        assert!(!scroll.scrolled());

        scroll.scroll_by(1.0);
        assert!(scroll.scrolled());
    }

    #[test]
    fn test_scroll_clamps_to_document() {
        let mut scroll = ScrollState::new(2000.0, 500.0);
        scroll.scroll_by(-50.0);
        assert_eq!(scroll.offset(), 0.0);

        scroll.scroll_by(99_999.0);
        assert_eq!(scroll.offset(), 1500.0);
    }

    #[test]
    fn test_glide_reaches_target_and_stops() {
        let base = Instant::now();
        let mut scroll = ScrollState::new(2000.0, 500.0);

        scroll.glide_to(800.0, base);
        assert!(scroll.is_gliding());

        scroll.tick(at(base, 200));
        assert!(scroll.offset() > 0.0 && scroll.offset() < 800.0);

        scroll.tick(at(base, 400));
        assert_eq!(scroll.offset(), 800.0);
        assert!(!scroll.is_gliding());
    }

    #[test]
    fn test_retarget_replaces_previous_glide() {
        let base = Instant::now();
        let mut scroll = ScrollState::new(2000.0, 500.0);

        scroll.glide_to(800.0, base);
        scroll.tick(at(base, 100));

        // Second request re-targets from wherever the glide got to
        scroll.glide_to(200.0, at(base, 100));
        scroll.tick(at(base, 500));
        assert_eq!(scroll.offset(), 200.0);
        assert!(!scroll.is_gliding());
    }

    #[test]
    fn test_manual_scroll_cancels_glide() {
        let base = Instant::now();
        let mut scroll = ScrollState::new(2000.0, 500.0);

        scroll.glide_to(800.0, base);
        scroll.scroll_by(10.0);
        assert!(!scroll.is_gliding());
        assert!(!scroll.tick(at(base, 400)));
        assert_eq!(scroll.offset(), 10.0);
    }

    #[test]
    fn test_glide_target_is_clamped() {
        let base = Instant::now();
        let mut scroll = ScrollState::new(1000.0, 400.0);

        scroll.glide_to(5000.0, base);
        scroll.tick(at(base, 400));
        assert_eq!(scroll.offset(), 600.0);
    }

    #[test]
    fn test_short_document_never_scrolls() {
        let mut scroll = ScrollState::new(300.0, 500.0);
        scroll.scroll_by(100.0);
        assert_eq!(scroll.offset(), 0.0);
    }
}
