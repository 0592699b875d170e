//! Scroll-driven narrative overlay state.
//!
//! The page behind the animation is a stack of text sections, each two
//! viewport heights tall. Only the section under the current scroll offset
//! is shown, and nothing is shown until the reader has scrolled at least
//! once. The cost counters fade out over the first tenth of the scroll.

/// Viewport heights per narrative section.
const SECTION_SPAN_VIEWPORTS: f64 = 2.0;

/// Scroll progress at which the counters are fully hidden.
const COUNTER_FADE_END: f64 = 0.1;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NarrativeTracker {
    current_section: usize,
    has_scrolled: bool,
    scroll_progress: f64,
}

impl NarrativeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a scroll position. `document_height` is the full scrollable
    /// height; progress is `offset / (document_height - viewport_height)`.
    pub fn on_scroll(&mut self, offset: f64, viewport_height: f64, document_height: f64) {
        let offset = offset.max(0.0);
        if offset > 0.0 {
            self.has_scrolled = true;
        }

        let section_height = viewport_height * SECTION_SPAN_VIEWPORTS;
        self.current_section = if section_height > 0.0 {
            (offset / section_height).floor() as usize
        } else {
            0
        };

        let scrollable = document_height - viewport_height;
        self.scroll_progress = if scrollable > 0.0 {
            (offset / scrollable).clamp(0.0, 1.0)
        } else {
            0.0
        };
    }

    pub fn current_section(&self) -> usize {
        self.current_section
    }

    /// Latches on the first positive offset and never resets.
    pub fn has_scrolled(&self) -> bool {
        self.has_scrolled
    }

    pub fn scroll_progress(&self) -> f64 {
        self.scroll_progress
    }

    pub fn is_section_visible(&self, index: usize) -> bool {
        self.has_scrolled && self.current_section == index
    }

    /// Opacity of the cost counters: 1 at the top, 0 from 10% progress on.
    pub fn counter_opacity(&self) -> f64 {
        (1.0 - self.scroll_progress / COUNTER_FADE_END).clamp(0.0, 1.0)
    }
}
