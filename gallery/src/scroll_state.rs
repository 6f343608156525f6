//! Scroll State
//!
//! Vertical scroll position of the gallery surface, clamped to the extent the
//! layout reports.

/// Points scrolled per wheel line.
const LINE_HEIGHT: f32 = 40.0;

/// An action on the scroll surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollAction {
    /// Scroll by a delta (positive = scroll content up / towards start).
    ScrollBy(f32),
    /// Scroll by whole wheel lines (positive = towards start).
    Lines(f32),
    /// Jump to an absolute offset.
    ScrollTo(f32),
    /// One viewport towards the end.
    PageDown,
    /// One viewport towards the start.
    PageUp,
}

/// Scroll state for a single scroll surface.
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Current scroll offset (0 = top).
    pub offset: f32,
    /// Maximum scroll offset (synced from the layout after each pass).
    max: f32,
    /// Viewport height, used for paging.
    page: f32,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            max: f32::MAX,
            page: 0.0,
        }
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Apply a scroll action.
    pub fn apply(&mut self, action: ScrollAction) {
        match action {
            ScrollAction::ScrollBy(delta) => self.scroll_by(delta),
            ScrollAction::Lines(lines) => self.scroll_by(lines * LINE_HEIGHT),
            ScrollAction::ScrollTo(offset) => self.scroll_to(offset),
            ScrollAction::PageDown => self.scroll_by(-self.page),
            ScrollAction::PageUp => self.scroll_by(self.page),
        }
    }

    /// Scroll by a delta (positive = scroll content up).
    pub fn scroll_by(&mut self, delta: f32) {
        self.scroll_to(self.offset - delta);
    }

    /// Jump to `offset`, clamped to the extent. Non-finite offsets are ignored.
    pub fn scroll_to(&mut self, offset: f32) {
        if !offset.is_finite() {
            tracing::warn!(offset, "ignoring non-finite scroll offset");
            return;
        }
        self.offset = offset.clamp(0.0, self.max);
    }

    /// Sync the scroll limits after a layout pass.
    ///
    /// The surface scrolls over the content plus its vertical insets.
    pub fn sync_extent(&mut self, content_height: f32, vertical_insets: f32, viewport_height: f32) {
        self.max = (content_height + vertical_insets - viewport_height).max(0.0);
        self.page = viewport_height;
        self.offset = self.offset.clamp(0.0, self.max);
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_by_clamps() {
        let mut state = ScrollState::new();
        state.sync_extent(100.0, 0.0, 0.0);

        state.scroll_by(-50.0); // scroll down
        assert_eq!(state.offset, 50.0);

        state.scroll_by(-200.0); // over-scroll
        assert_eq!(state.offset, 100.0);

        state.scroll_by(300.0); // scroll up past 0
        assert_eq!(state.offset, 0.0);
    }

    #[test]
    fn sync_includes_insets_and_viewport() {
        let mut state = ScrollState::new();
        state.sync_extent(1000.0, 33.0, 800.0);
        assert_eq!(state.max(), 233.0);

        state.sync_extent(100.0, 33.0, 800.0);
        assert_eq!(state.max(), 0.0);
    }

    #[test]
    fn sync_reclamps_offset() {
        let mut state = ScrollState::new();
        state.scroll_to(500.0);
        state.sync_extent(300.0, 0.0, 100.0);
        assert_eq!(state.offset, 200.0);
    }

    #[test]
    fn non_finite_offsets_are_ignored() {
        let mut state = ScrollState::new();
        state.sync_extent(1000.0, 0.0, 200.0);
        state.scroll_to(300.0);

        state.scroll_to(f32::NAN);
        assert_eq!(state.offset, 300.0);
        state.scroll_to(f32::INFINITY);
        assert_eq!(state.offset, 300.0);
        state.apply(ScrollAction::ScrollBy(f32::NAN));
        assert_eq!(state.offset, 300.0);
    }

    #[test]
    fn paging_and_lines() {
        let mut state = ScrollState::new();
        state.sync_extent(2000.0, 0.0, 500.0);

        state.apply(ScrollAction::PageDown);
        assert_eq!(state.offset, 500.0);
        state.apply(ScrollAction::Lines(2.0));
        assert_eq!(state.offset, 420.0);
        state.apply(ScrollAction::PageUp);
        assert_eq!(state.offset, 0.0);
    }
}
