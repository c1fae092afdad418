/// Viewport width at or below which a single card is shown.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
/// Viewport width at or below which two cards are shown.
pub const TABLET_BREAKPOINT_PX: f64 = 1024.0;

/// Horizontal drag distance below which a touch gesture is ignored.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Delay between automatic page advances.
pub const AUTOPLAY_INTERVAL_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Cards visible at once for a given viewport width.
pub fn cards_per_view(viewport_width: f64) -> usize {
    if viewport_width <= MOBILE_BREAKPOINT_PX {
        1
    } else if viewport_width <= TABLET_BREAKPOINT_PX {
        2
    } else {
        3
    }
}

/// Inter-card gap in pixels for a given cards-per-view.
pub fn gap_for(cards_per_view: usize) -> f64 {
    match cards_per_view {
        1 => 15.0,
        2 => 20.0,
        _ => 30.0,
    }
}

/// Number of pages needed to show `card_count` cards.
pub fn total_pages(card_count: usize, cards_per_view: usize) -> usize {
    card_count.div_ceil(cards_per_view)
}

/// Paged view over a flat card sequence.
///
/// `current_page` stays in `[0, total_pages)` after every transition; with
/// zero cards there are zero pages and all transitions are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    pub current_page: usize,
    pub cards_per_view: usize,
    pub total_pages: usize,
}

impl CarouselState {
    pub fn new(card_count: usize, viewport_width: f64) -> Self {
        let cpv = cards_per_view(viewport_width);
        Self {
            current_page: 0,
            cards_per_view: cpv,
            total_pages: total_pages(card_count, cpv),
        }
    }

    /// Step one page forward or backward, wrapping cyclically.
    pub fn advance(self, direction: Direction) -> Self {
        if self.total_pages == 0 {
            return self;
        }
        let current_page = match direction {
            Direction::Next => (self.current_page + 1) % self.total_pages,
            Direction::Prev => (self.current_page + self.total_pages - 1) % self.total_pages,
        };
        Self {
            current_page,
            ..self
        }
    }

    /// Jump to a page directly, wrapping out-of-range indices.
    pub fn go_to(self, index: usize) -> Self {
        if self.total_pages == 0 {
            return self;
        }
        Self {
            current_page: index % self.total_pages,
            ..self
        }
    }

    /// Re-derive the layout for a new viewport width. Returns to the first
    /// page so the track offset stays consistent with the rebuilt dots.
    pub fn resize(self, card_count: usize, viewport_width: f64) -> Self {
        Self::new(card_count, viewport_width)
    }

    /// Pixel offset of the track for the current page.
    pub fn offset_px(&self, card_width: f64) -> f64 {
        let step = card_width + gap_for(self.cards_per_view);
        self.current_page as f64 * self.cards_per_view as f64 * step
    }
}

/// Classify a completed horizontal drag. `delta` is start minus end, so a
/// leftward drag is positive and pages forward. Vertical travel is not
/// consulted; a diagonal drag counts by its horizontal component alone.
pub fn swipe_direction(delta: f64) -> Option<Direction> {
    if delta > SWIPE_THRESHOLD_PX {
        Some(Direction::Next)
    } else if delta < -SWIPE_THRESHOLD_PX {
        Some(Direction::Prev)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_per_view_breakpoints() {
        assert_eq!(cards_per_view(320.0), 1);
        assert_eq!(cards_per_view(768.0), 1);
        assert_eq!(cards_per_view(769.0), 2);
        assert_eq!(cards_per_view(1024.0), 2);
        assert_eq!(cards_per_view(1025.0), 3);
        assert_eq!(cards_per_view(1920.0), 3);
    }

    #[test]
    fn test_cards_per_view_monotone() {
        let widths = [320.0, 600.0, 768.0, 900.0, 1024.0, 1280.0, 2560.0];
        for pair in widths.windows(2) {
            assert!(cards_per_view(pair[0]) <= cards_per_view(pair[1]));
        }
    }

    #[test]
    fn test_total_pages_ceiling() {
        assert_eq!(total_pages(6, 3), 2);
        assert_eq!(total_pages(7, 3), 3);
        assert_eq!(total_pages(7, 2), 4);
        assert_eq!(total_pages(1, 3), 1);
        assert_eq!(total_pages(0, 3), 0);
    }

    #[test]
    fn test_advance_wraps_forward() {
        let mut state = CarouselState::new(6, 1280.0); // 2 pages
        state = state.advance(Direction::Next);
        assert_eq!(state.current_page, 1);
        state = state.advance(Direction::Next);
        assert_eq!(state.current_page, 0);
    }

    #[test]
    fn test_advance_wraps_backward() {
        let state = CarouselState::new(6, 1280.0);
        assert_eq!(state.advance(Direction::Prev).current_page, 1);
    }

    #[test]
    fn test_advance_cyclic_closure() {
        // total_pages applications of Next return to the start, for every
        // cards-per-view tier.
        for (count, width) in [(7, 500.0), (7, 900.0), (7, 1400.0)] {
            let start = CarouselState::new(count, width);
            let mut state = start;
            for _ in 0..state.total_pages {
                state = state.advance(Direction::Next);
                assert!(state.current_page < state.total_pages);
            }
            assert_eq!(state, start);
        }
    }

    #[test]
    fn test_prev_then_next_is_identity() {
        let start = CarouselState::new(9, 900.0).go_to(2);
        let roundtrip = start.advance(Direction::Prev).advance(Direction::Next);
        assert_eq!(roundtrip, start);
    }

    #[test]
    fn test_go_to_wraps() {
        let state = CarouselState::new(9, 1400.0); // 3 pages
        assert_eq!(state.go_to(2).current_page, 2);
        assert_eq!(state.go_to(3).current_page, 0);
        assert_eq!(state.go_to(7).current_page, 1);
    }

    #[test]
    fn test_zero_cards_transitions_are_noops() {
        let state = CarouselState::new(0, 1280.0);
        assert_eq!(state.total_pages, 0);
        assert_eq!(state.advance(Direction::Next), state);
        assert_eq!(state.advance(Direction::Prev), state);
        assert_eq!(state.go_to(5), state);
    }

    #[test]
    fn test_resize_resets_to_first_page() {
        let state = CarouselState::new(6, 1280.0).advance(Direction::Next);
        assert_eq!(state.current_page, 1);
        let resized = state.resize(6, 700.0);
        assert_eq!(resized.current_page, 0);
        assert_eq!(resized.cards_per_view, 1);
        assert_eq!(resized.total_pages, 6);
    }

    #[test]
    fn test_offset_uses_gap_for_tier() {
        // One card per view: step = width + 15.
        let state = CarouselState::new(6, 700.0).go_to(2);
        assert!((state.offset_px(300.0) - 2.0 * (300.0 + 15.0)).abs() < 1e-9);

        // Three cards per view: step = width + 30, three cards per page.
        let state = CarouselState::new(9, 1400.0).go_to(1);
        assert!((state.offset_px(320.0) - 3.0 * (320.0 + 30.0)).abs() < 1e-9);
    }

    #[test]
    fn test_offset_zero_on_first_page() {
        let state = CarouselState::new(9, 1400.0);
        assert!((state.offset_px(320.0) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_swipe_dead_zone() {
        assert_eq!(swipe_direction(40.0), None);
        assert_eq!(swipe_direction(-40.0), None);
        assert_eq!(swipe_direction(50.0), None);
    }

    #[test]
    fn test_swipe_direction() {
        assert_eq!(swipe_direction(60.0), Some(Direction::Next));
        assert_eq!(swipe_direction(-60.0), Some(Direction::Prev));
    }
}
