//! Page-number window arithmetic for paginated listings.

/// Largest number of page buttons rendered at once.
pub const MAX_VISIBLE_PAGES: u32 = 5;

/// Current page and page count of a listing.
///
/// `current_page` is always within `1..=max(total_pages, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    current_page: u32,
    total_pages: u32,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(1, 0)
    }
}

impl PaginationState {
    #[must_use]
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        Self {
            current_page: current_page.clamp(1, total_pages.max(1)),
            total_pages,
        }
    }

    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Whether a pagination control should be rendered at all.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.total_pages > 1
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Step back one page; a no-op on the first page or while loading.
    #[must_use]
    pub fn previous(self, is_loading: bool) -> Self {
        if is_loading || !self.has_previous() {
            return self;
        }
        Self::new(self.current_page - 1, self.total_pages)
    }

    /// Step forward one page; a no-op on the last page or while loading.
    #[must_use]
    pub fn next(self, is_loading: bool) -> Self {
        if is_loading || !self.has_next() {
            return self;
        }
        Self::new(self.current_page + 1, self.total_pages)
    }

    /// Jump to `page`, clamped into range; a no-op while loading.
    #[must_use]
    pub fn jump(self, page: u32, is_loading: bool) -> Self {
        if is_loading {
            return self;
        }
        Self::new(page, self.total_pages)
    }

    /// Re-clamp after the page count changed, e.g. following a fetch.
    #[must_use]
    pub fn with_total_pages(self, total_pages: u32) -> Self {
        Self::new(self.current_page, total_pages)
    }

    /// Page numbers to render, see [`page_window`].
    #[must_use]
    pub fn window(&self) -> Vec<u32> {
        page_window(self.current_page, self.total_pages)
    }
}

/// Up to [`MAX_VISIBLE_PAGES`] consecutive page numbers around `current_page`.
///
/// The current page is centred when possible; near either end the window
/// shifts so it never leaves `1..=total_pages`. An out-of-range current page
/// is clamped first. No pages yields an empty window.
#[must_use]
pub fn page_window(current_page: u32, total_pages: u32) -> Vec<u32> {
    if total_pages == 0 {
        return Vec::new();
    }
    let half = MAX_VISIBLE_PAGES / 2;
    let current = current_page.clamp(1, total_pages);
    let latest_start = total_pages
        .saturating_sub(MAX_VISIBLE_PAGES - 1)
        .max(1);
    let start = current.saturating_sub(half).clamp(1, latest_start);
    let end = (start + MAX_VISIBLE_PAGES - 1).min(total_pages);
    (start..=end).collect()
}

/// Number of pages needed for `total_items` rows of `page_size` each.
#[must_use]
pub fn total_pages(total_items: u64, page_size: u32) -> u32 {
    let page_size = u64::from(page_size.max(1));
    u32::try_from(total_items.div_ceil(page_size)).unwrap_or(u32::MAX)
}

/// Total row count from a `Content-Range` header such as `0-9/42`.
///
/// Returns `None` when the backend did not count (`0-9/*`) or the header is
/// malformed.
#[must_use]
pub fn parse_content_range_total(header: &str) -> Option<u64> {
    let (_, total) = header.trim().rsplit_once('/')?;
    total.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_page_hides_the_control() {
        assert!(!PaginationState::new(1, 0).is_visible());
        assert!(!PaginationState::new(1, 1).is_visible());
        assert!(PaginationState::new(1, 2).is_visible());
    }

    #[test]
    fn window_never_exceeds_five_and_contains_current() {
        for total in 1..=12 {
            for current in 1..=total {
                let window = page_window(current, total);
                assert!(window.len() <= MAX_VISIBLE_PAGES as usize);
                assert!(window.contains(&current), "{current} of {total}");
                assert!(window.iter().all(|page| (1..=total).contains(page)));
                assert!(window.windows(2).all(|pair| pair[1] == pair[0] + 1));
            }
        }
    }

    #[test]
    fn window_centres_when_possible() {
        assert_eq!(page_window(6, 10), vec![4, 5, 6, 7, 8]);
    }

    #[test]
    fn window_shifts_at_boundaries() {
        assert_eq!(page_window(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(2, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(10, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(9, 10), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn short_listings_show_every_page() {
        assert_eq!(page_window(2, 3), vec![1, 2, 3]);
        assert_eq!(page_window(1, 1), vec![1]);
        assert!(page_window(1, 0).is_empty());
    }

    #[test]
    fn out_of_range_current_is_clamped() {
        assert_eq!(page_window(0, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(40, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(PaginationState::new(9, 3).current_page(), 3);
        assert_eq!(PaginationState::new(0, 3).current_page(), 1);
        assert_eq!(PaginationState::new(4, 0).current_page(), 1);
    }

    #[test]
    fn previous_on_first_page_is_a_no_op() {
        let state = PaginationState::new(1, 5);
        assert_eq!(state.previous(false), state);
    }

    #[test]
    fn next_on_last_page_is_a_no_op() {
        let state = PaginationState::new(5, 5);
        assert_eq!(state.next(false), state);
    }

    #[test]
    fn navigation_is_frozen_while_loading() {
        let state = PaginationState::new(3, 5);
        assert_eq!(state.next(true), state);
        assert_eq!(state.previous(true), state);
        assert_eq!(state.jump(5, true), state);
    }

    #[test]
    fn navigation_moves_within_range() {
        let state = PaginationState::new(3, 5);
        assert_eq!(state.next(false).current_page(), 4);
        assert_eq!(state.previous(false).current_page(), 2);
        assert_eq!(state.jump(9, false).current_page(), 5);
    }

    #[test]
    fn shrinking_result_set_pulls_current_page_back() {
        let state = PaginationState::new(4, 4).with_total_pages(3);
        assert_eq!(state.current_page(), 3);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn content_range_total() {
        assert_eq!(parse_content_range_total("0-9/42"), Some(42));
        assert_eq!(parse_content_range_total("*/0"), Some(0));
        assert_eq!(parse_content_range_total("0-9/*"), None);
        assert_eq!(parse_content_range_total("garbage"), None);
    }
}
