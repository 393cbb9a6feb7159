// Recipe table pagination state machine
use serde::Serialize;

/// One entry of the compact pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PageItem {
    Page { number: u32, active: bool },
    Ellipsis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationController {
    current_page: u32,
    total_pages: u32,
}

impl Default for PaginationController {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
        }
    }
}

impl PaginationController {
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn prev(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    /// Advances without checking `total_pages`; the server's reply reconciles.
    pub fn next(&mut self) {
        self.current_page = self.current_page.saturating_add(1);
    }

    /// Whether `page` is one the window can show.
    pub fn contains(&self, page: u32) -> bool {
        (1..=self.total_pages).contains(&page)
    }

    pub fn jump_to(&mut self, page: u32) {
        self.current_page = page.max(1);
    }

    /// Records the server-reported page count. An empty result set reports
    /// zero pages, which still renders as a single page.
    pub fn set_total_pages(&mut self, total_pages: u32) {
        self.total_pages = total_pages.max(1);
    }

    pub fn prev_disabled(&self) -> bool {
        self.current_page <= 1
    }

    pub fn next_disabled(&self) -> bool {
        self.current_page >= self.total_pages
    }

    pub fn page_window(&self) -> Vec<PageItem> {
        page_window(self.current_page, self.total_pages)
    }
}

/// Page numbers to show around `current`: first, last, and the current page
/// with its neighbours, with an ellipsis wherever numbers are skipped.
pub fn page_window(current: u32, total: u32) -> Vec<PageItem> {
    let mut pages = vec![1];
    if current > 2 {
        pages.push(current - 1);
    }
    if current > 1 && current < total {
        pages.push(current);
    }
    if total > 1 && current < total - 1 {
        pages.push(current + 1);
    }
    if total > 1 {
        pages.push(total);
    }
    pages.sort_unstable();
    pages.dedup();

    let mut items = Vec::with_capacity(pages.len() * 2);
    let mut previous: Option<u32> = None;
    for number in pages {
        if previous.is_some_and(|p| number - p > 1) {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page {
            number,
            active: number == current,
        });
        previous = Some(number);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Renders a window as e.g. "1 … 4 [5] 6 … 12".
    fn render(items: &[PageItem]) -> String {
        items
            .iter()
            .map(|item| match item {
                PageItem::Page { number, active: true } => format!("[{}]", number),
                PageItem::Page { number, .. } => number.to_string(),
                PageItem::Ellipsis => "…".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_single_page_window() {
        assert_eq!(render(&page_window(1, 1)), "[1]");
        assert!(!page_window(1, 1).contains(&PageItem::Ellipsis));
    }

    #[test]
    fn test_middle_page_window() {
        assert_eq!(render(&page_window(5, 12)), "1 … 4 [5] 6 … 12");
    }

    #[test]
    fn test_edge_page_windows() {
        assert_eq!(render(&page_window(1, 12)), "[1] 2 … 12");
        assert_eq!(render(&page_window(2, 12)), "1 [2] 3 … 12");
        assert_eq!(render(&page_window(12, 12)), "1 … 11 [12]");
        assert_eq!(render(&page_window(11, 12)), "1 … 10 [11] 12");
        assert_eq!(render(&page_window(1, 2)), "[1] 2");
        assert_eq!(render(&page_window(2, 3)), "1 [2] 3");
    }

    #[test]
    fn test_window_beyond_last_page() {
        // an unclamped Next can leave current past the end
        assert_eq!(render(&page_window(13, 12)), "1 … 12");
    }

    #[test]
    fn test_window_is_sorted_and_unique() {
        for total in 1..=15 {
            for current in 1..=total {
                let numbers: Vec<u32> = page_window(current, total)
                    .into_iter()
                    .filter_map(|item| match item {
                        PageItem::Page { number, .. } => Some(number),
                        PageItem::Ellipsis => None,
                    })
                    .collect();
                assert!(
                    numbers.windows(2).all(|w| w[0] < w[1]),
                    "window for {}/{} not strictly ascending: {:?}",
                    current,
                    total,
                    numbers
                );
                assert_eq!(numbers.first(), Some(&1));
                assert_eq!(numbers.last(), Some(&total));
            }
        }
    }

    #[test]
    fn test_transitions() {
        let mut pagination = PaginationController::default();
        pagination.prev();
        assert_eq!(pagination.current_page(), 1);

        pagination.set_total_pages(3);
        pagination.next();
        pagination.next();
        assert_eq!(pagination.current_page(), 3);
        assert!(pagination.next_disabled());

        pagination.next();
        assert_eq!(pagination.current_page(), 4);

        pagination.jump_to(2);
        assert_eq!(pagination.current_page(), 2);
        assert!(!pagination.prev_disabled());
        assert!(!pagination.next_disabled());
    }

    #[test]
    fn test_zero_total_pages_clamps_to_one() {
        let mut pagination = PaginationController::default();
        pagination.set_total_pages(0);
        assert_eq!(pagination.total_pages(), 1);
        assert!(pagination.prev_disabled());
        assert!(pagination.next_disabled());
    }

    #[test]
    fn test_contains_only_known_pages() {
        let mut pagination = PaginationController::default();
        pagination.set_total_pages(12);
        assert!(pagination.contains(1));
        assert!(pagination.contains(12));
        assert!(!pagination.contains(0));
        assert!(!pagination.contains(13));
    }
}
