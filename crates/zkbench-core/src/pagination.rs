use std::ops::Range;

/// Records shown per page. Not configurable.
pub const PAGE_SIZE: usize = 10;

/// Pages kept on each side of the current page before the pager collapses
/// the rest behind a jump item.
const PAGE_BUFFER: usize = 2;

/// Pages skipped by a jump item.
const JUMP_STEP: usize = 5;

/// Number of pages needed for `total` records.
pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE)
}

/// The pager is only shown for a loaded, non-empty source.
pub fn is_visible<T>(source: Option<&[T]>) -> bool {
    source.is_some_and(|records| !records.is_empty())
}

/// Current-page state of a paginated table. Starts on page 1 and only changes
/// through [`Pagination::set_page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new()
    }
}

impl Pagination {
    pub fn new() -> Self {
        Self { page: 1 }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_page(&mut self, page: usize) {
        tracing::debug!(from = self.page, to = page, "page changed");
        self.page = page;
    }

    /// Index range of the current page within a list of `len` records.
    /// Pages outside `1..=page_count(len)` give an empty range.
    pub fn range(&self, len: usize) -> Range<usize> {
        page_range(self.page, len)
    }

    pub fn slice<'a, T>(&self, records: &'a [T]) -> &'a [T] {
        &records[self.range(records.len())]
    }
}

/// Whether `page` is one of the `page_count(len)` pages of a list.
pub fn in_range(page: usize, len: usize) -> bool {
    (1..=page_count(len)).contains(&page)
}

/// `[(page - 1) * PAGE_SIZE, page * PAGE_SIZE)` clamped to `len`.
pub fn page_range(page: usize, len: usize) -> Range<usize> {
    if page == 0 {
        return 0..0;
    }
    let start = (page - 1).saturating_mul(PAGE_SIZE).min(len);
    let end = page.saturating_mul(PAGE_SIZE).min(len);
    start..end
}

/// One button in the pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    /// Ellipsis before the window; clicking moves back to the target page.
    JumpPrev(usize),
    /// Ellipsis after the window; clicking moves forward to the target page.
    JumpNext(usize),
}

impl PageItem {
    pub fn target(&self) -> usize {
        match *self {
            PageItem::Page(p) | PageItem::JumpPrev(p) | PageItem::JumpNext(p) => p,
        }
    }
}

/// Page buttons for `current` out of `pages`.
///
/// Small page counts list every page. Larger ones show a window of two pages
/// either side of the current one (five at the edges), the first and last
/// page, and jump items for the collapsed ranges.
pub fn pager_items(current: usize, pages: usize) -> Vec<PageItem> {
    if pages == 0 {
        return Vec::new();
    }
    if pages <= 3 + PAGE_BUFFER * 2 {
        return (1..=pages).map(PageItem::Page).collect();
    }

    let current = current.clamp(1, pages);
    let mut left = current.saturating_sub(PAGE_BUFFER).max(1);
    let mut right = (current + PAGE_BUFFER).min(pages);
    if current - 1 <= PAGE_BUFFER {
        right = 1 + PAGE_BUFFER * 2;
    }
    if pages - current <= PAGE_BUFFER {
        left = pages - PAGE_BUFFER * 2;
    }

    let mut items: Vec<PageItem> = (left..=right).map(PageItem::Page).collect();

    if current - 1 >= PAGE_BUFFER * 2 && current != 1 + 2 {
        let target = current.saturating_sub(JUMP_STEP).max(1);
        items.insert(0, PageItem::JumpPrev(target));
    }
    if pages - current >= PAGE_BUFFER * 2 && current != pages - 2 {
        let target = (current + JUMP_STEP).min(pages);
        items.push(PageItem::JumpNext(target));
    }
    if left != 1 {
        items.insert(0, PageItem::Page(1));
    }
    if right != pages {
        items.push(PageItem::Page(pages));
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::PageItem::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0), 0);
        assert_eq!(page_count(1), 1);
        assert_eq!(page_count(10), 1);
        assert_eq!(page_count(11), 2);
        assert_eq!(page_count(12), 2);
        assert_eq!(page_count(100), 10);
    }

    #[test]
    fn test_rows_per_page() {
        for n in [0usize, 1, 9, 10, 11, 25, 30] {
            let records: Vec<usize> = (0..n).collect();
            let pages = page_count(n);
            for p in 1..=pages {
                let mut pagination = Pagination::new();
                pagination.set_page(p);
                let expected = PAGE_SIZE.min(n - PAGE_SIZE * (p - 1));
                assert_eq!(pagination.slice(&records).len(), expected, "n={n} p={p}");
            }

            let mut pagination = Pagination::new();
            pagination.set_page(pages + 1);
            assert!(pagination.slice(&records).is_empty());
            pagination.set_page(0);
            assert!(pagination.slice(&records).is_empty());
        }
    }

    #[test]
    fn test_twelve_records() {
        let records: Vec<u32> = (1..=12).collect();
        let mut pagination = Pagination::new();
        assert_eq!(pagination.page(), 1);
        assert_eq!(pagination.slice(&records), &records[..10]);
        assert_eq!(pagination.slice(&records).first(), Some(&1));

        pagination.set_page(2);
        assert_eq!(pagination.slice(&records), &records[10..]);
        assert_eq!(pagination.slice(&records).len(), 2);
        assert_eq!(records.len(), 12);
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        assert_eq!(page_range(usize::MAX, 5), 5..5);
    }

    #[test]
    fn test_in_range() {
        assert!(in_range(1, 12));
        assert!(in_range(2, 12));
        assert!(!in_range(3, 12));
        assert!(!in_range(0, 12));
        assert!(!in_range(1, 0));
    }

    #[test]
    fn test_visibility() {
        assert!(!is_visible::<u8>(None));
        assert!(!is_visible::<u8>(Some(&[][..])));
        assert!(is_visible(Some(&[1u8][..])));
    }

    #[test]
    fn test_pager_small_lists_all_pages() {
        assert_eq!(pager_items(1, 0), vec![]);
        assert_eq!(pager_items(1, 2), vec![Page(1), Page(2)]);
        assert_eq!(
            pager_items(4, 7),
            (1..=7).map(Page).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_pager_start() {
        assert_eq!(
            pager_items(1, 20),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), JumpNext(6), Page(20)]
        );
        assert_eq!(
            pager_items(4, 20),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), JumpNext(9), Page(20)]
        );
    }

    #[test]
    fn test_pager_middle() {
        assert_eq!(
            pager_items(10, 20),
            vec![
                Page(1),
                JumpPrev(5),
                Page(8),
                Page(9),
                Page(10),
                Page(11),
                Page(12),
                JumpNext(15),
                Page(20)
            ]
        );
    }

    #[test]
    fn test_pager_end() {
        assert_eq!(
            pager_items(20, 20),
            vec![Page(1), JumpPrev(15), Page(16), Page(17), Page(18), Page(19), Page(20)]
        );
        assert_eq!(
            pager_items(18, 20),
            vec![Page(1), JumpPrev(13), Page(16), Page(17), Page(18), Page(19), Page(20)]
        );
    }

    #[test]
    fn test_pager_clamps_current() {
        assert_eq!(pager_items(99, 20), pager_items(20, 20));
        assert_eq!(pager_items(0, 20), pager_items(1, 20));
    }
}
