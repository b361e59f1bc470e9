/// Results shown per page.
pub const PAGE_SIZE: usize = 20;

/// Number of pages needed for `count` results (0 when there are none).
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE)
}

/// Clamp a 1-based page number into `[1, total_pages]`. With no results the
/// only valid page is 1.
pub fn clamp_page(page: usize, count: usize) -> usize {
    page.clamp(1, total_pages(count).max(1))
}

/// The `page`-th window of `items`; `page` must already be clamped.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let start = (page.saturating_sub(1) * PAGE_SIZE).min(items.len());
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}
