use log::debug;

/// Number of pages needed to show `total` items at `page_size` items per page.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Clamp a 1-based page number to the valid range for `page_count` pages.
pub fn clamp_page(page: usize, page_count: usize) -> usize {
    page.clamp(1, page_count.max(1))
}

/// The 1-based `page` of `items`, empty when the page lies past the end.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    debug!("Paging items {}..{} of {}", start, end, items.len());
    &items[start..end]
}
