//! Page slicing of sorted query results

use serde::Serialize;

/// One page of a result list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// 1-based page number
    pub current: usize,
    pub per_page: usize,
    pub total_pages: usize,
    /// Number of items across all pages
    pub total: usize,
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

/// Cut page `page` (1-based) of `per_page` items out of `items`
///
/// Page 0 and pages past the end are empty.
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Paginated<T> {
    let per_page = per_page.max(1);
    let total = items.len();
    let total_pages = total.div_ceil(per_page);

    let page_items = if page == 0 || page > total_pages {
        Vec::new()
    } else {
        items
            .into_iter()
            .skip((page - 1) * per_page)
            .take(per_page)
            .collect()
    };

    Paginated {
        items: page_items,
        current: page,
        per_page,
        total_pages,
        total,
        prev: (page > 1 && page <= total_pages).then(|| page - 1),
        next: (page >= 1 && page < total_pages).then(|| page + 1),
    }
}
