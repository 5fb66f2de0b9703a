//! Page envelopes.

use serde::{Deserialize, Serialize};

use crate::request::PageRequest;

/// Number of pages needed to show `total` records at `limit` per page.
///
/// Returns zero when there is nothing to show (or when `limit` is zero, which
/// a validated [`PageRequest`] never produces).
///
/// # Examples
/// ```
/// use pagination::total_pages;
///
/// assert_eq!(total_pages(0, 10), 0);
/// assert_eq!(total_pages(10, 10), 1);
/// assert_eq!(total_pages(11, 10), 2);
/// ```
#[must_use]
pub fn total_pages(total: u64, limit: u32) -> u64 {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(u64::from(limit))
}

/// One page of results plus the metadata clients need to page through the
/// rest.
///
/// `total` counts every record matching the query, ignoring pagination.
/// `page` and `limit` echo the request that produced the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    items: Vec<T>,
    total: u64,
    page: u32,
    limit: u32,
    total_pages: u64,
}

impl<T> Page<T> {
    /// Wrap a page that was already sliced by the data source.
    ///
    /// `items` is truncated to `request.limit()` should the source return
    /// more rows than asked for.
    #[must_use]
    pub fn from_parts(mut items: Vec<T>, total: u64, request: PageRequest) -> Self {
        items.truncate(limit_as_len(request));
        Self {
            items,
            total,
            page: request.page(),
            limit: request.limit(),
            total_pages: total_pages(total, request.limit()),
        }
    }

    /// Slice an ordered candidate list down to the requested page.
    ///
    /// Pages past the end yield an empty `items` list; they are not an error.
    #[must_use]
    pub fn from_candidates(candidates: Vec<T>, request: PageRequest) -> Self {
        let total = u64::try_from(candidates.len()).unwrap_or(u64::MAX);
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let items = candidates
            .into_iter()
            .skip(offset)
            .take(limit_as_len(request))
            .collect();
        Self::from_parts(items, total, request)
    }

    /// An envelope with no matches.
    #[must_use]
    pub fn empty(request: PageRequest) -> Self {
        Self::from_parts(Vec::new(), 0, request)
    }

    /// Items on this page, in result order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        self.items.as_slice()
    }

    /// Consume the envelope, returning the items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Records matching the query across all pages.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Echoed one-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Echoed page size.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// `ceil(total / limit)`, zero when `total` is zero.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.total_pages
    }

    /// Convert every item, keeping the pagination metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
        }
    }
}

fn limit_as_len(request: PageRequest) -> usize {
    usize::try_from(request.limit()).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn request(page: u32, limit: u32) -> PageRequest {
        PageRequest::new(page, limit).expect("valid request")
    }

    #[fixture]
    fn candidates() -> Vec<u32> {
        (1..=7).collect()
    }

    #[rstest]
    #[case(0, 1, 0)]
    #[case(0, 50, 0)]
    #[case(1, 10, 1)]
    #[case(10, 10, 1)]
    #[case(11, 10, 2)]
    #[case(2, 1, 2)]
    #[case(101, 50, 3)]
    fn total_pages_is_ceiling_division(#[case] total: u64, #[case] limit: u32, #[case] pages: u64) {
        assert_eq!(total_pages(total, limit), pages);
    }

    #[test]
    fn total_pages_is_zero_for_zero_limit() {
        assert_eq!(total_pages(5, 0), 0);
    }

    #[rstest]
    #[case(1, 3, vec![1, 2, 3])]
    #[case(2, 3, vec![4, 5, 6])]
    #[case(3, 3, vec![7])]
    #[case(4, 3, vec![])]
    #[case(1, 50, vec![1, 2, 3, 4, 5, 6, 7])]
    fn from_candidates_slices_requested_window(
        candidates: Vec<u32>,
        #[case] page: u32,
        #[case] limit: u32,
        #[case] expected: Vec<u32>,
    ) {
        let page = Page::from_candidates(candidates, request(page, limit));
        assert_eq!(page.items(), expected.as_slice());
        assert_eq!(page.total(), 7);
    }

    #[rstest]
    fn pages_past_the_end_keep_metadata(candidates: Vec<u32>) {
        let page = Page::from_candidates(candidates, request(9, 5));

        assert!(page.items().is_empty());
        assert_eq!(page.total(), 7);
        assert_eq!(page.page(), 9);
        assert_eq!(page.limit(), 5);
        assert_eq!(page.total_pages(), 2);
    }

    #[test]
    fn empty_page_has_no_pages() {
        let page: Page<u32> = Page::empty(request(1, 10));
        assert_eq!(page.total(), 0);
        assert_eq!(page.total_pages(), 0);
    }

    #[test]
    fn from_parts_truncates_oversized_pages() {
        let page = Page::from_parts(vec![1, 2, 3, 4], 40, request(2, 3));
        assert_eq!(page.items(), &[1, 2, 3]);
        assert_eq!(page.total_pages(), 14);
    }

    #[rstest]
    fn map_preserves_metadata(candidates: Vec<u32>) {
        let page = Page::from_candidates(candidates, request(2, 2)).map(|n| n * 10);
        assert_eq!(page.items(), &[30, 40]);
        assert_eq!(page.total(), 7);
        assert_eq!(page.total_pages(), 4);
    }

    #[test]
    fn serialises_with_camel_case_keys() {
        let page = Page::from_candidates(vec!["a"], request(1, 10));
        let value = serde_json::to_value(&page).expect("page serialises");
        assert_eq!(
            value,
            serde_json::json!({
                "items": ["a"],
                "total": 1,
                "page": 1,
                "limit": 10,
                "totalPages": 1
            })
        );
    }
}
