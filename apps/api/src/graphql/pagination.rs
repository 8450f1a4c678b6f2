//! Page-number pagination shared by every list query
//!
//! A list query takes `page`, `search` and `limit`. [`PageRequest`] turns the
//! raw arguments into a normalized request, [`PageWindow`] is the SQL slice it
//! covers, and [`PageResult`] carries the slice plus its metadata.
//!
//! Rules:
//! - `page` absent or below 1 means page 1.
//! - `limit` omitted means [`DEFAULT_PAGE_SIZE`]; an explicit `null` or a
//!   non-positive value means the whole collection as a single page.
//! - `pages` is `ceil(count / limit)` but never less than 1.
//! - Pages past the end are empty, never an error.

use async_graphql::{MaybeUndefined, OutputType, SimpleObject};

use super::types::{Course, Department, Employee, Employer, Grade, Payroll, Title};

/// Page size used when the `limit` argument is omitted
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Requested page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLimit {
    /// At most this many items per page (always positive)
    Limited(i64),
    /// Everything on one page
    All,
}

/// A normalized page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-indexed page number, at least 1
    pub page: i64,
    pub limit: PageLimit,
}

/// Rows covered by a page request, for `LIMIT`/`OFFSET`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: i64,
    /// `None` means no limit
    pub limit: Option<i64>,
}

impl PageRequest {
    pub fn new(page: i64, limit: PageLimit) -> Self {
        let limit = match limit {
            PageLimit::Limited(n) if n > 0 => PageLimit::Limited(n),
            _ => PageLimit::All,
        };
        Self {
            page: page.max(1),
            limit,
        }
    }

    /// Build a request from GraphQL arguments
    pub fn from_args(page: Option<i32>, limit: MaybeUndefined<i32>) -> Self {
        let limit = match limit {
            MaybeUndefined::Undefined => PageLimit::Limited(DEFAULT_PAGE_SIZE),
            MaybeUndefined::Null => PageLimit::All,
            MaybeUndefined::Value(n) => PageLimit::Limited(i64::from(n)),
        };
        Self::new(page.map(i64::from).unwrap_or(1), limit)
    }

    /// The slice of the ordered collection this page covers
    pub fn window(&self) -> PageWindow {
        match self.limit {
            PageLimit::Limited(limit) => PageWindow {
                offset: (self.page - 1).saturating_mul(limit),
                limit: Some(limit),
            },
            PageLimit::All if self.page == 1 => PageWindow {
                offset: 0,
                limit: None,
            },
            // The single page has already been passed
            PageLimit::All => PageWindow {
                offset: 0,
                limit: Some(0),
            },
        }
    }

    /// Number of pages for a collection of `count` items
    pub fn total_pages(&self, count: i64) -> i64 {
        match self.limit {
            PageLimit::Limited(limit) if count > 0 && limit > 0 => {
                // Both positive, so the quotient fits back into i64
                (count as u64).div_ceil(limit as u64) as i64
            }
            _ => 1,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, PageLimit::Limited(DEFAULT_PAGE_SIZE))
    }
}

/// One page of a collection
#[derive(Debug, Clone, SimpleObject)]
#[graphql(concrete(name = "EmployeePage", params(Employee)))]
#[graphql(concrete(name = "EmployerPage", params(Employer)))]
#[graphql(concrete(name = "CoursePage", params(Course)))]
#[graphql(concrete(name = "DepartmentPage", params(Department)))]
#[graphql(concrete(name = "TitlePage", params(Title)))]
#[graphql(concrete(name = "GradePage", params(Grade)))]
#[graphql(concrete(name = "PayrollPage", params(Payroll)))]
pub struct PageResult<T: OutputType> {
    /// Total number of matching items
    pub count: i64,
    /// Current page (1-indexed)
    pub page: i64,
    /// Total number of pages (at least 1)
    pub pages: i64,
    pub has_next: bool,
    pub has_prev: bool,
    pub items: Vec<T>,
}

impl<T: OutputType> PageResult<T> {
    /// Wrap an already sliced page with its metadata
    pub fn from_window(items: Vec<T>, count: i64, request: &PageRequest) -> Self {
        let pages = request.total_pages(count);
        Self {
            count,
            page: request.page,
            pages,
            has_next: request.page < pages,
            has_prev: request.page > 1,
            items,
        }
    }

    /// Convert every item, keeping the metadata
    pub fn map<U: OutputType>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
        PageResult {
            count: self.count,
            page: self.page,
            pages: self.pages,
            has_next: self.has_next,
            has_prev: self.has_prev,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

/// Paginate an in-memory collection that is already filtered and ordered
pub fn paginate<T: OutputType>(items: Vec<T>, request: &PageRequest) -> PageResult<T> {
    let count = items.len() as i64;
    let window = request.window();
    let offset = usize::try_from(window.offset).unwrap_or(usize::MAX);
    let slice: Vec<T> = match window.limit {
        Some(limit) => items
            .into_iter()
            .skip(offset)
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .collect(),
        None => items.into_iter().skip(offset).collect(),
    };
    PageResult::from_window(slice, count, request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn limited(page: i64, limit: i64) -> PageRequest {
        PageRequest::new(page, PageLimit::Limited(limit))
    }

    #[rstest]
    #[case(None, 1)]
    #[case(Some(0), 1)]
    #[case(Some(-4), 1)]
    #[case(Some(3), 3)]
    fn test_page_defaults_to_one(#[case] page: Option<i32>, #[case] expected: i64) {
        let request = PageRequest::from_args(page, MaybeUndefined::Undefined);
        assert_eq!(request.page, expected);
    }

    #[rstest]
    #[case(MaybeUndefined::Undefined, PageLimit::Limited(DEFAULT_PAGE_SIZE))]
    #[case(MaybeUndefined::Null, PageLimit::All)]
    #[case(MaybeUndefined::Value(0), PageLimit::All)]
    #[case(MaybeUndefined::Value(-2), PageLimit::All)]
    #[case(MaybeUndefined::Value(25), PageLimit::Limited(25))]
    fn test_limit_argument(#[case] limit: MaybeUndefined<i32>, #[case] expected: PageLimit) {
        assert_eq!(PageRequest::from_args(None, limit).limit, expected);
    }

    #[rstest]
    #[case(0, 10, 1)]
    #[case(1, 10, 1)]
    #[case(10, 10, 1)]
    #[case(11, 10, 2)]
    #[case(25, 10, 3)]
    #[case(i64::MAX, i64::MAX, 1)]
    #[case(i64::MAX, 2, i64::MAX / 2 + 1)]
    fn test_total_pages(#[case] count: i64, #[case] limit: i64, #[case] expected: i64) {
        assert_eq!(limited(1, limit).total_pages(count), expected);
    }

    #[test]
    fn test_window_offsets() {
        assert_eq!(
            limited(3, 10).window(),
            PageWindow {
                offset: 20,
                limit: Some(10)
            }
        );
        assert_eq!(
            PageRequest::new(1, PageLimit::All).window(),
            PageWindow {
                offset: 0,
                limit: None
            }
        );
        assert_eq!(PageRequest::new(2, PageLimit::All).window().limit, Some(0));
    }

    #[test]
    fn test_window_does_not_overflow() {
        let window = limited(i64::MAX, 10).window();
        assert_eq!(window.offset, i64::MAX);
    }

    #[test]
    fn test_twenty_five_items_ten_per_page() {
        let items: Vec<i32> = (1..=25).collect();

        let first = paginate(items.clone(), &limited(1, 10));
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.pages, 3);
        assert!(first.has_next);
        assert!(!first.has_prev);

        let last = paginate(items, &limited(3, 10));
        assert_eq!(last.items, vec![21, 22, 23, 24, 25]);
        assert!(!last.has_next);
        assert!(last.has_prev);
    }

    #[test]
    fn test_unlimited_is_single_page() {
        let items: Vec<i32> = (1..=25).collect();
        let request = PageRequest::from_args(None, MaybeUndefined::Null);

        let page = paginate(items, &request);
        assert_eq!(page.items.len(), 25);
        assert_eq!(page.pages, 1);
        assert!(!page.has_next);
        assert!(!page.has_prev);
    }

    #[test]
    fn test_empty_collection() {
        let page = paginate(Vec::<i32>::new(), &PageRequest::default());
        assert!(page.items.is_empty());
        assert_eq!(page.count, 0);
        assert_eq!(page.pages, 1);
        assert!(!page.has_next);
        assert!(!page.has_prev);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let items: Vec<i32> = (1..=5).collect();
        let page = paginate(items, &limited(4, 2));
        assert!(page.items.is_empty());
        assert_eq!(page.pages, 3);
        assert!(!page.has_next);
        assert!(page.has_prev);
    }

    #[rstest]
    #[case(0, 3)]
    #[case(1, 3)]
    #[case(7, 3)]
    #[case(9, 3)]
    #[case(10, 1)]
    #[case(23, 5)]
    fn test_pages_partition_collection(#[case] n: i32, #[case] limit: i64) {
        let items: Vec<i32> = (0..n).collect();
        let pages = limited(1, limit).total_pages(i64::from(n));

        let mut seen = Vec::new();
        for page in 1..=pages {
            let result = paginate(items.clone(), &limited(page, limit));
            assert!(result.items.len() as i64 <= limit);
            assert_eq!(result.has_next, page < pages);
            assert_eq!(result.has_prev, page > 1);
            seen.extend(result.items);
        }
        assert_eq!(seen, items);
    }

    #[test]
    fn test_map_keeps_metadata() {
        let page = paginate(vec![1, 2, 3], &limited(2, 2)).map(|n| n * 10);
        assert_eq!(page.items, vec![30]);
        assert_eq!(page.page, 2);
        assert_eq!(page.pages, 2);
    }
}
