//! Page selection for post listings

use serde::Serialize;

/// Splits `total` items into pages of `per_page`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    total: usize,
    per_page: usize,
}

/// One resolved page of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    /// 1-based page number
    pub number: usize,
    pub num_pages: usize,
    pub total: usize,
    pub per_page: usize,
}

impl Paginator {
    /// `per_page` of zero is treated as one
    pub fn new(total: usize, per_page: usize) -> Self {
        Paginator {
            total,
            per_page: per_page.max(1),
        }
    }

    /// Number of pages; an empty listing still has one (empty) page
    pub fn num_pages(&self) -> usize {
        if self.total == 0 {
            1
        } else {
            self.total.div_ceil(self.per_page)
        }
    }

    /// Resolve a requested page.
    ///
    /// Anything that is not an integer selects the first page; an integer
    /// outside `1..=num_pages` selects the last page.
    pub fn page(&self, requested: Option<&str>) -> Page {
        let num_pages = self.num_pages();
        let number = match requested.map(|r| r.trim().parse::<i64>()) {
            None | Some(Err(_)) => 1,
            Some(Ok(n)) if n >= 1 && (n as u64) <= num_pages as u64 => n as usize,
            Some(Ok(_)) => num_pages,
        };
        tracing::trace!(?requested, number, num_pages, "resolved page");

        Page {
            number,
            num_pages,
            total: self.total,
            per_page: self.per_page,
        }
    }
}

impl Page {
    /// Items to skip before this page
    pub fn offset(&self) -> usize {
        (self.number - 1) * self.per_page
    }

    pub fn limit(&self) -> usize {
        self.per_page
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn next_page_number(&self) -> Option<usize> {
        self.has_next().then_some(self.number + 1)
    }

    pub fn previous_page_number(&self) -> Option<usize> {
        self.has_previous().then_some(self.number - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_counts() {
        assert_eq!(Paginator::new(0, 3).num_pages(), 1);
        assert_eq!(Paginator::new(3, 3).num_pages(), 1);
        assert_eq!(Paginator::new(4, 3).num_pages(), 2);
        assert_eq!(Paginator::new(7, 3).num_pages(), 3);
    }

    #[test]
    fn test_valid_page() {
        let page = Paginator::new(7, 3).page(Some("2"));
        assert_eq!(page.number, 2);
        assert_eq!(page.offset(), 3);
        assert_eq!(page.limit(), 3);
        assert!(page.has_next());
        assert!(page.has_previous());
        assert_eq!(page.next_page_number(), Some(3));
        assert_eq!(page.previous_page_number(), Some(1));
    }

    #[test]
    fn test_non_integer_page_is_first() {
        let paginator = Paginator::new(7, 3);
        assert_eq!(paginator.page(Some("abc")).number, 1);
        assert_eq!(paginator.page(Some("1.5")).number, 1);
        assert_eq!(paginator.page(None).number, 1);
    }

    #[test]
    fn test_out_of_range_page_is_last() {
        let paginator = Paginator::new(7, 3);
        assert_eq!(paginator.page(Some("99")).number, 3);
        assert_eq!(paginator.page(Some("0")).number, 3);
        assert_eq!(paginator.page(Some("-1")).number, 3);

        let last = paginator.page(Some("3"));
        assert!(!last.has_next());
        assert_eq!(last.offset(), 6);
    }

    #[test]
    fn test_empty_listing_has_single_page() {
        let page = Paginator::new(0, 3).page(Some("5"));
        assert_eq!(page.number, 1);
        assert_eq!(page.num_pages, 1);
        assert_eq!(page.offset(), 0);
        assert!(!page.has_next());
        assert!(!page.has_previous());
    }
}
