use serde::{Deserialize, Serialize};

/// Page metadata attached to every list response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    #[serde(default)]
    pub filtered_count: u64,
    #[serde(default)]
    pub total_count: u64,
}

impl Pagination {
    pub const DEFAULT_LIMIT: u64 = 20;

    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit,
            filtered_count: 0,
            total_count: 0,
        }
    }

    /// Number of pages needed to show `filtered_count` entries
    pub fn page_count(&self) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        self.filtered_count.div_ceil(self.limit)
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.page_count()
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 1
    }

    /// 1-based range of entries shown on this page, `None` when the page is empty
    pub fn shown_range(&self) -> Option<(u64, u64)> {
        let first = self.page.saturating_sub(1).saturating_mul(self.limit) + 1;
        let last = self.page.saturating_mul(self.limit).min(self.filtered_count);
        (first <= last).then_some((first, last))
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, Self::DEFAULT_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pagination() {
        let p = Pagination::default();
        assert_eq!(p.page, 1);
        assert_eq!(p.limit, 20);
        assert_eq!(p.page_count(), 0);
        assert!(!p.has_next_page());
    }

    #[test]
    fn test_page_count_rounds_up() {
        let p = Pagination {
            page: 1,
            limit: 20,
            filtered_count: 41,
            total_count: 50,
        };
        assert_eq!(p.page_count(), 3);
        assert!(p.has_next_page());
    }

    #[test]
    fn test_last_page_has_no_next() {
        let p = Pagination {
            page: 3,
            limit: 20,
            filtered_count: 41,
            total_count: 41,
        };
        assert!(!p.has_next_page());
        assert!(p.has_previous_page());
        assert_eq!(p.shown_range(), Some((41, 41)));
    }

    #[test]
    fn test_exact_multiple_of_limit() {
        let mut p = Pagination {
            page: 1,
            limit: 20,
            filtered_count: 40,
            total_count: 40,
        };
        assert_eq!(p.page_count(), 2);
        assert!(p.has_next_page());
        assert!(!p.has_previous_page());
        assert_eq!(p.shown_range(), Some((1, 20)));

        p.page = 2;
        assert!(!p.has_next_page());
        assert_eq!(p.shown_range(), Some((21, 40)));
    }

    #[test]
    fn test_empty_result_shows_nothing() {
        let p = Pagination::default();
        assert_eq!(p.shown_range(), None);
        assert!(!p.has_previous_page());
    }

    #[test]
    fn test_page_zero_is_clamped() {
        assert_eq!(Pagination::new(0, 10).page, 1);
    }

    #[test]
    fn test_missing_counts_deserialize_to_zero() {
        let p: Pagination = serde_json::from_str(r#"{"page":2,"limit":5}"#).unwrap();
        assert_eq!(p, Pagination::new(2, 5));
    }
}
