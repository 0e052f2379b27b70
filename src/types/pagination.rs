//! Pagination types for list endpoints.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::domain::SortDirection;

/// Raw list query parameters as they arrive on the wire.
///
/// Every field is kept as a string so bad values fall back to defaults
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// 0-indexed page number
    pub page: Option<String>,
    /// Page size (default 10, max 100)
    pub limit: Option<String>,
    /// `asc` or `desc`
    pub sort: Option<String>,
}

/// Normalized pagination request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
    pub sort: Option<SortDirection>,
}

impl PageRequest {
    /// Normalize raw query values.
    ///
    /// A missing, unparsable or negative page becomes 0. A missing,
    /// unparsable or zero limit becomes the default size; larger limits are
    /// capped. Unknown sort values fall back to the repository default.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>, sort: Option<&str>) -> Self {
        let page = page
            .and_then(|p| p.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_PAGE_NUMBER);

        let limit = match limit.and_then(|l| l.trim().parse::<u64>().ok()) {
            Some(0) | None => DEFAULT_PAGE_SIZE,
            Some(l) => l.min(MAX_PAGE_SIZE),
        };

        Self {
            page,
            limit,
            sort: sort.and_then(SortDirection::parse),
        }
    }
}

impl From<&ListQuery> for PageRequest {
    fn from(query: &ListQuery) -> Self {
        Self::from_raw(
            query.page.as_deref(),
            query.limit.as_deref(),
            query.sort.as_deref(),
        )
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::from_raw(None, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let req = PageRequest::default();
        assert_eq!(req.page, 0);
        assert_eq!(req.limit, 10);
        assert_eq!(req.sort, None);
    }

    #[test]
    fn test_parses_valid_values() {
        let req = PageRequest::from_raw(Some("2"), Some("5"), Some("DESC"));
        assert_eq!(req.page, 2);
        assert_eq!(req.limit, 5);
        assert_eq!(req.sort, Some(SortDirection::Desc));
    }

    #[test]
    fn test_bad_page_falls_back_to_zero() {
        assert_eq!(PageRequest::from_raw(Some("abc"), None, None).page, 0);
        assert_eq!(PageRequest::from_raw(Some("-3"), None, None).page, 0);
        assert_eq!(PageRequest::from_raw(Some(""), None, None).page, 0);
    }

    #[test]
    fn test_huge_page_is_kept_as_is() {
        let req = PageRequest::from_raw(Some("18446744073709551615"), Some("10"), None);
        assert_eq!(req.page, u64::MAX);
        assert_eq!(req.limit, 10);
    }

    #[test]
    fn test_bad_or_zero_limit_falls_back_to_default() {
        assert_eq!(PageRequest::from_raw(None, Some("x"), None).limit, 10);
        assert_eq!(PageRequest::from_raw(None, Some("0"), None).limit, 10);
        assert_eq!(PageRequest::from_raw(None, Some("-1"), None).limit, 10);
    }

    #[test]
    fn test_limit_is_capped() {
        assert_eq!(PageRequest::from_raw(None, Some("5000"), None).limit, 100);
    }

    #[test]
    fn test_unknown_sort_uses_default_ordering() {
        assert_eq!(PageRequest::from_raw(None, None, Some("sideways")).sort, None);
        assert_eq!(
            PageRequest::from_raw(None, None, Some("asc")).sort,
            Some(SortDirection::Asc)
        );
    }

    #[test]
    fn test_from_query() {
        let query = ListQuery {
            page: Some("1".to_string()),
            limit: Some("20".to_string()),
            sort: None,
        };
        let req = PageRequest::from(&query);
        assert_eq!((req.page, req.limit), (1, 20));
    }
}
