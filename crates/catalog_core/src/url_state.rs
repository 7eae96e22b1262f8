//! Two-way binding between the location query string and the page's view settings.
//!
//! Only `sort`, `page` and `perPage` are written. Values equal to their default
//! (`newest`, `1`, `all`) are left out, so the default page has an empty query.
//! `query` belongs to the search feature and is only ever read here.

use url::form_urlencoded;

use crate::state::parse_count;
use crate::{PerPage, SortOption};

pub const SORT_KEY: &str = "sort";
pub const PAGE_KEY: &str = "page";
pub const PER_PAGE_KEY: &str = "perPage";
pub const QUERY_KEY: &str = "query";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlState {
    pub sort: SortOption,
    /// 1-based.
    pub page: usize,
    pub per_page: PerPage,
}

impl Default for UrlState {
    fn default() -> Self {
        Self {
            sort: SortOption::Newest,
            page: 1,
            per_page: PerPage::All,
        }
    }
}

/// Reads the view settings, falling back to the default for absent or unparseable values.
pub fn decode(location_query: &str) -> UrlState {
    let defaults = UrlState::default();

    let sort = first_value(location_query, SORT_KEY)
        .map(|value| SortOption::parse(&value))
        .unwrap_or(defaults.sort);
    let page = first_value(location_query, PAGE_KEY)
        .and_then(|value| parse_count(&value))
        .unwrap_or(defaults.page);
    let per_page = first_value(location_query, PER_PAGE_KEY)
        .and_then(|value| PerPage::parse(&value))
        .unwrap_or(defaults.per_page);

    UrlState {
        sort,
        page,
        per_page,
    }
}

/// Builds the query string from scratch. Returns an empty string for the defaults.
pub fn encode(state: &UrlState) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    if state.sort != SortOption::Newest {
        serializer.append_pair(SORT_KEY, state.sort.as_str());
    }
    if state.page != 1 {
        serializer.append_pair(PAGE_KEY, &state.page.to_string());
    }
    if let PerPage::Count(count) = state.per_page {
        serializer.append_pair(PER_PAGE_KEY, &count.to_string());
    }
    serializer.finish()
}

/// The free-text search filter, empty when absent.
pub fn search_query(location_query: &str) -> String {
    first_value(location_query, QUERY_KEY).unwrap_or_default()
}

fn first_value(location_query: &str, key: &str) -> Option<String> {
    let raw = location_query.strip_prefix('?').unwrap_or(location_query);
    form_urlencoded::parse(raw.as_bytes())
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.into_owned())
}
