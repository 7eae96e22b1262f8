use crate::{derive_view, AppState, PerPage, Product, SortOption};

pub const PAGE_TITLE: &str = "Accessories";
pub const BREADCRUMBS: [&str; 2] = ["Home", PAGE_TITLE];
pub const SORT_OPTIONS: [&str; 3] = ["newest", "alphabetically", "cheapest"];
pub const PER_PAGE_OPTIONS: [&str; 4] = ["4", "8", "16", "all"];

#[derive(Debug, Clone, PartialEq)]
pub struct PaginationView {
    /// Number of filtered products being paged over.
    pub total: usize,
    pub current_page: usize,
    pub per_page: usize,
    pub page_count: usize,
}

/// Everything the presentation layer needs to draw the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageViewModel {
    pub title: &'static str,
    pub breadcrumbs: &'static [&'static str],
    pub show_loader: bool,
    pub show_error: bool,
    pub show_empty_notice: bool,
    pub show_listing: bool,
    /// Size of the fetched list, ignoring the search filter.
    pub total_models: usize,
    pub filtered_count: usize,
    pub sort_option: SortOption,
    pub per_page: PerPage,
    pub current_page: usize,
    pub query: String,
    pub products: Vec<Product>,
    pub is_changing_page: bool,
    pub pagination: Option<PaginationView>,
}

impl PageViewModel {
    pub(crate) fn build(state: &AppState) -> Self {
        let derived = derive_view(
            state.products(),
            state.sort_option(),
            state.query(),
            state.per_page(),
            state.current_page(),
        );
        let total_models = state.products().len();
        let filtered_count = derived.filtered.len();

        // Shown against the unfiltered count, like the product counter.
        let pagination = state
            .per_page()
            .count()
            .filter(|per_page| total_models > *per_page)
            .map(|per_page| PaginationView {
                total: filtered_count,
                current_page: state.current_page(),
                per_page,
                page_count: filtered_count.div_ceil(per_page),
            });

        Self {
            title: PAGE_TITLE,
            breadcrumbs: &BREADCRUMBS,
            show_loader: state.is_loading(),
            show_error: state.is_error(),
            show_empty_notice: !state.is_loading() && !state.is_error() && filtered_count == 0,
            show_listing: !state.is_loading() && filtered_count > 0,
            total_models,
            filtered_count,
            sort_option: state.sort_option().clone(),
            per_page: state.per_page(),
            current_page: state.current_page(),
            query: state.query().to_string(),
            products: derived.page,
            is_changing_page: state.is_changing_page(),
            pagination,
        }
    }
}
