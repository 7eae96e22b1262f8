use crate::{Product, RequestId, TimerId};

/// Result of a product fetch as seen by the page. Failure detail is not kept.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Loaded(Vec<Product>),
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Page was mounted; starts the initial fetch and normalizes the location.
    Mounted,
    /// Page is going away; releases the transition timer.
    Unmounted,
    /// User clicked Reload after a failed fetch.
    ReloadClicked,
    /// Data fetcher finished a request.
    ProductsFetched {
        request_id: RequestId,
        outcome: FetchOutcome,
    },
    /// Pagination widget emitted a page number (1-based).
    PageSelected(usize),
    /// Sort dropdown emitted an option value.
    SortSelected { value: String },
    /// Items-per-page dropdown emitted an option value.
    PerPageSelected { value: String },
    /// The search feature changed the `query` location parameter.
    SearchQueryChanged(String),
    /// A transition timer fired.
    TransitionElapsed { timer_id: TimerId },
}
