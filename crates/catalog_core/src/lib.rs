//! Catalog core: pure page state machine, URL binding and view-model helpers.
mod derive;
mod effect;
mod msg;
mod product;
mod state;
mod update;
mod url_state;
mod view_model;

pub use derive::{collate, derive_view, filter_products, paginate, sort_products, DerivedView};
pub use effect::Effect;
pub use msg::{FetchOutcome, Msg};
pub use product::Product;
pub use state::{
    AppState, PerPage, RequestId, SortOption, StaleResponsePolicy, TimerId, Transition,
    DEFAULT_TRANSITION_DELAY,
};
pub use update::update;
pub use url_state::{decode, encode, search_query, UrlState};
pub use view_model::{
    PageViewModel, PaginationView, BREADCRUMBS, PAGE_TITLE, PER_PAGE_OPTIONS, SORT_OPTIONS,
};
