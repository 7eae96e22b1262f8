use std::fmt;
use std::time::Duration;

use catalog_logging::catalog_debug;

use crate::url_state::{self, UrlState};
use crate::view_model::PageViewModel;
use crate::{Effect, FetchOutcome, Product};

pub type RequestId = u64;
pub type TimerId = u64;

/// How long the "changing page" flag stays up after an interaction.
pub const DEFAULT_TRANSITION_DELAY: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortOption {
    #[default]
    Newest,
    Alphabetically,
    Cheapest,
    /// Any other value; kept verbatim and leaves the order untouched.
    Other(String),
}

impl SortOption {
    /// Empty text maps to the default, everything else is accepted.
    pub fn parse(value: &str) -> Self {
        match value {
            "" | "newest" => SortOption::Newest,
            "alphabetically" => SortOption::Alphabetically,
            "cheapest" => SortOption::Cheapest,
            other => SortOption::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SortOption::Newest => "newest",
            SortOption::Alphabetically => "alphabetically",
            SortOption::Cheapest => "cheapest",
            SortOption::Other(value) => value,
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PerPage {
    #[default]
    All,
    Count(usize),
}

impl PerPage {
    /// Returns `None` unless `value` is `all` or a whole number of at least 1.
    pub fn parse(value: &str) -> Option<Self> {
        if value.trim() == "all" {
            return Some(PerPage::All);
        }
        parse_count(value).map(PerPage::Count)
    }

    pub fn count(self) -> Option<usize> {
        match self {
            PerPage::All => None,
            PerPage::Count(count) => Some(count),
        }
    }
}

impl fmt::Display for PerPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerPage::All => f.write_str("all"),
            PerPage::Count(count) => write!(f, "{count}"),
        }
    }
}

/// A whole number of at least 1, surrounding whitespace ignored.
pub(crate) fn parse_count(value: &str) -> Option<usize> {
    value
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|count| *count >= 1)
}

/// Transition flag shown while the list is "changing".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transition {
    #[default]
    Idle,
    Transitioning { timer_id: TimerId },
}

/// What to do with a fetch reply that is not the most recent request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaleResponsePolicy {
    /// Drop replies for superseded requests.
    #[default]
    DiscardStale,
    /// Apply every reply in arrival order; the last one to land wins.
    LastWriteWins,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    products: Vec<Product>,
    is_loading: bool,
    is_error: bool,
    transition: Transition,
    query: String,
    url: UrlState,
    next_request_id: RequestId,
    latest_request: Option<RequestId>,
    next_timer_id: TimerId,
    stale_responses: StaleResponsePolicy,
    transition_delay: Duration,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_location("")
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the mount-time state from a location query string (leading `?` optional).
    pub fn from_location(location_query: &str) -> Self {
        Self {
            products: Vec::new(),
            is_loading: true,
            is_error: false,
            transition: Transition::Idle,
            query: url_state::search_query(location_query),
            url: url_state::decode(location_query),
            next_request_id: 1,
            latest_request: None,
            next_timer_id: 1,
            stale_responses: StaleResponsePolicy::default(),
            transition_delay: DEFAULT_TRANSITION_DELAY,
            dirty: true,
        }
    }

    pub fn with_stale_responses(mut self, policy: StaleResponsePolicy) -> Self {
        self.stale_responses = policy;
        self
    }

    pub fn with_transition_delay(mut self, delay: Duration) -> Self {
        self.transition_delay = delay;
        self
    }

    pub fn view(&self) -> PageViewModel {
        PageViewModel::build(self)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    pub fn is_changing_page(&self) -> bool {
        matches!(self.transition, Transition::Transitioning { .. })
    }

    pub fn transition(&self) -> Transition {
        self.transition
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn url_state(&self) -> &UrlState {
        &self.url
    }

    pub fn sort_option(&self) -> &SortOption {
        &self.url.sort
    }

    pub fn per_page(&self) -> PerPage {
        self.url.per_page
    }

    pub fn current_page(&self) -> usize {
        self.url.page
    }

    /// Returns whether the state changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn begin_fetch(&mut self) -> Effect {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.latest_request = Some(request_id);
        self.is_loading = true;
        self.is_error = false;
        self.mark_dirty();
        Effect::FetchProducts { request_id }
    }

    pub(crate) fn apply_fetch(&mut self, request_id: RequestId, outcome: FetchOutcome) -> bool {
        let is_latest = self.latest_request == Some(request_id);
        if !is_latest && self.stale_responses == StaleResponsePolicy::DiscardStale {
            catalog_debug!(
                "Discarding stale product response request_id={} latest={:?}",
                request_id,
                self.latest_request
            );
            return false;
        }

        match outcome {
            FetchOutcome::Loaded(products) => {
                catalog_debug!(
                    "Products loaded request_id={} count={}",
                    request_id,
                    products.len()
                );
                self.products = products;
            }
            FetchOutcome::Failed => {
                self.is_error = true;
            }
        }
        self.is_loading = false;
        self.mark_dirty();
        true
    }

    /// Raises the transition flag and returns the timer effects that keep it up.
    pub(crate) fn begin_transition(&mut self) -> Vec<Effect> {
        let timer_id = self.next_timer_id;
        self.next_timer_id += 1;

        let mut effects = Vec::with_capacity(2);
        if let Transition::Transitioning { timer_id: previous } = self.transition {
            effects.push(Effect::CancelTransitionTimer { timer_id: previous });
        }
        self.transition = Transition::Transitioning { timer_id };
        effects.push(Effect::ArmTransitionTimer {
            timer_id,
            delay: self.transition_delay,
        });
        self.mark_dirty();
        effects
    }

    pub(crate) fn finish_transition(&mut self, timer_id: TimerId) -> bool {
        match self.transition {
            Transition::Transitioning { timer_id: armed } if armed == timer_id => {
                self.transition = Transition::Idle;
                self.mark_dirty();
                true
            }
            _ => false,
        }
    }

    /// Drops any armed timer; used on unmount.
    pub(crate) fn release_transition(&mut self) -> Option<Effect> {
        match std::mem::take(&mut self.transition) {
            Transition::Transitioning { timer_id } => {
                self.mark_dirty();
                Some(Effect::CancelTransitionTimer { timer_id })
            }
            Transition::Idle => None,
        }
    }

    pub(crate) fn set_page(&mut self, page: usize) {
        self.url.page = page;
        self.mark_dirty();
    }

    pub(crate) fn set_sort(&mut self, sort: SortOption) {
        self.url.sort = sort;
        self.url.page = 1;
        self.mark_dirty();
    }

    pub(crate) fn set_per_page(&mut self, per_page: PerPage) {
        self.url.per_page = per_page;
        self.url.page = 1;
        self.mark_dirty();
    }

    pub(crate) fn set_query(&mut self, query: String) {
        if self.query != query {
            self.query = query;
            self.mark_dirty();
        }
    }
}
