use catalog_logging::{catalog_debug, catalog_warn};

use crate::url_state::encode;
use crate::{AppState, Effect, Msg, PerPage, SortOption};

/// Pure update function: applies a message to state and returns any effects.
///
/// A `ReplaceLocation` effect is appended whenever the message changed the
/// sort option, the page size or the current page.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let url_before = state.url_state().clone();

    let mut effects = match msg {
        Msg::Mounted => {
            // Normalize whatever the location held on arrival.
            vec![
                state.begin_fetch(),
                Effect::ReplaceLocation {
                    query: encode(state.url_state()),
                },
            ]
        }
        Msg::Unmounted => state.release_transition().into_iter().collect(),
        Msg::ReloadClicked => vec![state.begin_fetch()],
        Msg::ProductsFetched {
            request_id,
            outcome,
        } => {
            state.apply_fetch(request_id, outcome);
            Vec::new()
        }
        Msg::PageSelected(page) => {
            if page == 0 {
                catalog_warn!("Ignoring page selection 0; pages start at 1");
                return (state, Vec::new());
            }
            let effects = state.begin_transition();
            state.set_page(page);
            effects
        }
        Msg::SortSelected { value } => {
            let effects = state.begin_transition();
            state.set_sort(SortOption::parse(&value));
            effects
        }
        Msg::PerPageSelected { value } => {
            let per_page = PerPage::parse(&value).unwrap_or_else(|| {
                catalog_warn!("Unrecognized per-page value {:?}; showing all", value);
                PerPage::All
            });
            let effects = state.begin_transition();
            state.set_per_page(per_page);
            effects
        }
        Msg::SearchQueryChanged(query) => {
            state.set_query(query);
            Vec::new()
        }
        Msg::TransitionElapsed { timer_id } => {
            if !state.finish_transition(timer_id) {
                catalog_debug!("Ignoring superseded transition timer {}", timer_id);
            }
            Vec::new()
        }
    };

    if state.url_state() != &url_before {
        effects.push(Effect::ReplaceLocation {
            query: encode(state.url_state()),
        });
    }

    (state, effects)
}
