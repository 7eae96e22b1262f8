use std::time::Duration;

use crate::{RequestId, TimerId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Load the product list; the reply must carry the same `request_id`.
    FetchProducts { request_id: RequestId },
    /// Replace the location query string (no leading `?`).
    ReplaceLocation { query: String },
    /// Deliver `Msg::TransitionElapsed { timer_id }` after `delay`.
    ArmTransitionTimer { timer_id: TimerId, delay: Duration },
    /// Drop a previously armed timer without delivering it.
    CancelTransitionTimer { timer_id: TimerId },
}
