use std::collections::HashMap;
use std::sync::mpsc;
use std::time::Duration;

use catalog_logging::catalog_trace;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

use crate::{EngineEvent, TimerId};

/// One-shot timers keyed by id. A timer's token is cancelled either by the
/// registry (cancel, re-arm, drop) or by the task itself once it has fired.
#[derive(Default)]
pub(crate) struct TimerRegistry {
    tokens: HashMap<TimerId, CancellationToken>,
}

impl TimerRegistry {
    pub(crate) fn arm(
        &mut self,
        runtime: &Handle,
        timer_id: TimerId,
        delay: Duration,
        event_tx: mpsc::Sender<EngineEvent>,
    ) {
        self.tokens.retain(|_, token| !token.is_cancelled());
        if let Some(previous) = self.tokens.remove(&timer_id) {
            previous.cancel();
        }

        let token = CancellationToken::new();
        let task_token = token.clone();
        runtime.spawn(async move {
            tokio::select! {
                _ = task_token.cancelled() => {
                    catalog_trace!("Timer {} cancelled", timer_id);
                }
                _ = tokio::time::sleep(delay) => {
                    task_token.cancel();
                    let _ = event_tx.send(EngineEvent::TimerElapsed { timer_id });
                }
            }
        });
        self.tokens.insert(timer_id, token);
    }

    /// Returns false when the timer was unknown or had already fired.
    pub(crate) fn cancel(&mut self, timer_id: TimerId) -> bool {
        match self.tokens.remove(&timer_id) {
            Some(token) if !token.is_cancelled() => {
                token.cancel();
                true
            }
            _ => false,
        }
    }

    pub(crate) fn cancel_all(&mut self) {
        for (_, token) in self.tokens.drain() {
            token.cancel();
        }
    }

    #[cfg(test)]
    pub(crate) fn pending(&self) -> usize {
        self.tokens
            .values()
            .filter(|token| !token.is_cancelled())
            .count()
    }
}

impl Drop for TimerRegistry {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
