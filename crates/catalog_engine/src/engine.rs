use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use catalog_logging::catalog_debug;

use crate::fetch::ProductSource;
use crate::timer::TimerRegistry;
use crate::{EngineEvent, RequestId, TimerId};

enum EngineCommand {
    Fetch { request_id: RequestId },
    ArmTimer { timer_id: TimerId, delay: Duration },
    CancelTimer { timer_id: TimerId },
}

/// Runs fetches and transition timers on a background tokio runtime.
///
/// Dropping the handle stops the worker thread and cancels every armed timer.
/// Fetches still in flight are abandoned.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(source: Arc<dyn ProductSource>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("catalog-engine".to_string())
            .spawn(move || {
                let mut timers = TimerRegistry::default();
                while let Ok(command) = cmd_rx.recv() {
                    match command {
                        EngineCommand::Fetch { request_id } => {
                            let source = source.clone();
                            let event_tx = event_tx.clone();
                            runtime.spawn(async move {
                                handle_fetch(source.as_ref(), request_id, event_tx).await;
                            });
                        }
                        EngineCommand::ArmTimer { timer_id, delay } => {
                            timers.arm(runtime.handle(), timer_id, delay, event_tx.clone());
                        }
                        EngineCommand::CancelTimer { timer_id } => {
                            timers.cancel(timer_id);
                        }
                    }
                }
                catalog_debug!("Engine command channel closed; shutting down");
                timers.cancel_all();
                runtime.shutdown_background();
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn fetch(&self, request_id: RequestId) {
        let _ = self.cmd_tx.send(EngineCommand::Fetch { request_id });
    }

    /// Re-arming an id that is still pending restarts it.
    pub fn arm_timer(&self, timer_id: TimerId, delay: Duration) {
        let _ = self.cmd_tx.send(EngineCommand::ArmTimer { timer_id, delay });
    }

    pub fn cancel_timer(&self, timer_id: TimerId) {
        let _ = self.cmd_tx.send(EngineCommand::CancelTimer { timer_id });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_fetch(
    source: &dyn ProductSource,
    request_id: RequestId,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    catalog_debug!("Fetching products request_id={}", request_id);
    let result = source.fetch_products().await;
    let _ = event_tx.send(EngineEvent::ProductsFetched { request_id, result });
}
