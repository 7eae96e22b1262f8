use catalog_core::{Effect, FetchOutcome, Msg, Product};
use catalog_engine::{EngineEvent, EngineHandle, LocationStore, ProductRecord};
use catalog_logging::{catalog_debug, catalog_info, catalog_warn};

/// Executes core effects against the engine and the location store, and turns
/// engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
    store: LocationStore,
    location: String,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, store: LocationStore, location: impl Into<String>) -> Self {
        Self {
            engine,
            store,
            location: location.into(),
        }
    }

    /// Current location query string, without the leading `?`.
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchProducts { request_id } => {
                    catalog_info!("FetchProducts request_id={}", request_id);
                    self.engine.fetch(request_id);
                }
                Effect::ReplaceLocation { query } => {
                    catalog_info!("ReplaceLocation ?{}", query);
                    if let Err(err) = self.store.save(&query) {
                        catalog_warn!(
                            "Failed to persist location to {:?}: {}",
                            self.store.path(),
                            err
                        );
                    }
                    self.location = query;
                }
                Effect::ArmTransitionTimer { timer_id, delay } => {
                    catalog_debug!("ArmTransitionTimer timer_id={} delay={:?}", timer_id, delay);
                    self.engine.arm_timer(timer_id, delay);
                }
                Effect::CancelTransitionTimer { timer_id } => {
                    catalog_debug!("CancelTransitionTimer timer_id={}", timer_id);
                    self.engine.cancel_timer(timer_id);
                }
            }
        }
    }

    /// Drains whatever the engine has reported so far.
    pub fn poll(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            inbox.push(map_event(event));
        }
        inbox
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ProductsFetched { request_id, result } => {
            let outcome = match result {
                Ok(records) => {
                    FetchOutcome::Loaded(records.into_iter().map(map_product).collect())
                }
                Err(err) => {
                    catalog_warn!("Product fetch {} failed: {}", request_id, err);
                    FetchOutcome::Failed
                }
            };
            Msg::ProductsFetched {
                request_id,
                outcome,
            }
        }
        EngineEvent::TimerElapsed { timer_id } => Msg::TransitionElapsed { timer_id },
    }
}

fn map_product(record: ProductRecord) -> Product {
    Product {
        id: record.id,
        name: record.name,
        processor: record.processor,
        price_regular: record.price_regular,
        price_discount: record.price_discount,
        image: record.image,
    }
}
