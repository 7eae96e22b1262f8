//! Catalog engine: product sources, timers and effect execution.
mod decode;
mod engine;
mod fetch;
mod persist;
mod timer;
mod types;

pub use decode::decode_products;
pub use engine::EngineHandle;
pub use fetch::{FetchSettings, FileProductSource, ProductSource, ReqwestProductSource};
pub use persist::{LocationStore, PersistError};
pub use types::{EngineEvent, FailureKind, FetchError, ProductRecord, RequestId, TimerId};
