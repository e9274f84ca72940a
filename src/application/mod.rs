mod engine;
mod error;

pub use engine::{Engine, EngineConfig, Termination};
pub use error::EngineError;
