// Domain layer - cells, the toroidal universe, randomness
pub mod domain;

// Application layer - engine state machine and termination rules
pub mod application;

// Infrastructure layer - plain-text rendering
pub mod rendering;

// Re-exports for convenience
pub use application::{Engine, EngineConfig, EngineError, Termination};
pub use domain::{Cell, LifeRng, Universe};
