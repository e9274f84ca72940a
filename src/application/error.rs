use thiserror::Error;

/// Errors surfaced by the engine.
///
/// There is no transient or retryable kind: a run either starts with a
/// valid configuration or not at all, and state-machine misuse is a
/// programming error in the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Rejected configuration, reported before any simulation starts
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Engine method invoked out of state-machine order
    #[error("invalid engine state: {0}")]
    InvalidState(&'static str),
}
