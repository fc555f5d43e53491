use crate::error::Outcome;

/// Events that drive generation-state transitions.
#[derive(Debug)]
pub enum GenerationIntent {
    /// A new generation request was triggered.
    Start,
    /// The in-flight request resolved with its outcome.
    Resolved(Outcome),
}
