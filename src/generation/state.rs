/// Phase of one generation request as seen by the presentation layer.
///
/// Transitions are monotonic for a single request
/// (Idle → Loading → Succeeded | Failed); a new request restarts the
/// sequence at Loading, superseding any prior terminal state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GenerationState {
    #[default]
    Idle,
    Loading,
    Succeeded {
        poem: String,
    },
    Failed {
        message: String,
    },
}

impl GenerationState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// A terminal state ends one request; only a new request moves on.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded { .. } | Self::Failed { .. })
    }
}
