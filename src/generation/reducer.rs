use crate::generation::intent::GenerationIntent;
use crate::generation::state::GenerationState;

/// Pure transition function for the generation state machine.
///
/// `Start` supersedes whatever state was current, including a prior
/// terminal state; a `Resolved` intent always applies, so when two
/// requests overlap the last resolution wins. Mutual exclusion of
/// overlapping requests is the presentation layer's job (it disables
/// the trigger while Loading), not this function's.
pub fn reduce(_state: GenerationState, intent: GenerationIntent) -> GenerationState {
    match intent {
        GenerationIntent::Start => GenerationState::Loading,
        GenerationIntent::Resolved(Ok(poem)) => GenerationState::Succeeded { poem },
        GenerationIntent::Resolved(Err(error)) => GenerationState::Failed {
            message: error.to_string(),
        },
    }
}
