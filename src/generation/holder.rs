use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::generation::intent::GenerationIntent;
use crate::generation::reducer::reduce;
use crate::generation::session::GenerationSession;
use crate::generation::state::GenerationState;

/// Single-writer container publishing the current generation state.
///
/// Observers subscribe to a watch channel; the holder is the only
/// writer, and each request produces exactly one terminal write after
/// the synchronous transition to Loading. Overlapping requests are not
/// mutually excluded here: they race and the last resolution wins.
/// Dropping the holder abandons any in-flight request along with the
/// runtime task that carries it.
pub struct StateHolder {
    session: Arc<GenerationSession>,
    tx: watch::Sender<GenerationState>,
}

impl StateHolder {
    pub fn new(session: GenerationSession) -> Self {
        let (tx, _rx) = watch::channel(GenerationState::Idle);
        Self {
            session: Arc::new(session),
            tx,
        }
    }

    /// Subscribe to state changes. Read-only; the receiver sees the
    /// current state immediately and every later transition.
    pub fn subscribe(&self) -> watch::Receiver<GenerationState> {
        self.tx.subscribe()
    }

    /// The state as of this call.
    pub fn current(&self) -> GenerationState {
        self.tx.borrow().clone()
    }

    /// Trigger one generation request.
    ///
    /// Publishes `Loading` synchronously before returning, then runs
    /// the session on the runtime; the completion publishes the single
    /// terminal state. The returned handle lets callers await
    /// completion; dropping it does not cancel the request.
    pub fn generate(&self, region_code: &str, keywords: &[String]) -> JoinHandle<()> {
        self.apply(GenerationIntent::Start);

        let session = Arc::clone(&self.session);
        let tx = self.tx.clone();
        let region = region_code.to_string();
        let keywords = keywords.to_vec();

        tokio::spawn(async move {
            let outcome = session.run(&region, &keywords).await;
            let current = tx.borrow().clone();
            tx.send_replace(reduce(current, GenerationIntent::Resolved(outcome)));
        })
    }

    fn apply(&self, intent: GenerationIntent) {
        let current = self.tx.borrow().clone();
        // send_replace publishes even when no subscriber is attached
        self.tx.send_replace(reduce(current, intent));
    }
}
