//! The poem-generation flow.
//!
//! Unidirectional data flow from user input to the presentation layer:
//!
//! ```text
//! (region, keywords) ──→ Session ──→ PoemSource ──→ Outcome
//!                                                      │
//!            observers ←── watch channel ←── StateHolder
//! ```
//!
//! - [`GenerationState`]: the phase of one generation request
//! - [`GenerationIntent`]: events that drive transitions
//! - [`reduce`]: the pure transition function
//! - [`GenerationSession`]: one request/response cycle against a source
//! - [`StateHolder`]: single writer publishing the current state

mod holder;
mod intent;
mod reducer;
mod session;
mod state;

pub use holder::StateHolder;
pub use intent::GenerationIntent;
pub use reducer::reduce;
pub use session::GenerationSession;
pub use state::GenerationState;
