//! Thai regional poem generation.
//!
//! The core flow lives in [`generation`]: a session runs one request
//! against a [`source::PoemSource`] (canned mock or remote
//! generative-language API) and a state holder publishes the request's
//! phase to observers. [`store`] persists favorites, history, and
//! saved keywords behind a minimal key-value contract.

pub mod clipboard;
pub mod config;
pub mod error;
pub mod generation;
pub mod prompt;
pub mod region;
pub mod source;
pub mod store;
