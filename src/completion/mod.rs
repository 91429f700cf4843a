pub mod core;
pub mod gemini;
#[cfg(test)]
pub(crate) mod mock;

pub use self::core::{CompletionRequest, CompletionService, TransportError};
pub use gemini::Gemini;
