pub mod classify;
pub mod error;
pub mod lister;
pub mod payload;
pub mod resolver;
pub mod schema;
pub mod search;

use crate::completion::CompletionService;

pub use error::{ExplorerError, Shape};
pub use search::{SearchEvent, SearchResult, DEFAULT_CENTER};

/// Resolves place names and lists nearby points of interest through an
/// injected completion provider.
pub struct Explorer<T>
where
    T: CompletionService,
{
    pub provider: T,
    pub model: String,
}

impl<T> Explorer<T>
where
    T: CompletionService,
{
    pub fn new(provider: T, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }
}
