use crate::completion::CompletionService;
use crate::explorer::{Explorer, ExplorerError};
use crate::utils::maptypes::{Coordinates, PointOfInterest};
use serde::{Deserialize, Serialize};

/// Da Nang. Shown before the first search and after any failed one.
pub const DEFAULT_CENTER: Coordinates = Coordinates::new(16.047079, 108.206230);

pub const EMPTY_QUERY_MESSAGE: &str = "Vui lòng nhập tên địa điểm.";

/// What the page shows: one of these is live at a time and every search
/// replaces it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub center: Coordinates,
    pub pois: Vec<PointOfInterest>,
    pub error: Option<String>,
    pub loading: bool,
    pub query: String,
}

impl Default for SearchResult {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            pois: vec![],
            error: None,
            loading: false,
            query: String::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SearchEvent {
    Loading { query: String },
    Centered(Coordinates),
    Listed(Vec<PointOfInterest>),
    Failed { message: String },
    /// The query was refused before any remote call; only the error changes.
    Rejected { message: String },
}

impl SearchResult {
    pub fn apply(&mut self, event: SearchEvent) {
        match event {
            SearchEvent::Loading { query } => {
                self.loading = true;
                self.error = None;
                self.pois.clear();
                self.query = query;
            }
            SearchEvent::Centered(center) => self.center = center,
            SearchEvent::Listed(pois) => {
                self.pois = pois;
                self.loading = false;
            }
            SearchEvent::Failed { message } => {
                self.error = Some(message);
                self.center = DEFAULT_CENTER;
                self.pois.clear();
                self.loading = false;
            }
            SearchEvent::Rejected { message } => self.error = Some(message),
        }
    }
}

impl<T> Explorer<T>
where
    T: CompletionService,
{
    /// Runs one search: resolve `query`, then list around the result.
    /// `notify` sees every event together with the state it produced.
    pub async fn search<F>(&self, query: &str, mut notify: F) -> SearchResult
    where
        F: FnMut(&SearchEvent, &SearchResult) + Send,
    {
        let mut result = SearchResult::default();
        let mut emit = |event: SearchEvent| {
            result.apply(event.clone());
            notify(&event, &result);
        };

        if query.trim().is_empty() {
            emit(SearchEvent::Rejected {
                message: EMPTY_QUERY_MESSAGE.to_string(),
            });
        } else {
            emit(SearchEvent::Loading {
                query: query.to_string(),
            });
            if let Err(err) = self.run(query, &mut emit).await {
                tracing::warn!(query, error = %err, "search failed");
                emit(SearchEvent::Failed {
                    message: err.to_string(),
                });
            }
        }

        result
    }

    async fn run<E>(&self, query: &str, emit: &mut E) -> Result<(), ExplorerError>
    where
        E: FnMut(SearchEvent) + Send,
    {
        let center = self.resolve(query).await?;
        emit(SearchEvent::Centered(center));

        let pois = self.list(center).await?;
        emit(SearchEvent::Listed(pois));
        Ok(())
    }
}
