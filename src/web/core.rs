use crate::completion::CompletionService;
use crate::explorer::{Explorer, SearchEvent, SearchResult, DEFAULT_CENTER};
use crate::utils::geojson::GeoJsonFeatureCollection;
use crate::web::templates::base::base_template;
use crate::web::templates::components::{
    error_section, map_section, results_section, sidebar_section, status_section,
};
use anyhow::Result;
use axum::{
    self,
    extract::{Query, State},
    response::sse::{Event, KeepAlive, Sse},
    routing::get,
    Json, Router,
};
use futures::stream::{self, Stream, StreamExt};
use maud::{html, Markup, PreEscaped};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use std::{convert::Infallible, time::Duration};
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

pub fn router<T>(explorer: Explorer<T>) -> Router
where
    T: CompletionService + 'static,
{
    Router::new()
        .route("/", get(landing::<T>))
        .route("/search", get(search_sse::<T>))
        .route("/api/search", get(search_json::<T>))
        .with_state(Arc::new(explorer))
}

pub async fn start_server<T>(explorer: Explorer<T>, port: u16) -> Result<()>
where
    T: CompletionService + 'static,
{
    let app = router(explorer);
    let address = SocketAddr::from(([0, 0, 0, 0, 0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(%address, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn search_json<T>(
    State(explorer): State<Arc<Explorer<T>>>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResult>
where
    T: CompletionService + 'static,
{
    let query = params.q.unwrap_or_default();
    Json(explorer.search(&query, |_, _| {}).await)
}

async fn search_sse<T>(
    State(explorer): State<Arc<Explorer<T>>>,
    Query(params): Query<SearchParams>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>>
where
    T: CompletionService + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();
    let query = params.q.unwrap_or_default();

    tokio::spawn(async move {
        explorer
            .search(&query, |event, state| {
                // The page may have gone away; the search still completes.
                let _ = tx.send(sse_events(event, state));
            })
            .await;
    });

    let stream = UnboundedReceiverStream::new(rx)
        .flat_map(stream::iter)
        .chain(stream::once(async {
            Event::default().data("done").event("close")
        }))
        .map(Ok);

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(1))
            .text("keep-alive-text"),
    )
}

fn sse_events(event: &SearchEvent, state: &SearchResult) -> Vec<Event> {
    match event {
        SearchEvent::Loading { .. } => vec![
            Event::default()
                .data(status_section(state).into_string())
                .event("loading"),
            Event::default()
                .data(error_section(state).into_string())
                .event("alert"),
            Event::default()
                .data(results_section(state).into_string())
                .event("list"),
            Event::default().data(markers_json(state)).event("markers"),
        ],
        SearchEvent::Centered(center) => vec![Event::default()
            .data(center_json(center.latitude, center.longitude))
            .event("center")],
        SearchEvent::Listed(_) => vec![
            Event::default()
                .data(status_section(state).into_string())
                .event("loading"),
            Event::default()
                .data(results_section(state).into_string())
                .event("list"),
            Event::default().data(markers_json(state)).event("markers"),
        ],
        SearchEvent::Failed { .. } => vec![
            Event::default()
                .data(status_section(state).into_string())
                .event("loading"),
            Event::default()
                .data(error_section(state).into_string())
                .event("alert"),
            Event::default()
                .data(results_section(state).into_string())
                .event("list"),
            Event::default()
                .data(center_json(DEFAULT_CENTER.latitude, DEFAULT_CENTER.longitude))
                .event("center"),
            Event::default().data(markers_json(state)).event("markers"),
        ],
        SearchEvent::Rejected { .. } => vec![Event::default()
            .data(error_section(state).into_string())
            .event("alert")],
    }
}

fn center_json(latitude: f64, longitude: f64) -> String {
    serde_json::to_string(&[latitude, longitude]).unwrap_or_else(|_| "[]".to_string())
}

fn markers_json(state: &SearchResult) -> String {
    let collection = GeoJsonFeatureCollection::from(state.pois.as_slice());
    serde_json::to_string(&collection).unwrap_or_else(|_| "{}".to_string())
}

async fn landing<T>(
    State(explorer): State<Arc<Explorer<T>>>,
    Query(params): Query<SearchParams>,
) -> Markup
where
    T: CompletionService + 'static,
{
    // Without JavaScript the form submits here and the page renders the
    // finished search.
    let result = match params.q {
        Some(query) => explorer.search(&query, |_, _| {}).await,
        None => SearchResult::default(),
    };

    base_template(&html! {
        div.layout {
            (sidebar_section(&result))
            (map_section())
        }
        (map_javascript(&result))
    })
}

fn map_javascript(result: &SearchResult) -> Markup {
    html! {
        script {
            (PreEscaped(format!(
                "let initialCenter = {};
                let initialMarkers = {};",
                center_json(result.center.latitude, result.center.longitude),
                markers_json(result).replace("</", "<\\/")
            )))
            (PreEscaped(include_str!("js/map-init.js")))
            (PreEscaped(include_str!("js/update-functions.js")))
            (PreEscaped(include_str!("js/event-source.js")))
        }
    }
}
