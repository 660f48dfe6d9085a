//! HTTP controller
//!
//! Serves every view as JSON. One directory and one session industry
//! filter are shared by all requests.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use startupview_domain::{DocumentStore, IndustryFilter, IndustryId, InvestorId, StartupId};
use startupview_usecase::{Directory, RetryTarget, ViewState};
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::dto::{FilterDto, IndustriesDto, InvestorDto, StartupDto, ViewBody};

pub struct AppState<S> {
    directory: Directory<S>,
    filter: Arc<RwLock<IndustryFilter>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            directory: self.directory.clone(),
            filter: Arc::clone(&self.filter),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StartupsQuery {
    industry: Option<String>,
}

/// Build the router with an empty session filter
pub fn router<S>(directory: Directory<S>) -> Router
where
    S: DocumentStore + Send + Sync + 'static,
{
    router_with_filter(directory, IndustryFilter::new())
}

/// Build the router starting from a given session filter
pub fn router_with_filter<S>(directory: Directory<S>, initial_filter: IndustryFilter) -> Router
where
    S: DocumentStore + Send + Sync + 'static,
{
    let state = AppState {
        directory,
        filter: Arc::new(RwLock::new(initial_filter)),
    };

    Router::new()
        .route("/api/industries", get(industries::<S>))
        .route("/api/startups", get(startups::<S>))
        .route("/api/startups/{id}", get(startup_detail::<S>))
        .route("/api/investors", get(investors::<S>))
        .route("/api/investors/{id}", get(investor_detail::<S>))
        .route("/api/filter", get(get_filter::<S>).delete(clear_filter::<S>))
        .route("/api/filter/{id}", post(toggle_filter::<S>))
        .with_state(state)
}

/// Bind `addr` and serve until the process stops
pub async fn serve<S>(directory: Directory<S>, addr: SocketAddr) -> std::io::Result<()>
where
    S: DocumentStore + Send + Sync + 'static,
{
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "serving startup directory");
    axum::serve(listener, router(directory)).await
}

fn render<T, D: Serialize>(state: ViewState<T>, f: impl FnOnce(T) -> D) -> Response {
    let (status, body) = ViewBody::from_state(state, f);
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(body)).into_response()
}

async fn industries<S>(State(state): State<AppState<S>>) -> Response
where
    S: DocumentStore + Send + Sync + 'static,
{
    let result = state.directory.list_industries().await;
    let filter = state.filter.read().await.clone();

    render(ViewState::from_list(result, RetryTarget::Reload), |list| {
        IndustriesDto::new(&list, &filter)
    })
}

async fn startups<S>(
    State(state): State<AppState<S>>,
    Query(query): Query<StartupsQuery>,
) -> Response
where
    S: DocumentStore + Send + Sync + 'static,
{
    let industry = match query.industry.filter(|id| !id.is_empty()) {
        Some(id) => Some(IndustryId::new(id)),
        None => state.filter.read().await.selected().cloned(),
    };
    debug!(industry = industry.as_ref().map(IndustryId::as_str), "startup listing requested");

    let result = state.directory.list_startups(industry.as_ref()).await;
    render(ViewState::from_list(result, RetryTarget::Reload), |list| {
        list.iter().map(StartupDto::from).collect::<Vec<_>>()
    })
}

async fn startup_detail<S>(State(state): State<AppState<S>>, Path(id): Path<String>) -> Response
where
    S: DocumentStore + Send + Sync + 'static,
{
    let result = state.directory.get_startup_detail(&StartupId::new(id)).await;
    render(ViewState::from_detail(result, RetryTarget::Home), |startup| {
        StartupDto::from(&startup)
    })
}

async fn investors<S>(State(state): State<AppState<S>>) -> Response
where
    S: DocumentStore + Send + Sync + 'static,
{
    let result = state.directory.list_investors().await;
    render(ViewState::from_list(result, RetryTarget::Reload), |list| {
        list.iter().map(InvestorDto::from).collect::<Vec<_>>()
    })
}

async fn investor_detail<S>(State(state): State<AppState<S>>, Path(id): Path<String>) -> Response
where
    S: DocumentStore + Send + Sync + 'static,
{
    let result = state.directory.get_investor_detail(&InvestorId::new(id)).await;
    render(
        ViewState::from_detail(result, RetryTarget::InvestorList),
        |investor| InvestorDto::from(&investor),
    )
}

async fn get_filter<S>(State(state): State<AppState<S>>) -> Json<FilterDto>
where
    S: DocumentStore + Send + Sync + 'static,
{
    Json(FilterDto::from(&*state.filter.read().await))
}

async fn toggle_filter<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Json<FilterDto>
where
    S: DocumentStore + Send + Sync + 'static,
{
    let mut filter = state.filter.write().await;
    filter.toggle(IndustryId::new(id));
    info!(selected = filter.selected().map(IndustryId::as_str), "industry filter toggled");
    Json(FilterDto::from(&*filter))
}

async fn clear_filter<S>(State(state): State<AppState<S>>) -> Json<FilterDto>
where
    S: DocumentStore + Send + Sync + 'static,
{
    let mut filter = state.filter.write().await;
    filter.clear();
    Json(FilterDto::from(&*filter))
}
