//! View states
//!
//! Every view is loading, failed, empty or ready. A failed view carries the
//! classified error and the retry affordance it offers; the user message is
//! derived from the error and never exposes store details.

use startupview_domain::{DocumentStore, IndustryFilter, IndustryId, Startup};
use tracing::{info, warn};

use crate::directory::Directory;
use crate::error::AppError;

/// What a failed view offers the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryTarget {
    /// Run the same operation again
    Reload,
    /// Go back to the startup listing
    Home,
    /// Go back to the investor list
    InvestorList,
}

impl RetryTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            RetryTarget::Reload => "reload",
            RetryTarget::Home => "home",
            RetryTarget::InvestorList => "investors",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Failed { error: AppError, retry: RetryTarget },
    /// Loaded, but there is nothing to show
    Empty,
    Ready(T),
}

impl<T> ViewState<T> {
    /// Failed state; the failure is logged here, once
    pub fn failed(error: AppError, retry: RetryTarget) -> Self {
        warn!(code = error.code(), %error, retry = retry.as_str(), "view failed to load");
        ViewState::Failed { error, retry }
    }

    /// State of a single-entity view
    pub fn from_detail(result: Result<T, AppError>, retry: RetryTarget) -> Self {
        match result {
            Ok(value) => ViewState::Ready(value),
            Err(error) => Self::failed(error, retry),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ViewState::Empty)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&AppError> {
        match self {
            ViewState::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// User-facing failure message, if failed
    pub fn message(&self) -> Option<String> {
        self.error().map(AppError::user_message)
    }
}

impl<T> ViewState<Vec<T>> {
    /// State of a list view; an empty list is [`ViewState::Empty`]
    pub fn from_list(result: Result<Vec<T>, AppError>, retry: RetryTarget) -> Self {
        match result {
            Ok(items) if items.is_empty() => ViewState::Empty,
            Ok(items) => ViewState::Ready(items),
            Err(error) => Self::failed(error, retry),
        }
    }
}

/// The startup listing of a browsing session
///
/// Remembers which industry selection its current state was computed for.
/// [`sync`](Self::sync) recomputes only when the selection changed;
/// [`open`](Self::open) and [`reload`](Self::reload) recompute
/// unconditionally. Each recomputation replaces the previous state; nothing
/// is reused across loads.
#[derive(Debug)]
pub struct StartupListingView {
    /// `None` until the first load
    computed_for: Option<Option<IndustryId>>,
    state: ViewState<Vec<Startup>>,
}

impl StartupListingView {
    pub fn new() -> Self {
        Self {
            computed_for: None,
            state: ViewState::Loading,
        }
    }

    pub fn state(&self) -> &ViewState<Vec<Startup>> {
        &self.state
    }

    /// Industry the current state was computed for
    pub fn industry(&self) -> Option<&IndustryId> {
        self.computed_for.as_ref().and_then(Option::as_ref)
    }

    pub fn is_stale(&self, filter: &IndustryFilter) -> bool {
        match &self.computed_for {
            None => true,
            Some(previous) => previous.as_ref() != filter.selected(),
        }
    }

    /// Recompute if the filter selection differs from the last input
    ///
    /// Returns whether a fetch happened. A failed state is not retried
    /// here; that is what [`reload`](Self::reload) is for.
    pub async fn sync<S>(&mut self, directory: &Directory<S>, filter: &IndustryFilter) -> bool
    where
        S: DocumentStore + Send + Sync,
    {
        if !self.is_stale(filter) {
            return false;
        }
        self.load(directory, filter.selected().cloned()).await;
        true
    }

    /// Load for the current filter selection, whatever was loaded before
    ///
    /// Navigating to the listing uses this; every visit reads the store.
    pub async fn open<S>(&mut self, directory: &Directory<S>, filter: &IndustryFilter)
    where
        S: DocumentStore + Send + Sync,
    {
        self.load(directory, filter.selected().cloned()).await;
    }

    /// Recompute with the same input as last time
    pub async fn reload<S>(&mut self, directory: &Directory<S>)
    where
        S: DocumentStore + Send + Sync,
    {
        let input = self.computed_for.clone().flatten();
        self.load(directory, input).await;
    }

    async fn load<S>(&mut self, directory: &Directory<S>, input: Option<IndustryId>)
    where
        S: DocumentStore + Send + Sync,
    {
        info!(industry = input.as_ref().map(IndustryId::as_str), "loading startup listing");
        self.state = ViewState::Loading;
        let result = directory.list_startups(input.as_ref()).await;
        self.computed_for = Some(input);
        self.state = ViewState::from_list(result, RetryTarget::Reload);
    }
}

impl Default for StartupListingView {
    fn default() -> Self {
        Self::new()
    }
}
