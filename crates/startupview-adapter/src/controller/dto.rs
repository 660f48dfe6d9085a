//! Serializable view shapes
//!
//! Domain entities stay free of serde; these mirror them for the wire.

use serde::Serialize;
use startupview_domain::{
    Industry, IndustryFilter, IndustryId, Investor, InvestorRef, Startup, StartupRef,
};
use startupview_usecase::ViewState;

/// A view state on the wire, tagged by `state`
#[derive(Debug, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum ViewBody<D> {
    Loading,
    Empty,
    Failed {
        code: &'static str,
        message: String,
        retry: &'static str,
    },
    Ready {
        data: D,
    },
}

impl<D> ViewBody<D> {
    /// Convert a view state, mapping its ready value with `f`
    ///
    /// Also returns the status the view answers with: the error's status
    /// when failed, 200 otherwise.
    pub fn from_state<T>(state: ViewState<T>, f: impl FnOnce(T) -> D) -> (u16, Self) {
        match state {
            ViewState::Loading => (200, ViewBody::Loading),
            ViewState::Empty => (200, ViewBody::Empty),
            ViewState::Ready(value) => (200, ViewBody::Ready { data: f(value) }),
            ViewState::Failed { error, retry } => (
                error.status(),
                ViewBody::Failed {
                    code: error.code(),
                    message: error.user_message(),
                    retry: retry.as_str(),
                },
            ),
        }
    }
}

/// A `{id, name}` reference; `logoUrl` only once enriched
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceDto {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    pub initial: char,
}

impl From<&InvestorRef> for ReferenceDto {
    fn from(reference: &InvestorRef) -> Self {
        Self {
            id: reference.id.to_string(),
            name: reference.name.clone(),
            logo_url: None,
            initial: reference.initial(),
        }
    }
}

impl From<&StartupRef> for ReferenceDto {
    fn from(reference: &StartupRef) -> Self {
        Self {
            id: reference.id.to_string(),
            name: reference.name.clone(),
            logo_url: reference.logo_url.clone(),
            initial: reference.initial(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    pub country: Option<String>,
    pub industry: Option<String>,
    pub industry_id: Option<String>,
    pub initial: char,
    pub investors: Vec<ReferenceDto>,
}

impl From<&Startup> for StartupDto {
    fn from(startup: &Startup) -> Self {
        Self {
            id: startup.id().to_string(),
            name: startup.name().to_string(),
            description: startup.description().to_string(),
            logo_url: startup.logo_url().map(str::to_string),
            website_url: startup.website_url().map(str::to_string),
            country: startup.country().map(str::to_string),
            industry: startup.industry().map(str::to_string),
            industry_id: startup.industry_id().map(IndustryId::to_string),
            initial: startup.initial(),
            investors: startup.investors().iter().map(ReferenceDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    pub initial: char,
    pub investment_count: usize,
    pub startups: Vec<ReferenceDto>,
}

impl From<&Investor> for InvestorDto {
    fn from(investor: &Investor) -> Self {
        Self {
            id: investor.id().to_string(),
            name: investor.name().to_string(),
            description: investor.description().to_string(),
            logo_url: investor.logo_url().map(str::to_string),
            website_url: investor.website_url().map(str::to_string),
            initial: investor.initial(),
            investment_count: investor.investment_count(),
            startups: investor.startups().iter().map(ReferenceDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IndustryDto {
    pub id: String,
    pub name: String,
    pub count: u64,
    pub selected: bool,
}

/// The industry selector: every industry plus the current selection
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustriesDto {
    pub industries: Vec<IndustryDto>,
    pub selected: Option<String>,
    pub selected_name: Option<String>,
}

impl IndustriesDto {
    pub fn new(industries: &[Industry], filter: &IndustryFilter) -> Self {
        Self {
            industries: industries
                .iter()
                .map(|industry| IndustryDto {
                    id: industry.id.to_string(),
                    name: industry.name.clone(),
                    count: industry.count,
                    selected: filter.is_selected(&industry.id),
                })
                .collect(),
            selected: filter.selected().map(IndustryId::to_string),
            selected_name: filter.selected_name(industries).map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterDto {
    pub selected: Option<String>,
}

impl From<&IndustryFilter> for FilterDto {
    fn from(filter: &IndustryFilter) -> Self {
        Self {
            selected: filter.selected().map(IndustryId::to_string),
        }
    }
}
