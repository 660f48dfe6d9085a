//! Investor - A fund or angel backing startups in the directory

use super::initial_of;
use super::startup::StartupId;

entity_id!(
    /// Unique identifier for an Investor (its document id)
    InvestorId
);

/// A reference from an investor to a startup it backs
///
/// The store only keeps `id` and `name`. `logo_url` is filled in when the
/// investor detail is assembled and the startup could be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupRef {
    pub id: StartupId,
    pub name: String,
    pub logo_url: Option<String>,
}

impl StartupRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: StartupId::new(id),
            name: name.into(),
            logo_url: None,
        }
    }

    pub fn with_logo_url(mut self, url: impl Into<String>) -> Self {
        self.logo_url = Some(url.into());
        self
    }

    pub fn initial(&self) -> char {
        initial_of(&self.name)
    }
}

/// Investor profile
#[derive(Debug, Clone)]
pub struct Investor {
    id: InvestorId,
    name: String,
    description: String,
    logo_url: Option<String>,
    website_url: Option<String>,
    /// Backed startups in display order
    startups: Vec<StartupRef>,
}

impl Investor {
    pub fn new(id: InvestorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            logo_url: None,
            website_url: None,
            startups: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_logo_url(mut self, url: impl Into<String>) -> Self {
        self.logo_url = Some(url.into());
        self
    }

    pub fn with_website_url(mut self, url: impl Into<String>) -> Self {
        self.website_url = Some(url.into());
        self
    }

    pub fn with_startup(mut self, startup: StartupRef) -> Self {
        self.startups.push(startup);
        self
    }

    pub fn with_startups(mut self, startups: impl IntoIterator<Item = StartupRef>) -> Self {
        self.startups.extend(startups);
        self
    }

    /// Replace the startup references, e.g. with their enriched versions
    pub fn set_startups(&mut self, startups: Vec<StartupRef>) {
        self.startups = startups;
    }

    // ========== Getters ==========

    pub fn id(&self) -> &InvestorId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn logo_url(&self) -> Option<&str> {
        self.logo_url.as_deref()
    }

    pub fn website_url(&self) -> Option<&str> {
        self.website_url.as_deref()
    }

    pub fn startups(&self) -> &[StartupRef] {
        &self.startups
    }

    /// Number of investments, as shown on the investor list
    pub fn investment_count(&self) -> usize {
        self.startups.len()
    }

    pub fn initial(&self) -> char {
        initial_of(&self.name)
    }
}

impl PartialEq for Investor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Investor {}
