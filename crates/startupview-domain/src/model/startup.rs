//! Startup - A company profile in the directory
//!
//! Startup is an Entity: two startups with the same id are the same
//! startup, whatever their other fields say.

use super::industry::IndustryId;
use super::initial_of;
use super::investor::InvestorId;

entity_id!(
    /// Unique identifier for a Startup (its document id)
    StartupId
);

/// A reference from a startup to one of its investors
///
/// The reference is not guaranteed to resolve: the investor document may
/// have been removed upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvestorRef {
    pub id: InvestorId,
    pub name: String,
}

impl InvestorRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: InvestorId::new(id),
            name: name.into(),
        }
    }

    pub fn initial(&self) -> char {
        initial_of(&self.name)
    }
}

/// Startup profile
#[derive(Debug, Clone)]
pub struct Startup {
    id: StartupId,
    name: String,
    description: String,
    logo_url: Option<String>,
    website_url: Option<String>,
    country: Option<String>,
    /// Industry display name
    industry: Option<String>,
    /// Industry key used for filtering
    industry_id: Option<IndustryId>,
    /// Investors in display order
    investors: Vec<InvestorRef>,
}

impl Startup {
    pub fn new(id: StartupId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            logo_url: None,
            website_url: None,
            country: None,
            industry: None,
            industry_id: None,
            investors: Vec::new(),
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

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    pub fn with_industry_id(mut self, id: IndustryId) -> Self {
        self.industry_id = Some(id);
        self
    }

    pub fn with_investor(mut self, investor: InvestorRef) -> Self {
        self.investors.push(investor);
        self
    }

    pub fn with_investors(mut self, investors: impl IntoIterator<Item = InvestorRef>) -> Self {
        self.investors.extend(investors);
        self
    }

    // ========== Getters ==========

    pub fn id(&self) -> &StartupId {
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

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn industry(&self) -> Option<&str> {
        self.industry.as_deref()
    }

    pub fn industry_id(&self) -> Option<&IndustryId> {
        self.industry_id.as_ref()
    }

    pub fn investors(&self) -> &[InvestorRef] {
        &self.investors
    }

    /// Logo placeholder character
    pub fn initial(&self) -> char {
        initial_of(&self.name)
    }
}

impl PartialEq for Startup {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Startup {}
