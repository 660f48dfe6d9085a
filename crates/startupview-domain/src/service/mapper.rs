//! Entity Mappers - Raw documents to typed entities
//!
//! Every mapper is total: a missing or wrongly-typed optional field becomes
//! `None`, an empty string or an empty list. Unknown fields are ignored.

use crate::model::document::{Document, FieldValue};
use crate::model::fields;
use crate::model::industry::{Industry, IndustryId};
use crate::model::investor::{Investor, InvestorId, StartupRef};
use crate::model::startup::{InvestorRef, Startup, StartupId};

/// Map a `startups` document
pub fn map_startup(doc: &Document) -> Startup {
    let mut startup = Startup::new(
        StartupId::new(doc.id()),
        doc.get_str(fields::STARTUP_NAME).unwrap_or_default(),
    )
    .with_description(doc.get_str(fields::STARTUP_DESCRIPTION).unwrap_or_default())
    .with_investors(
        references(doc, fields::STARTUP_INVESTORS).map(|(id, name)| InvestorRef::new(id, name)),
    );

    if let Some(logo) = doc.get_str(fields::STARTUP_LOGO) {
        startup = startup.with_logo_url(logo);
    }
    if let Some(website) = doc.get_str(fields::STARTUP_WEBSITE) {
        startup = startup.with_website_url(website);
    }
    if let Some(country) = doc.get_str(fields::STARTUP_COUNTRY) {
        startup = startup.with_country(country);
    }
    if let Some(industry) = doc.get_str(fields::STARTUP_INDUSTRY) {
        startup = startup.with_industry(industry);
    }
    if let Some(industry_id) = doc.get_str(fields::STARTUP_INDUSTRY_ID) {
        startup = startup.with_industry_id(IndustryId::new(industry_id));
    }

    startup
}

/// Map an `investors` document
///
/// Startup references come back without logos.
pub fn map_investor(doc: &Document) -> Investor {
    let mut investor = Investor::new(
        InvestorId::new(doc.id()),
        doc.get_str(fields::INVESTOR_NAME).unwrap_or_default(),
    )
    .with_description(doc.get_str(fields::INVESTOR_DESCRIPTION).unwrap_or_default())
    .with_startups(
        references(doc, fields::INVESTOR_STARTUPS).map(|(id, name)| StartupRef::new(id, name)),
    );

    if let Some(logo) = doc.get_str(fields::INVESTOR_LOGO) {
        investor = investor.with_logo_url(logo);
    }
    if let Some(website) = doc.get_str(fields::INVESTOR_WEBSITE) {
        investor = investor.with_website_url(website);
    }

    investor
}

/// Map an `industry` document
pub fn map_industry(doc: &Document) -> Industry {
    Industry::new(
        IndustryId::new(doc.id()),
        doc.get_str(fields::INDUSTRY_NAME).unwrap_or_default(),
        doc.get(fields::INDUSTRY_COUNT)
            .and_then(FieldValue::as_u64)
            .unwrap_or(0),
    )
}

/// `{id, name}` entries of a reference list, in stored order
///
/// Entries that are not maps or have no string id are skipped.
fn references<'a>(doc: &'a Document, field: &str) -> impl Iterator<Item = (&'a str, &'a str)> {
    doc.get_array(field).iter().filter_map(|entry| {
        let entry = entry.as_map()?;
        let id = entry.get(fields::REF_ID)?.as_str()?;
        let name = entry
            .get(fields::REF_NAME)
            .and_then(FieldValue::as_str)
            .unwrap_or_default();
        Some((id, name))
    })
}
