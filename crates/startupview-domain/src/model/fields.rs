//! Wire field names of store documents.
//!
//! These must match the stored documents exactly.

pub const STARTUP_NAME: &str = "startup_name";
pub const STARTUP_LOGO: &str = "startup_logo";
pub const STARTUP_DESCRIPTION: &str = "startup_description";
pub const STARTUP_WEBSITE: &str = "startup_website";
pub const STARTUP_INDUSTRY: &str = "startup_industry";
pub const STARTUP_INDUSTRY_ID: &str = "startup_industry_id";
pub const STARTUP_COUNTRY: &str = "startup_country";
pub const STARTUP_INVESTORS: &str = "startup_investors";

pub const INVESTOR_NAME: &str = "investor_name";
pub const INVESTOR_LOGO: &str = "investor_logo";
pub const INVESTOR_DESCRIPTION: &str = "investor_description";
pub const INVESTOR_WEBSITE: &str = "investor_website";
pub const INVESTOR_STARTUPS: &str = "investor_startups";

pub const INDUSTRY_NAME: &str = "industry_name";
pub const INDUSTRY_COUNT: &str = "industry_count";

/// Key of a reference entry (`{id, name}`)
pub const REF_ID: &str = "id";
/// Display name of a reference entry
pub const REF_NAME: &str = "name";
