//! Plain-text rendering of views

use std::io::{self, Write};

use startupview_domain::{Industry, IndustryFilter, Investor, Startup};
use startupview_usecase::ViewState;

/// Write a view state; `ready` renders the loaded value
pub fn write_state<W, T>(
    out: &mut W,
    state: &ViewState<T>,
    ready: impl FnOnce(&mut W, &T) -> io::Result<()>,
) -> io::Result<()>
where
    W: Write,
{
    match state {
        ViewState::Loading => writeln!(out, "Loading..."),
        ViewState::Empty => writeln!(out, "Nothing to show."),
        ViewState::Failed { error, .. } => writeln!(out, "Error: {}", error.user_message()),
        ViewState::Ready(value) => ready(out, value),
    }
}

pub fn write_startups<W: Write>(out: &mut W, startups: &[Startup]) -> io::Result<()> {
    for startup in startups {
        write!(out, "[{}] {} ({})", startup.initial(), startup.name(), startup.id())?;
        if let Some(industry) = startup.industry() {
            write!(out, " - {}", industry)?;
        }
        if let Some(country) = startup.country() {
            write!(out, ", {}", country)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_startup<W: Write>(out: &mut W, startup: &Startup) -> io::Result<()> {
    writeln!(out, "[{}] {} ({})", startup.initial(), startup.name(), startup.id())?;
    write_optional(out, "Industry", startup.industry())?;
    write_optional(out, "Country", startup.country())?;
    write_optional(out, "Website", startup.website_url())?;
    write_optional(out, "Logo", startup.logo_url())?;
    if !startup.description().is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", startup.description())?;
    }

    writeln!(out)?;
    if startup.investors().is_empty() {
        return writeln!(out, "Investors: none");
    }
    writeln!(out, "Investors:")?;
    for investor in startup.investors() {
        writeln!(out, "  - {} ({})", investor.name, investor.id)?;
    }
    Ok(())
}

pub fn write_investors<W: Write>(out: &mut W, investors: &[Investor]) -> io::Result<()> {
    for investor in investors {
        writeln!(
            out,
            "[{}] {} ({}) - {} investments",
            investor.initial(),
            investor.name(),
            investor.id(),
            investor.investment_count()
        )?;
    }
    Ok(())
}

pub fn write_investor<W: Write>(out: &mut W, investor: &Investor) -> io::Result<()> {
    writeln!(out, "[{}] {} ({})", investor.initial(), investor.name(), investor.id())?;
    write_optional(out, "Website", investor.website_url())?;
    write_optional(out, "Logo", investor.logo_url())?;
    if !investor.description().is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", investor.description())?;
    }

    writeln!(out)?;
    writeln!(out, "Investments: {}", investor.investment_count())?;
    for startup in investor.startups() {
        write!(out, "  - [{}] {} ({})", startup.initial(), startup.name, startup.id)?;
        if let Some(logo) = &startup.logo_url {
            write!(out, " logo: {}", logo)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Industries, the selected one marked with `*`
pub fn write_industries<W: Write>(
    out: &mut W,
    industries: &[Industry],
    filter: &IndustryFilter,
) -> io::Result<()> {
    for industry in industries {
        let marker = if filter.is_selected(&industry.id) { '*' } else { ' ' };
        writeln!(
            out,
            "{} {} ({}) - {}",
            marker, industry.name, industry.id, industry.count
        )?;
    }
    Ok(())
}

fn write_optional<W: Write>(out: &mut W, label: &str, value: Option<&str>) -> io::Result<()> {
    match value {
        Some(value) => writeln!(out, "{}: {}", label, value),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use startupview_domain::{IndustryId, InvestorId, InvestorRef, StartupId, StartupRef};
    use startupview_usecase::{AppError, RetryTarget};

    fn text(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_startup_listing_lines() {
        let startups = vec![
            Startup::new(StartupId::new("s1"), "Acme")
                .with_industry("Fintech")
                .with_country("US"),
            Startup::new(StartupId::new("s2"), "beta"),
        ];

        let output = text(|out| write_startups(out, &startups));

        assert_eq!(output, "[A] Acme (s1) - Fintech, US\n[b] beta (s2)\n");
    }

    #[test]
    fn test_startup_detail_lists_investors() {
        let startup = Startup::new(StartupId::new("s1"), "Acme")
            .with_description("Rockets")
            .with_investor(InvestorRef::new("v1", "Seed Fund"));

        let output = text(|out| write_startup(out, &startup));

        assert!(output.contains("Rockets"));
        assert!(output.contains("  - Seed Fund (v1)"));
        assert!(!output.contains("Country"));
    }

    #[test]
    fn test_investor_detail_shows_logos_when_known() {
        let investor = Investor::new(InvestorId::new("v1"), "Seed Fund")
            .with_startup(StartupRef::new("s1", "Acme").with_logo_url("L"))
            .with_startup(StartupRef::new("s2", "Ghost"));

        let output = text(|out| write_investor(out, &investor));

        assert!(output.contains("Investments: 2"));
        assert!(output.contains("  - [A] Acme (s1) logo: L\n"));
        assert!(output.contains("  - [G] Ghost (s2)\n"));
    }

    #[test]
    fn test_industries_mark_selection() {
        let industries = vec![
            Industry::new(IndustryId::new("ind-1"), "Fintech", 3),
            Industry::new(IndustryId::new("ind-2"), "Health", 0),
        ];
        let filter = IndustryFilter::selecting(IndustryId::new("ind-2"));

        let output = text(|out| write_industries(out, &industries, &filter));

        assert_eq!(output, "  Fintech (ind-1) - 3\n* Health (ind-2) - 0\n");
    }

    #[test]
    fn test_failed_state_shows_user_message_only() {
        let state: ViewState<u8> = ViewState::Failed {
            error: AppError::Store {
                message: "connection reset".to_string(),
            },
            retry: RetryTarget::Reload,
        };

        let output = text(|out| write_state(out, &state, |_, _| Ok(())));

        assert!(output.starts_with("Error: An error occurred while accessing the database."));
        assert!(!output.contains("connection reset"));
    }
}
