//! Interactive REPL mode
//!
//! A browsing session: one industry filter, one startup listing that
//! re-fetches when the filter changes, and a `/retry` that follows the
//! affordance of the last failed view.

use std::io::{self, Write};

use startupview_domain::{
    DocumentStore, Industry, IndustryFilter, IndustryId, InvestorId, StartupId,
};
use startupview_usecase::{Directory, RetryTarget, StartupListingView, ViewState};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::render;

/// The view last shown, for `/retry`
#[derive(Debug, Clone, PartialEq, Eq)]
enum Screen {
    Startups,
    Industries,
    Investors,
    Startup(StartupId),
    Investor(InvestorId),
}

pub struct Browser<S> {
    directory: Directory<S>,
    filter: IndustryFilter,
    listing: StartupListingView,
    /// Last successfully loaded industries, for filter names
    industries: Vec<Industry>,
    screen: Screen,
    /// Set while the last view shown is failed
    retry: Option<RetryTarget>,
}

impl<S> Browser<S>
where
    S: DocumentStore + Send + Sync,
{
    pub fn new(directory: Directory<S>) -> Self {
        Self {
            directory,
            filter: IndustryFilter::new(),
            listing: StartupListingView::new(),
            industries: Vec::new(),
            screen: Screen::Startups,
            retry: None,
        }
    }

    /// Run the REPL on stdin / stdout
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut stdout = io::stdout();
        writeln!(stdout, "StartupView Interactive Mode")?;
        writeln!(stdout, "Type /help for commands, /quit to exit")?;
        writeln!(stdout)?;
        self.show_industries(&mut stdout).await?;
        writeln!(stdout)?;
        self.show_startups(&mut stdout).await?;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            write!(stdout, "\n[{}] > ", self.filter_label())?;
            stdout.flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            let input = line.trim();
            if input.is_empty() {
                continue;
            }

            if self.handle_command(input, &mut stdout).await? {
                break;
            }
        }

        Ok(())
    }

    /// Handle one line of input; returns whether to exit
    pub async fn handle_command<W: Write>(&mut self, input: &str, out: &mut W) -> anyhow::Result<bool> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let cmd = parts.first().copied().unwrap_or("");
        let arg = parts.get(1).copied();

        match (cmd, arg) {
            ("/quit" | "/exit" | "/q", _) => {
                writeln!(out, "Goodbye!")?;
                return Ok(true);
            }
            ("/help" | "/h", _) => write_help(out)?,
            ("/industries", _) => self.show_industries(out).await?,
            ("/filter", Some(id)) => {
                self.filter.toggle(IndustryId::new(id));
                writeln!(out, "Filter: {}", self.filter_label())?;
                self.refilter_startups(out).await?;
            }
            ("/filter", None) => writeln!(out, "Usage: /filter <industry-id>")?,
            ("/clear", _) => {
                self.filter.clear();
                writeln!(out, "Filter: {}", self.filter_label())?;
                self.refilter_startups(out).await?;
            }
            ("/startups", _) => self.show_startups(out).await?,
            ("/investors", _) => self.show_investors(out).await?,
            ("/startup", Some(id)) => self.show_startup(StartupId::new(id), out).await?,
            ("/startup", None) => writeln!(out, "Usage: /startup <id>")?,
            ("/investor", Some(id)) => self.show_investor(InvestorId::new(id), out).await?,
            ("/investor", None) => writeln!(out, "Usage: /investor <id>")?,
            ("/retry", _) => self.retry(out).await?,
            (cmd, _) if cmd.starts_with('/') => {
                writeln!(out, "Unknown command: {}", cmd)?;
            }
            _ => writeln!(out, "Commands start with '/'. Type /help for the list.")?,
        }

        Ok(false)
    }

    fn filter_label(&self) -> String {
        match self.filter.selected() {
            None => "all industries".to_string(),
            Some(id) => self
                .filter
                .selected_name(&self.industries)
                .map(str::to_string)
                .unwrap_or_else(|| id.to_string()),
        }
    }

    async fn retry<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        match self.retry {
            None => writeln!(out, "Nothing to retry."),
            Some(RetryTarget::Home) => self.show_startups(out).await,
            Some(RetryTarget::InvestorList) => self.show_investors(out).await,
            Some(RetryTarget::Reload) => match self.screen.clone() {
                Screen::Startups => {
                    self.listing.reload(&self.directory).await;
                    self.write_listing(out)
                }
                Screen::Industries => self.show_industries(out).await,
                Screen::Investors => self.show_investors(out).await,
                Screen::Startup(id) => self.show_startup(id, out).await,
                Screen::Investor(id) => self.show_investor(id, out).await,
            },
        }
    }

    async fn show_startups<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.listing.open(&self.directory, &self.filter).await;
        self.write_listing(out)
    }

    /// After a filter change; loads only if the selection differs
    async fn refilter_startups<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.listing.sync(&self.directory, &self.filter).await;
        self.write_listing(out)
    }

    fn write_listing<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let state = self.listing.state();
        self.screen = Screen::Startups;
        self.retry = retry_of(state);
        render::write_state(out, state, |out, list| render::write_startups(out, list))?;
        write_retry_hint(out, self.retry)
    }

    async fn show_industries<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let result = self.directory.list_industries().await;
        let state = ViewState::from_list(result, RetryTarget::Reload);
        if let Some(industries) = state.ready() {
            self.industries = industries.clone();
        }
        let filter = &self.filter;
        render::write_state(out, &state, |out, list| {
            render::write_industries(out, list, filter)
        })?;
        self.finish(Screen::Industries, &state, out)
    }

    async fn show_investors<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let result = self.directory.list_investors().await;
        let state = ViewState::from_list(result, RetryTarget::Reload);
        render::write_state(out, &state, |out, list| render::write_investors(out, list))?;
        self.finish(Screen::Investors, &state, out)
    }

    async fn show_startup<W: Write>(&mut self, id: StartupId, out: &mut W) -> io::Result<()> {
        let result = self.directory.get_startup_detail(&id).await;
        let state = ViewState::from_detail(result, RetryTarget::Home);
        render::write_state(out, &state, |out, startup| render::write_startup(out, startup))?;
        self.finish(Screen::Startup(id), &state, out)
    }

    async fn show_investor<W: Write>(&mut self, id: InvestorId, out: &mut W) -> io::Result<()> {
        let result = self.directory.get_investor_detail(&id).await;
        let state = ViewState::from_detail(result, RetryTarget::InvestorList);
        render::write_state(out, &state, |out, investor| {
            render::write_investor(out, investor)
        })?;
        self.finish(Screen::Investor(id), &state, out)
    }

    fn finish<T, W: Write>(&mut self, screen: Screen, state: &ViewState<T>, out: &mut W) -> io::Result<()> {
        self.screen = screen;
        self.retry = retry_of(state);
        write_retry_hint(out, self.retry)
    }
}

fn retry_of<T>(state: &ViewState<T>) -> Option<RetryTarget> {
    match state {
        ViewState::Failed { retry, .. } => Some(*retry),
        _ => None,
    }
}

fn write_retry_hint<W: Write>(out: &mut W, retry: Option<RetryTarget>) -> io::Result<()> {
    let hint = match retry {
        None => return Ok(()),
        Some(RetryTarget::Reload) => "Type /retry to reload.",
        Some(RetryTarget::Home) => "Type /retry to go back to the startups.",
        Some(RetryTarget::InvestorList) => "Type /retry to go back to the investors.",
    };
    writeln!(out, "{}", hint)
}

fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  /industries       - List industries (* marks the filter)")?;
    writeln!(out, "  /filter <id>      - Toggle the industry filter")?;
    writeln!(out, "  /clear            - Clear the industry filter")?;
    writeln!(out, "  /startups         - Show the startup listing")?;
    writeln!(out, "  /startup <id>     - Show one startup")?;
    writeln!(out, "  /investors        - List investors")?;
    writeln!(out, "  /investor <id>    - Show one investor and its investments")?;
    writeln!(out, "  /retry            - Retry the last failed view")?;
    writeln!(out, "  /quit             - Exit")
}
