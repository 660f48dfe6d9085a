//! One-shot commands
//!
//! Each loads one view, writes it as text or JSON, and reports whether the
//! view loaded. A failed view is output, not an error of the command.

use std::io::{self, Write};

use serde::Serialize;
use startupview_adapter::controller::dto::{
    IndustriesDto, InvestorDto, StartupDto, ViewBody,
};
use startupview_domain::{DocumentStore, IndustryFilter, IndustryId, InvestorId, StartupId};
use startupview_usecase::{Directory, RetryTarget, ViewState};

use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn startups<S, W>(
    directory: &Directory<S>,
    industry: Option<IndustryId>,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<bool>
where
    S: DocumentStore + Send + Sync,
    W: Write,
{
    let result = directory.list_startups(industry.as_ref()).await;
    emit(
        out,
        format,
        ViewState::from_list(result, RetryTarget::Reload),
        |list| list.iter().map(StartupDto::from).collect::<Vec<_>>(),
        |out, list| render::write_startups(out, list),
    )
}

pub async fn startup<S, W>(
    directory: &Directory<S>,
    id: StartupId,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<bool>
where
    S: DocumentStore + Send + Sync,
    W: Write,
{
    let result = directory.get_startup_detail(&id).await;
    emit(
        out,
        format,
        ViewState::from_detail(result, RetryTarget::Home),
        |startup| StartupDto::from(startup),
        |out, startup| render::write_startup(out, startup),
    )
}

pub async fn investors<S, W>(
    directory: &Directory<S>,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<bool>
where
    S: DocumentStore + Send + Sync,
    W: Write,
{
    let result = directory.list_investors().await;
    emit(
        out,
        format,
        ViewState::from_list(result, RetryTarget::Reload),
        |list| list.iter().map(InvestorDto::from).collect::<Vec<_>>(),
        |out, list| render::write_investors(out, list),
    )
}

pub async fn investor<S, W>(
    directory: &Directory<S>,
    id: InvestorId,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<bool>
where
    S: DocumentStore + Send + Sync,
    W: Write,
{
    let result = directory.get_investor_detail(&id).await;
    emit(
        out,
        format,
        ViewState::from_detail(result, RetryTarget::InvestorList),
        |investor| InvestorDto::from(investor),
        |out, investor| render::write_investor(out, investor),
    )
}

pub async fn industries<S, W>(
    directory: &Directory<S>,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<bool>
where
    S: DocumentStore + Send + Sync,
    W: Write,
{
    let result = directory.list_industries().await;
    let filter = IndustryFilter::new();
    emit(
        out,
        format,
        ViewState::from_list(result, RetryTarget::Reload),
        |list| IndustriesDto::new(list, &filter),
        |out, list| render::write_industries(out, list, &filter),
    )
}

fn emit<T, D, W>(
    out: &mut W,
    format: OutputFormat,
    state: ViewState<T>,
    dto: impl FnOnce(&T) -> D,
    text: impl FnOnce(&mut W, &T) -> io::Result<()>,
) -> anyhow::Result<bool>
where
    D: Serialize,
    W: Write,
{
    let loaded = state.error().is_none();
    match format {
        OutputFormat::Text => render::write_state(out, &state, text)?,
        OutputFormat::Json => {
            let (_, body) = ViewBody::from_state(state, |value| dto(&value));
            serde_json::to_writer_pretty(&mut *out, &body)?;
            writeln!(out)?;
        }
    }
    Ok(loaded)
}
