//! Inbound adapters
//!
//! - `http` - JSON view endpoints served with axum
//! - `dto`  - serializable shapes of entities and view states, shared with
//!   the CLI's `--json` output

pub mod dto;
pub mod http;

pub use http::{router, serve};
