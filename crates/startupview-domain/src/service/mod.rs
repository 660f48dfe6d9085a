//! Domain Services - Pure logic over the domain model
//!
//! No I/O, no async.

pub mod industry_filter;
pub mod mapper;
