//! HawkerHub: business decision tools for hawker stall operators.
//!
//! This crate estimates monthly stall profit, matches operators to
//! government grant programmes and summarises historical rental bid and
//! footfall data, exposing all three through a small JSON API.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod estimator;
pub mod format;
pub mod grants;
pub mod insights;
pub mod models;
