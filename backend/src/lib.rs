//! HTTP front end for the best-move search
//!
//! - `api` - Axum router and the `/best-move` handler
//! - `config` - Command line / environment configuration
//! - `error` - Mapping of engine failures onto HTTP responses

pub mod api;
pub mod config;
pub mod error;
