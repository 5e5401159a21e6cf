//! # FindIt API
//!
//! HTTP surface for the matching engine:
//!
//! - `POST /match` - score a lost description against a found description
//! - `GET /health` - liveness probe

pub mod rest;

pub use rest::{configure, json_config, RestApi, SERVICE_NAME, SERVICE_VERSION};
