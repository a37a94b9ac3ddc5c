//! HTTP client for the Ring REST endpoints.

mod client;
mod endpoints;

pub(crate) use client::ApiClient;
pub(crate) use endpoints::*;
