//! Server functions called by the demo client.

use dioxus::prelude::*;
use shared_types::{ContinentMap, CountryMap};

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

/// Countries keyed by ISO code, honoring the configured latency and failure.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_countries() -> Result<CountryMap, ServerFnError> {
    let config = &crate::config::app_config().countries;
    crate::countries::fetch_countries(config)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Continent names keyed by continent code.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_continents() -> Result<ContinentMap, ServerFnError> {
    let config = &crate::config::app_config().countries;
    crate::countries::fetch_continents(config)
        .await
        .map_err(|e| e.into_server_fn_error())
}
