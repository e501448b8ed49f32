//! Header configuration bundled with the frontend
//!
//! `header.json` is embedded at build time. A broken file never blocks the
//! app: it is logged and the built-in defaults are used instead.

use anyhow::{Context, Result};
use tmdb_films_core::{CoreError, HeaderConfig};
use tracing::{debug, warn};

const EMBEDDED_CONFIG: &str = include_str!("../header.json");

/// Load the embedded header configuration, falling back to defaults
pub fn load_header_config() -> HeaderConfig {
    match parse_header_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            debug!(brand = %config.brand_title, "Header config loaded");
            config
        }
        Err(e) => {
            warn!(
                hint = config_hint(&e).unwrap_or_default(),
                "Invalid header config, using defaults: {e:#}"
            );
            HeaderConfig::default()
        }
    }
}

fn parse_header_config(content: &str) -> Result<HeaderConfig> {
    HeaderConfig::from_json_str(content).context("Failed to load embedded header.json")
}

/// Fix-it hint carried by the underlying config error, if any
fn config_hint(err: &anyhow::Error) -> Option<&'static str> {
    err.downcast_ref::<CoreError>().and_then(CoreError::suggestion)
}
