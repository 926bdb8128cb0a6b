//! Loading `SimConfig` from a JSON file. Missing fields take their defaults.

use std::path::Path;

use salvo_sim::SimConfig;

use crate::error::HostError;

/// Parse and validate a JSON config.
pub fn parse_config(text: &str) -> Result<SimConfig, HostError> {
    let config: SimConfig = serde_json::from_str(text)?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<SimConfig, HostError> {
    let text = std::fs::read_to_string(path)?;
    let config = parse_config(&text)?;
    log::debug!("loaded config from {}: {config:?}", path.display());
    Ok(config)
}
