// Observation input
// Reads caller observations from JSON

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::observation::Observation;

/// Parse a JSON array of `{"date": "yyyy-mm-dd", "value": n}` objects.
pub fn parse_observations(json: &str) -> Result<Vec<Observation>> {
    let observations: Vec<Observation> =
        serde_json::from_str(json).context("failed to parse observations")?;
    Ok(observations)
}

pub fn load_observations(path: &Path) -> Result<Vec<Observation>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read observations from {}", path.display()))?;
    let observations = parse_observations(&data)
        .with_context(|| format!("invalid observations in {}", path.display()))?;
    log::info!(
        "Loaded {} observations from {}",
        observations.len(),
        path.display()
    );
    Ok(observations)
}
