//! Scout-supplied role corrections.

use common::tables::RoleOverride;

use crate::Error;

/// Loads overrides from a JSON list, no file means no overrides.
pub async fn load(path: Option<&std::path::Path>) -> Result<Vec<RoleOverride>, Error> {
    let path = match path {
        Some(p) => p,
        None => return Ok(Vec::new()),
    };

    let overrides: Vec<RoleOverride> = crate::read_json(path).await?;
    for o in overrides.iter() {
        crate::storage::validate_event_code(&o.event_code)?;
    }

    tracing::info!("Loaded {} role overrides", overrides.len());
    Ok(overrides)
}
