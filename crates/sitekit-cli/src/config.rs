use crate::cli::PocketArgs;
use crate::error::{CliError, Result};
use sitekit::workflows::pocket::PocketParams;

/// Resolves the pocket parameters: embedded defaults, then the TOML config
/// file if given, then individual CLI flag overrides on top.
pub fn resolve_pocket_params(args: &PocketArgs) -> Result<PocketParams> {
    let mut params = match &args.config {
        None => PocketParams::default(),
        Some(path) => {
            let content = std::fs::read_to_string(path).map_err(|e| {
                CliError::Config(format!("cannot read '{}': {e}", path.display()))
            })?;
            toml::from_str(&content).map_err(|e| {
                CliError::Config(format!("invalid pocket config '{}': {e}", path.display()))
            })?
        }
    };

    if let Some(probe_radius) = args.probe_radius {
        params.probe_radius = probe_radius;
    }
    if let Some(surface_radius) = args.surface_radius {
        params.surface_radius = surface_radius;
    }

    if !(params.probe_radius >= 0.0) {
        return Err(CliError::Argument(format!(
            "probe radius must be non-negative, got {}",
            params.probe_radius
        )));
    }
    Ok(params)
}
