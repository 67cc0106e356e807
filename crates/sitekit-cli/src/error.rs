use sitekit::core::forcefield::energy::EnergyError;
use sitekit::core::forcefield::params::ParamLoadError;
use sitekit::core::io::dots::DotsError;
use sitekit::core::io::xyz::XyzError;
use sitekit::core::surface::SurfaceError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Coordinates(#[from] XyzError),

    #[error(transparent)]
    Dots(#[from] DotsError),

    #[error(transparent)]
    Params(#[from] ParamLoadError),

    #[error(transparent)]
    Energy(#[from] EnergyError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
