use thiserror::Error;

/// Errors raised while loading or validating the drawer configuration.
///
/// The drawer itself never fails; configuration is the only fallible edge.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Decimal separator {0:?} must not be a digit or whitespace")]
    InvalidSeparator(char),

    #[error("Snap point fraction {0} must be greater than 0 and at most 1")]
    InvalidFraction(f32),

    #[error("Snap points must grow from collapsed to half to full")]
    SnapPointsNotIncreasing,
}
