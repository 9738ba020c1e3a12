use thiserror::Error;

/// Rejected controller configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("min_green ({min_green}s) must not exceed max_green ({max_green}s)")]
    GreenBoundsInverted { min_green: u32, max_green: u32 },
    #[error("direction names must not be empty")]
    EmptyDirectionName,
    #[error("both directions are named {0:?}")]
    DuplicateDirectionName(String),
}

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to parse controller config: {0}")]
    ConfigFile(#[from] serde_json::Error),
    #[error("transition log error: {0}")]
    TransitionLog(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
