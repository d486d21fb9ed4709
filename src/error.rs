//! Error types shared across the crate.

use thiserror::Error;

/// Errors raised while evaluating Hamiltonian terms.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HamiltonianError {
    /// Two inputs disagree on the number of electrons or atoms.
    #[error("shape mismatch for {what}: expected {expected}, found {found}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    /// A flattened coordinate vector whose length is not a multiple of 3.
    #[error("coordinate vector of length {0} is not a multiple of 3")]
    BadCoordinateLength(usize),
}

impl HamiltonianError {
    pub(crate) fn shape(what: &'static str, expected: usize, found: usize) -> Self {
        HamiltonianError::ShapeMismatch { what, expected, found }
    }
}

/// Errors raised while loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
    #[error(transparent)]
    Hamiltonian(#[from] HamiltonianError),
}

pub type Result<T> = std::result::Result<T, HamiltonianError>;
