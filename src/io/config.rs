//! YAML configuration for a single Hamiltonian evaluation.
//!
//! Example:
//!
//! ```yaml
//! molecule:
//!   atoms:
//!     - position: [0.0, 0.0, 0.0]
//!       charge: 2.0
//! electrons:
//!   - [0.5, 0.0, 0.0]
//!   - [0.0, -0.4, 0.3]
//! wavefunction:
//!   type: slater_product
//!   center: [0.0, 0.0, 0.0]
//!   zeta: 2.0
//! ```

use std::path::Path;

use log::{debug, info};
use nalgebra::{DVector, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::hamiltonian::{kinetic, local_energy, EnergyComponents};
use crate::systems::{flatten, Molecule};
use crate::wavefunction::{ParticleInBox, SlaterProduct, Wavefunction};

/// Trial wavefunction selected in the config file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WavefunctionConfig {
    /// One particle in a box; `electrons` must hold a single position.
    ParticleInBox {
        lengths: Vec<f64>,
        quantum_numbers: Vec<u32>,
    },
    /// Every electron in a 1s orbital on `center`.
    SlaterProduct {
        center: Vector3<f64>,
        zeta: f64,
    },
}

/// Contents of a configuration file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    #[serde(default)]
    pub molecule: Molecule,
    pub electrons: Vec<Vector3<f64>>,
    pub wavefunction: WavefunctionConfig,
}

/// Result of evaluating a configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// -∇²ψ at the electron positions
    pub kinetic_laplacian: f64,
    /// Local energy breakdown
    pub energies: EnergyComponents,
}

impl Configuration {
    /// Check the parts of the config serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.electrons.is_empty() {
            return Err(ConfigError::InvalidValue("no electrons given".to_string()));
        }
        for atom in &self.molecule.atoms {
            if !is_positive(atom.charge) {
                return Err(ConfigError::InvalidValue(format!(
                    "nuclear charge must be positive, got {}",
                    atom.charge
                )));
            }
        }
        match &self.wavefunction {
            WavefunctionConfig::ParticleInBox { lengths, quantum_numbers } => {
                if lengths.len() != 3 || quantum_numbers.len() != 3 {
                    return Err(ConfigError::InvalidValue(
                        "particle_in_box needs three lengths and three quantum numbers".to_string(),
                    ));
                }
                if self.electrons.len() != 1 {
                    return Err(ConfigError::InvalidValue(format!(
                        "particle_in_box holds one particle, got {}",
                        self.electrons.len()
                    )));
                }
                if !lengths.iter().all(|&l| is_positive(l)) || quantum_numbers.contains(&0) {
                    return Err(ConfigError::InvalidValue(
                        "box lengths and quantum numbers must be positive".to_string(),
                    ));
                }
            }
            WavefunctionConfig::SlaterProduct { zeta, .. } => {
                if !is_positive(*zeta) {
                    return Err(ConfigError::InvalidValue(format!(
                        "orbital exponent must be positive, got {}",
                        zeta
                    )));
                }
            }
        }
        Ok(())
    }

    /// Evaluate every Hamiltonian term for this configuration.
    pub fn evaluate(&self) -> Result<Evaluation, ConfigError> {
        match &self.wavefunction {
            WavefunctionConfig::ParticleInBox { lengths, quantum_numbers } => {
                let psi = ParticleInBox::new(lengths.clone(), quantum_numbers.clone());
                self.evaluate_with(&psi)
            }
            WavefunctionConfig::SlaterProduct { center, zeta } => {
                let psi = SlaterProduct::new(*center, *zeta, self.electrons.len());
                self.evaluate_with(&psi)
            }
        }
    }

    fn evaluate_with<W: Wavefunction>(&self, psi: &W) -> Result<Evaluation, ConfigError> {
        let x: DVector<f64> = flatten(&self.electrons);
        let energies = local_energy(psi, &self.molecule, &self.electrons)?;
        Ok(Evaluation {
            kinetic_laplacian: kinetic(psi, &x)?,
            energies,
        })
    }
}

/// Finite and strictly positive; rejects NaN.
fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Read and validate a configuration file.
pub fn read_configuration<P: AsRef<Path>>(filename: P) -> Result<Configuration, ConfigError> {
    let path = filename.as_ref();
    info!("Reading configuration from {}", path.display());
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    let config: Configuration = serde_yaml::from_reader(reader)?;
    config.validate()?;
    debug!(
        "{} atoms, {} electrons, wavefunction {:?}",
        config.molecule.num_atoms(),
        config.electrons.len(),
        config.wavefunction
    );
    Ok(config)
}

/// Parse a configuration from a YAML string.
pub fn parse_configuration(yaml: &str) -> Result<Configuration, ConfigError> {
    let config: Configuration = serde_yaml::from_str(yaml)?;
    config.validate()?;
    Ok(config)
}
