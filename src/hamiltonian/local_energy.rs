//! Local energy E_L = Hψ / ψ for one electron configuration.

use std::fmt;

use log::{debug, warn};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::kinetic::local_kinetic_energy;
use super::potential::{
    potential_electron_electron, potential_electron_nuclear, potential_nuclear_nuclear,
};
use crate::error::Result;
use crate::systems::{
    electron_electron_distances, electron_nuclear_distances, flatten, Molecule,
};
use crate::wavefunction::Wavefunction;

/// Hartree to electron-volt.
pub const HA_TO_EV: f64 = 27.21138602;

/// Breakdown of the local energy, all in Hartree.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct EnergyComponents {
    pub kinetic: f64,
    pub electron_electron: f64,
    pub electron_nuclear: f64,
    pub nuclear_nuclear: f64,
    pub total: f64,
}

impl EnergyComponents {
    pub fn potential(&self) -> f64 {
        self.electron_electron + self.electron_nuclear + self.nuclear_nuclear
    }
}

impl fmt::Display for EnergyComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = [
            ("Kinetic", self.kinetic),
            ("Electron-electron", self.electron_electron),
            ("Electron-nuclear", self.electron_nuclear),
            ("Nuclear-nuclear", self.nuclear_nuclear),
            ("Potential", self.potential()),
            ("Total", self.total),
        ];
        for (name, value) in rows {
            writeln!(f, "{:<18} {:>14.8} Ha {:>14.6} eV", name, value, value * HA_TO_EV)?;
        }
        Ok(())
    }
}

/// Evaluate every Hamiltonian term for electrons at `electrons`.
///
/// The kinetic part is -½ ∇²ψ/ψ; the potential parts are built from the
/// pair distances of `electrons` and the nuclei of `molecule`.
pub fn local_energy<W: Wavefunction>(
    psi: &W,
    molecule: &Molecule,
    electrons: &[Vector3<f64>],
) -> Result<EnergyComponents> {
    let x = flatten(electrons);
    let kinetic = local_kinetic_energy(psi, &x)?;

    let atoms = molecule.positions();
    let charges = molecule.charges();
    let r_ee = electron_electron_distances(electrons);
    let r_ne = electron_nuclear_distances(electrons, &atoms);

    let electron_electron = potential_electron_electron(&r_ee)?;
    let electron_nuclear = potential_electron_nuclear(&charges, &r_ne)?;
    let nuclear_nuclear = potential_nuclear_nuclear(&charges, &atoms)?;
    let total = kinetic + electron_electron + electron_nuclear + nuclear_nuclear;

    if !total.is_finite() {
        warn!(
            "non-finite local energy {} for {} electrons (coincident particles or a node of psi)",
            total,
            electrons.len()
        );
    }
    debug!("E_L = {:.8} Ha", total);

    Ok(EnergyComponents {
        kinetic,
        electron_electron,
        electron_nuclear,
        nuclear_nuclear,
        total,
    })
}
