//! Hamiltonian module - kinetic and Coulomb potential terms.

mod kinetic;
mod local_energy;
mod potential;

pub use kinetic::{kinetic, kinetic_from_hessian, local_kinetic_energy};
pub use local_energy::{local_energy, EnergyComponents, HA_TO_EV};
pub use potential::{
    potential_electron_electron, potential_electron_nuclear, potential_energy,
    potential_nuclear_nuclear,
};
