//! Wavefunction module - the ψ trait and analytic reference ansätze.

mod particle_in_box;
mod slater;
mod traits;

pub use particle_in_box::ParticleInBox;
pub use slater::SlaterProduct;
pub use traits::Wavefunction;
