//! Kinetic-energy terms.

use log::debug;
use nalgebra::DVector;

use crate::autodiff::{hessian, value_and_laplacian};
use crate::error::Result;
use crate::wavefunction::Wavefunction;

/// Kinetic term in the form -∇²ψ.
///
/// The Laplacian is the trace of the Hessian of ψ with respect to every
/// coordinate in `position`. Only the diagonal is evaluated. Fails when
/// `position` does not have `psi.ndim()` coordinates.
pub fn kinetic<W: Wavefunction>(psi: &W, position: &DVector<f64>) -> Result<f64> {
    let (_, lap) = value_and_laplacian(psi, position)?;
    Ok(-lap)
}

/// Same value as [`kinetic`], taken from the full Hessian matrix.
pub fn kinetic_from_hessian<W: Wavefunction>(psi: &W, position: &DVector<f64>) -> Result<f64> {
    Ok(-hessian(psi, position)?.trace())
}

/// Kinetic contribution to the local energy: -½ ∇²ψ / ψ.
pub fn local_kinetic_energy<W: Wavefunction>(psi: &W, position: &DVector<f64>) -> Result<f64> {
    let (value, lap) = value_and_laplacian(psi, position)?;
    let t = -0.5 * lap / value;
    debug!("local kinetic energy: psi = {:.6e}, laplacian = {:.6e}, T = {:.6}", value, lap, t);
    Ok(t)
}
