//! Product of Slater 1s orbitals on a single nucleus.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::traits::Wavefunction;
use crate::autodiff::DualNum;

/// Ψ(r₁, …, rₙ) = Πᵢ exp(-ζ |rᵢ - R|).
///
/// Each electron sits in the same 1s orbital centered at `center`. With
/// ζ = Z this is the exact hydrogen ground state for one electron and the
/// independent-electron ground state otherwise.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SlaterProduct {
    /// Orbital center
    pub center: Vector3<f64>,
    /// Orbital exponent
    pub zeta: f64,
    /// Number of electrons
    pub num_electrons: usize,
}

impl SlaterProduct {
    pub fn new(center: Vector3<f64>, zeta: f64, num_electrons: usize) -> Self {
        Self { center, zeta, num_electrons }
    }
}

impl Wavefunction for SlaterProduct {
    fn ndim(&self) -> usize {
        3 * self.num_electrons
    }

    fn evaluate<T: DualNum<f64> + Copy>(&self, x: &[T]) -> T {
        // ln Ψ = -ζ Σᵢ |rᵢ - R|
        let radial_sum = x.chunks_exact(3).fold(T::zero(), |acc, r| {
            acc + orbital_radius(
                r[0] - self.center.x,
                r[1] - self.center.y,
                r[2] - self.center.z,
            )
        });
        (radial_sum * -self.zeta).exp()
    }
}

/// |r - R| for one electron.
///
/// The 1s cusp is not differentiable at the center itself. There the radius
/// is a constant zero, so the electron's own gradient is zero and the other
/// electrons' derivatives are unaffected.
fn orbital_radius<T: DualNum<f64> + Copy>(dx: T, dy: T, dz: T) -> T {
    let r2 = dx * dx + dy * dy + dz * dz;
    if r2.re() > 0.0 {
        r2.sqrt()
    } else {
        T::zero()
    }
}
