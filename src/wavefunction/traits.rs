//! Wave function trait for Hamiltonian evaluation.
//!
//! A `Wavefunction` maps a flat coordinate vector to a scalar amplitude.
//! For electrons in 3D the layout is `[x₀, y₀, z₀, x₁, y₁, z₁, ...]`.

use nalgebra::DVector;

use crate::autodiff::DualNum;

/// Scalar wavefunction ψ(x), generic over the number type so it can be
/// differentiated exactly by [`crate::autodiff`].
pub trait Wavefunction {
    /// Number of coordinates ψ expects.
    fn ndim(&self) -> usize;

    /// Evaluate ψ at `x`.
    fn evaluate<T: DualNum<f64> + Copy>(&self, x: &[T]) -> T;

    /// Numerical Laplacian using central difference.
    fn numerical_laplacian(&self, x: &DVector<f64>, h: f64) -> f64 {
        let psi = self.evaluate(x.as_slice());
        let mut laplacian = 0.0;
        for axis in 0..x.len() {
            let mut x_fwd = x.clone();
            let mut x_bwd = x.clone();
            x_fwd[axis] += h;
            x_bwd[axis] -= h;
            laplacian += (self.evaluate(x_fwd.as_slice()) - 2.0 * psi
                + self.evaluate(x_bwd.as_slice()))
                / (h * h);
        }
        laplacian
    }

    /// Numerical gradient using central difference.
    fn numerical_gradient(&self, x: &DVector<f64>, h: f64) -> DVector<f64> {
        let mut grad = DVector::zeros(x.len());
        for axis in 0..x.len() {
            let mut x_fwd = x.clone();
            let mut x_bwd = x.clone();
            x_fwd[axis] += h;
            x_bwd[axis] -= h;
            grad[axis] =
                (self.evaluate(x_fwd.as_slice()) - self.evaluate(x_bwd.as_slice())) / (2.0 * h);
        }
        grad
    }
}
