//! Gradient, Hessian and Laplacian of a wavefunction, returned as nalgebra types.
//!
//! Each entry is one `num_dual` forward pass with every other coordinate
//! held constant.

use nalgebra::{DMatrix, DVector};
use num_dual::{
    first_derivative, second_derivative, second_partial_derivative, Dual2_64, Dual64, DualNum,
    HyperDual64,
};

use crate::error::{HamiltonianError, Result};
use crate::wavefunction::Wavefunction;

fn check_dimension<W: Wavefunction>(psi: &W, x: &DVector<f64>) -> Result<()> {
    if x.len() != psi.ndim() {
        return Err(HamiltonianError::shape("wavefunction coordinates", psi.ndim(), x.len()));
    }
    Ok(())
}

/// Copy of `x` as constants of type `T`, with `vary` substituted at the listed axes.
fn lift<T: DualNum<f64> + Copy>(x: &DVector<f64>, vary: &[(usize, T)]) -> Vec<T> {
    let mut lifted: Vec<T> = x.iter().map(|&xk| <T as From<f64>>::from(xk)).collect();
    for &(axis, value) in vary {
        lifted[axis] = value;
    }
    lifted
}

/// ∇ψ(x), one forward pass per coordinate.
pub fn gradient<W: Wavefunction>(psi: &W, x: &DVector<f64>) -> Result<DVector<f64>> {
    check_dimension(psi, x)?;
    Ok(DVector::from_iterator(
        x.len(),
        (0..x.len()).map(|i| {
            let (_, d) = first_derivative(|t: Dual64| psi.evaluate(&lift(x, &[(i, t)])), x[i]);
            d
        }),
    ))
}

/// Full Hessian ∂²ψ/∂xᵢ∂xⱼ.
///
/// Each upper-triangle entry costs one forward pass; the lower triangle is
/// mirrored so the result is exactly symmetric.
pub fn hessian<W: Wavefunction>(psi: &W, x: &DVector<f64>) -> Result<DMatrix<f64>> {
    check_dimension(psi, x)?;
    let n = x.len();
    let mut h = DMatrix::zeros(n, n);
    for i in 0..n {
        let (_, _, hii) =
            second_derivative(|t: Dual2_64| psi.evaluate(&lift(x, &[(i, t)])), x[i]);
        h[(i, i)] = hii;
        for j in (i + 1)..n {
            let (_, _, _, hij) = second_partial_derivative(
                |(s, t): (HyperDual64, HyperDual64)| psi.evaluate(&lift(x, &[(i, s), (j, t)])),
                (x[i], x[j]),
            );
            h[(i, j)] = hij;
            h[(j, i)] = hij;
        }
    }
    Ok(h)
}

/// ∇²ψ(x): the trace of the Hessian, computed from its diagonal only.
pub fn laplacian<W: Wavefunction>(psi: &W, x: &DVector<f64>) -> Result<f64> {
    Ok(value_and_laplacian(psi, x)?.1)
}

/// ψ(x) and ∇²ψ(x) from the same diagonal passes.
pub fn value_and_laplacian<W: Wavefunction>(psi: &W, x: &DVector<f64>) -> Result<(f64, f64)> {
    check_dimension(psi, x)?;
    let mut value = psi.evaluate(x.as_slice());
    let mut lap = 0.0;
    for i in 0..x.len() {
        let (v, _, d2) =
            second_derivative(|t: Dual2_64| psi.evaluate(&lift(x, &[(i, t)])), x[i]);
        value = v;
        lap += d2;
    }
    Ok((value, lap))
}
