//! Coulomb potential-energy terms in atomic units.

use log::debug;
use nalgebra::{DMatrix, DVector, Vector3};

use crate::error::{HamiltonianError, Result};

/// Electron-electron repulsion Σᵢ<ⱼ 1 / r_ee[(i, j)].
///
/// `r_ee` is the n_e × n_e electron distance matrix; only the strict
/// upper triangle is read.
pub fn potential_electron_electron(r_ee: &DMatrix<f64>) -> Result<f64> {
    if !r_ee.is_square() {
        return Err(HamiltonianError::shape("r_ee columns", r_ee.nrows(), r_ee.ncols()));
    }
    let n = r_ee.nrows();
    let v: f64 = (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
        .map(|(i, j)| 1.0 / r_ee[(i, j)])
        .sum();
    debug!("V_ee = {:.8} ({} electrons)", v, n);
    Ok(v)
}

/// Electron-nuclear attraction -Σᵢⱼ Zⱼ / r_ne[(i, j)].
///
/// `r_ne` is n_e × n_atoms; `charges` has one entry per atom.
pub fn potential_electron_nuclear(charges: &DVector<f64>, r_ne: &DMatrix<f64>) -> Result<f64> {
    if r_ne.ncols() != charges.len() {
        return Err(HamiltonianError::shape("r_ne columns", charges.len(), r_ne.ncols()));
    }
    let v = -r_ne
        .row_iter()
        .map(|row| row.iter().zip(charges.iter()).map(|(r, z)| z / r).sum::<f64>())
        .sum::<f64>();
    debug!("V_ne = {:.8}", v);
    Ok(v)
}

/// Nuclear-nuclear repulsion Σᵢ<ⱼ ZᵢZⱼ / |Rᵢ - Rⱼ|.
pub fn potential_nuclear_nuclear(charges: &DVector<f64>, atoms: &[Vector3<f64>]) -> Result<f64> {
    if atoms.len() != charges.len() {
        return Err(HamiltonianError::shape("atom positions", charges.len(), atoms.len()));
    }
    let n = atoms.len();
    let v: f64 = (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
        .map(|(i, j)| charges[i] * charges[j] / (atoms[i] - atoms[j]).norm())
        .sum();
    debug!("V_nn = {:.8}", v);
    Ok(v)
}

/// Total potential energy V_ee + V_ne + V_nn for one electron configuration.
pub fn potential_energy(
    r_ne: &DMatrix<f64>,
    r_ee: &DMatrix<f64>,
    atoms: &[Vector3<f64>],
    charges: &DVector<f64>,
) -> Result<f64> {
    if r_ee.nrows() != r_ne.nrows() {
        return Err(HamiltonianError::shape("r_ne rows", r_ee.nrows(), r_ne.nrows()));
    }
    Ok(potential_electron_electron(r_ee)?
        + potential_electron_nuclear(charges, r_ne)?
        + potential_nuclear_nuclear(charges, atoms)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_electron_electron_upper_triangle_only() {
        // Lower triangle and diagonal deliberately hold garbage.
        let r_ee = DMatrix::from_row_slice(
            3,
            3,
            &[0.0, 2.0, 4.0, 99.0, 0.0, 0.5, -1.0, 7.0, 0.0],
        );
        let v = potential_electron_electron(&r_ee).unwrap();
        assert_relative_eq!(v, 0.5 + 0.25 + 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_electron_electron_degenerate_sizes() {
        assert_eq!(potential_electron_electron(&DMatrix::zeros(0, 0)).unwrap(), 0.0);
        assert_eq!(potential_electron_electron(&DMatrix::zeros(1, 1)).unwrap(), 0.0);
        assert!(potential_electron_electron(&DMatrix::zeros(2, 3)).is_err());
    }

    #[test]
    fn test_electron_nuclear() {
        let charges = DVector::from_vec(vec![1.0, 3.0]);
        let r_ne = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 0.5, 3.0]);
        let v = potential_electron_nuclear(&charges, &r_ne).unwrap();
        assert_relative_eq!(v, -(1.0 + 1.5 + 2.0 + 1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_electron_nuclear_shape_mismatch() {
        let charges = DVector::from_vec(vec![1.0, 3.0, 2.0]);
        let r_ne = DMatrix::from_element(2, 2, 1.0);
        assert_eq!(
            potential_electron_nuclear(&charges, &r_ne),
            Err(HamiltonianError::ShapeMismatch { what: "r_ne columns", expected: 3, found: 2 })
        );
    }

    #[test]
    fn test_nuclear_nuclear_h2o_like() {
        let charges = DVector::from_vec(vec![8.0, 1.0, 1.0]);
        let atoms = vec![
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 2.0, 0.0),
        ];
        let v = potential_nuclear_nuclear(&charges, &atoms).unwrap();
        let expected = 8.0 / 1.0 + 8.0 / 2.0 + 1.0 / 5.0_f64.sqrt();
        assert_relative_eq!(v, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_nuclear_nuclear_single_atom_is_zero() {
        let charges = DVector::from_vec(vec![2.0]);
        let v = potential_nuclear_nuclear(&charges, &[Vector3::zeros()]).unwrap();
        assert_eq!(v, 0.0);
    }

    #[test]
    fn test_coincident_nuclei_are_infinite() {
        let charges = DVector::from_vec(vec![1.0, 1.0]);
        let atoms = vec![Vector3::zeros(), Vector3::zeros()];
        let v = potential_nuclear_nuclear(&charges, &atoms).unwrap();
        assert!(v.is_infinite());
    }

    #[test]
    fn test_potential_energy_is_sum_of_terms() {
        let charges = DVector::from_vec(vec![1.0, 1.0]);
        let atoms = vec![Vector3::new(0.0, 0.0, -0.7), Vector3::new(0.0, 0.0, 0.7)];
        let r_ee = DMatrix::from_row_slice(2, 2, &[0.0, 1.3, 1.3, 0.0]);
        let r_ne = DMatrix::from_row_slice(2, 2, &[0.5, 1.2, 0.9, 0.6]);

        let total = potential_energy(&r_ne, &r_ee, &atoms, &charges).unwrap();
        let parts = potential_electron_electron(&r_ee).unwrap()
            + potential_electron_nuclear(&charges, &r_ne).unwrap()
            + potential_nuclear_nuclear(&charges, &atoms).unwrap();
        assert_relative_eq!(total, parts, epsilon = 1e-12);
        assert_relative_eq!(parts, 1.0 / 1.3 - (2.0 + 1.0 / 1.2 + 1.0 / 0.9 + 1.0 / 0.6) + 1.0 / 1.4, epsilon = 1e-12);
    }

    #[test]
    fn test_potential_energy_electron_count_mismatch() {
        let charges = DVector::from_vec(vec![1.0]);
        let atoms = vec![Vector3::zeros()];
        let r_ee = DMatrix::zeros(2, 2);
        let r_ne = DMatrix::from_element(3, 1, 1.0);
        assert!(potential_energy(&r_ne, &r_ee, &atoms, &charges).is_err());
    }
}
