//! Nuclear framework and pair-distance tensors.

use nalgebra::{DMatrix, DVector, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::{HamiltonianError, Result};

/// Point nucleus with charge `charge` (atomic units).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Atom {
    pub position: Vector3<f64>,
    pub charge: f64,
}

/// Fixed set of clamped nuclei.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Molecule {
    pub atoms: Vec<Atom>,
}

impl Molecule {
    pub fn new(atoms: Vec<Atom>) -> Self {
        Self { atoms }
    }

    /// Single nucleus of charge `z` at the origin.
    pub fn atom(z: f64) -> Self {
        Self::new(vec![Atom { position: Vector3::zeros(), charge: z }])
    }

    pub fn num_atoms(&self) -> usize {
        self.atoms.len()
    }

    pub fn positions(&self) -> Vec<Vector3<f64>> {
        self.atoms.iter().map(|a| a.position).collect()
    }

    pub fn charges(&self) -> DVector<f64> {
        DVector::from_iterator(self.atoms.len(), self.atoms.iter().map(|a| a.charge))
    }

    /// Total nuclear charge.
    pub fn total_charge(&self) -> f64 {
        self.atoms.iter().map(|a| a.charge).sum()
    }
}

/// r_ee[(i, j)] = |rᵢ - rⱼ|.
pub fn electron_electron_distances(electrons: &[Vector3<f64>]) -> DMatrix<f64> {
    let n = electrons.len();
    DMatrix::from_fn(n, n, |i, j| (electrons[i] - electrons[j]).norm())
}

/// r_ne[(i, j)] = |rᵢ - Rⱼ| for electron i and atom j.
pub fn electron_nuclear_distances(
    electrons: &[Vector3<f64>],
    atoms: &[Vector3<f64>],
) -> DMatrix<f64> {
    DMatrix::from_fn(electrons.len(), atoms.len(), |i, j| {
        (electrons[i] - atoms[j]).norm()
    })
}

/// Split `[x₀, y₀, z₀, x₁, ...]` into 3-vectors.
pub fn unflatten(x: &[f64]) -> Result<Vec<Vector3<f64>>> {
    if x.len() % 3 != 0 {
        return Err(HamiltonianError::BadCoordinateLength(x.len()));
    }
    Ok(x.chunks_exact(3).map(Vector3::from_column_slice).collect())
}

/// Inverse of [`unflatten`].
pub fn flatten(r: &[Vector3<f64>]) -> DVector<f64> {
    DVector::from_iterator(3 * r.len(), r.iter().flat_map(|ri| ri.iter().copied()))
}
