//! Particle in a hard-walled box: the analytically solvable reference case.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::traits::Wavefunction;
use crate::autodiff::DualNum;

/// ψ(x) = Πᵢ sin(nᵢ π xᵢ / Lᵢ), unnormalised.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ParticleInBox {
    /// Box edge length along each axis
    pub lengths: Vec<f64>,
    /// Quantum number along each axis
    pub quantum_numbers: Vec<u32>,
}

impl ParticleInBox {
    pub fn new(lengths: Vec<f64>, quantum_numbers: Vec<u32>) -> Self {
        Self { lengths, quantum_numbers }
    }

    /// ψ(x, y, z) = sin(x) sin(y) sin(z): nᵢ = 1 with every constant folded to one.
    pub fn unit() -> Self {
        Self::new(vec![PI; 3], vec![1; 3])
    }

    /// Wave number kᵢ = nᵢ π / Lᵢ along each axis.
    pub fn wave_numbers(&self) -> Vec<f64> {
        self.lengths
            .iter()
            .zip(&self.quantum_numbers)
            .map(|(l, &n)| n as f64 * PI / l)
            .collect()
    }

    /// -∇²ψ / ψ = Σᵢ kᵢ²; independent of position.
    pub fn eigenvalue(&self) -> f64 {
        self.wave_numbers().iter().map(|k| k * k).sum()
    }
}

impl Wavefunction for ParticleInBox {
    fn ndim(&self) -> usize {
        self.lengths.len()
    }

    fn evaluate<T: DualNum<f64> + Copy>(&self, x: &[T]) -> T {
        self.wave_numbers()
            .into_iter()
            .zip(x)
            .fold(T::one(), |acc, (k, &xi)| acc * (xi * k).sin())
    }
}
