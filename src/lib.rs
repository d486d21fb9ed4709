//! Rust Hamiltonian - electronic Hamiltonian terms for QMC wavefunctions
//!
//! This crate evaluates the kinetic and Coulomb potential contributions of
//! the electronic Hamiltonian for a trial wavefunction, for use by
//! variational Monte Carlo and neural-network quantum-state methods. The
//! kinetic term is the trace of the Hessian of ψ, obtained exactly with
//! the dual numbers of `num_dual`.

pub mod autodiff;
pub mod error;
pub mod hamiltonian;
pub mod io;
pub mod systems;
pub mod wavefunction;

// Re-export commonly used types at crate root
pub use autodiff::{gradient, hessian, laplacian, DualNum};
pub use error::{ConfigError, HamiltonianError};
pub use hamiltonian::{
    kinetic, local_energy, local_kinetic_energy, potential_electron_electron,
    potential_electron_nuclear, potential_energy, potential_nuclear_nuclear, EnergyComponents,
};
pub use io::{read_configuration, Configuration};
pub use systems::{electron_electron_distances, electron_nuclear_distances, Atom, Molecule};
pub use wavefunction::{ParticleInBox, SlaterProduct, Wavefunction};

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::{DVector, Vector3};
    use rand_distr::{Distribution, Normal};

    use crate::autodiff::{gradient, hessian, DualNum};
    use crate::hamiltonian::{kinetic, local_energy, potential_energy};
    use crate::systems::{electron_electron_distances, electron_nuclear_distances, Atom, Molecule};
    use crate::wavefunction::{ParticleInBox, SlaterProduct, Wavefunction};

    /// ψ(x) = sin(x) sin(y) sin(z)
    struct BoxWavefunction;

    impl Wavefunction for BoxWavefunction {
        fn ndim(&self) -> usize {
            3
        }

        fn evaluate<T: DualNum<f64> + Copy>(&self, x: &[T]) -> T {
            x.iter().fold(T::one(), |acc, &xi| acc * xi.sin())
        }
    }

    #[test]
    fn test_kinetic_energy_box() {
        let mut rng = rand::thread_rng();
        let dist = Normal::new(0.0, 1.0).unwrap();
        let x = DVector::<f64>::from_distribution(3, &dist, &mut rng);

        let psi = BoxWavefunction.evaluate(x.as_slice());
        let actual_kinetic_energy = kinetic(&BoxWavefunction, &x).unwrap();
        let expected_kinetic_energy = 3.0 * psi;

        assert_relative_eq!(expected_kinetic_energy, actual_kinetic_energy, epsilon = 1e-10);
    }

    #[test]
    fn test_unit_box_matches_handwritten_box() {
        let mut rng = rand::thread_rng();
        let dist = Normal::new(0.0, 1.0).unwrap();
        let x = DVector::<f64>::from_distribution(3, &dist, &mut rng);

        let unit = ParticleInBox::unit();
        assert_relative_eq!(
            unit.evaluate(x.as_slice()),
            BoxWavefunction.evaluate(x.as_slice()),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            kinetic(&unit, &x).unwrap(),
            kinetic(&BoxWavefunction, &x).unwrap(),
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_excited_box_kinetic() {
        let psi = ParticleInBox::new(vec![1.0, 1.5, 2.0], vec![2, 1, 3]);
        let x = DVector::from_vec(vec![0.13, 0.61, 0.37]);
        let value = psi.evaluate(x.as_slice());
        assert_relative_eq!(kinetic(&psi, &x).unwrap(), psi.eigenvalue() * value, epsilon = 1e-8);
    }

    #[test]
    fn test_box_hessian_off_diagonal() {
        // ∂²/∂x∂y sin x sin y sin z = cos x cos y sin z
        let x = DVector::from_vec(vec![0.4, -0.3, 1.2]);
        let h = hessian(&BoxWavefunction, &x).unwrap();
        assert_relative_eq!(h[(0, 1)], 0.4_f64.cos() * (-0.3_f64).cos() * 1.2_f64.sin(), epsilon = 1e-12);
        assert_relative_eq!(h[(1, 0)], h[(0, 1)], epsilon = 0.0);
    }

    #[test]
    fn test_gradient_against_numerical() {
        let psi = SlaterProduct::new(Vector3::new(0.0, 0.1, -0.2), 1.7, 3);
        let mut rng = rand::thread_rng();
        let dist = Normal::new(0.0, 1.0).unwrap();
        let x = DVector::<f64>::from_distribution(9, &dist, &mut rng);

        let analytical = gradient(&psi, &x).unwrap();
        let numerical = psi.numerical_gradient(&x, 1e-5);
        for i in 0..x.len() {
            assert_relative_eq!(analytical[i], numerical[i], epsilon = 1e-5);
        }
    }

    #[test]
    fn test_local_energy_uses_potential_energy() {
        let molecule = Molecule::new(vec![
            Atom { position: Vector3::new(0.0, 0.0, -0.7), charge: 1.0 },
            Atom { position: Vector3::new(0.0, 0.0, 0.7), charge: 1.0 },
        ]);
        let electrons = vec![Vector3::new(0.2, 0.1, 0.5), Vector3::new(-0.3, -0.1, -0.4)];
        let psi = SlaterProduct::new(Vector3::zeros(), 1.2, 2);

        let e = local_energy(&psi, &molecule, &electrons).unwrap();
        let v = potential_energy(
            &electron_nuclear_distances(&electrons, &molecule.positions()),
            &electron_electron_distances(&electrons),
            &molecule.positions(),
            &molecule.charges(),
        )
        .unwrap();
        assert_relative_eq!(e.potential(), v, epsilon = 1e-12);
    }
}
