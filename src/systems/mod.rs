//! Systems module - nuclear frameworks and particle geometry.

mod molecule;

pub use molecule::{
    electron_electron_distances, electron_nuclear_distances, flatten, unflatten, Atom, Molecule,
};
