//! Exact derivatives of wavefunctions via `num_dual`.
//!
//! Wavefunctions are written once against [`DualNum`]; evaluating them on
//! dual numbers yields gradients, Hessians and Laplacians without
//! truncation error.

mod derivatives;

pub use derivatives::{gradient, hessian, laplacian, value_and_laplacian};
pub use num_dual::DualNum;
