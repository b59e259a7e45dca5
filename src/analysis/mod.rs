//! Analysis module - density, free-energy and histogram views of samples.

mod kde;
mod fes;
mod histogram;
mod compare;

pub use kde::GaussianKde;
pub use fes::{density_to_fes, kde_fes, linspace, normalized_kde, DEFAULT_DENSITY_FLOOR, DEFAULT_FES_KT};
pub use histogram::Histogram;
pub use compare::{compare_fes, compare_hist, ComparisonTable};
