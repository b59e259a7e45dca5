//! Data module - synthetic datasets for the double-well problem.

mod generator;

pub use generator::generate_images;
