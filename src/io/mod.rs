//! IO module - run configuration and array files.

mod config;
mod arrays;

pub use config::{read_config, GridConfig, RunConfig};
pub use arrays::{read_images, read_samples, write_images, write_samples, write_table};
