//! Free-energy comparison of saved images and samples
//!
//! Usage:
//!   cargo run --example fes_compare --release -- [OPTIONS]
//!
//! Options:
//!   -i, --images <FILE>     Saved images [default: images.txt]
//!   -s, --samples <FILE>    Saved samples [default: samples.txt]
//!   -k, --kt <KT>           kT used for the FES [default: 2.494339]
//!   -o, --output <FILE>     Output table [default: fes_compare.txt]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use double_well_mcmc::analysis::{compare_fes, linspace, normalized_kde, ComparisonTable, DEFAULT_DENSITY_FLOOR, DEFAULT_FES_KT};
use double_well_mcmc::io::{read_images, read_samples, write_table};

/// Compare FES curves of the data and of each sampled coordinate
#[derive(Parser, Debug)]
#[command(version, about = "FES comparison of images and dual-coordinate samples")]
struct Args {
    #[arg(short, long, default_value = "images.txt")]
    images: PathBuf,

    #[arg(short, long, default_value = "samples.txt")]
    samples: PathBuf,

    #[arg(short, long, default_value_t = DEFAULT_FES_KT)]
    kt: f64,

    #[arg(long, default_value_t = -6.0, allow_negative_numbers = true)]
    grid_min: f64,

    #[arg(long, default_value_t = 6.0)]
    grid_max: f64,

    #[arg(long, default_value_t = 100)]
    grid_points: usize,

    #[arg(short, long, default_value = "fes_compare.txt")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let images = read_images(&args.images)
        .with_context(|| format!("reading {}", args.images.display()))?;
    let samples = read_samples(&args.samples)
        .with_context(|| format!("reading {}", args.samples.display()))?;
    println!("Loaded {} images and {} samples", images.len(), samples.len());

    let x1: Vec<f64> = samples.iter().map(|x| x[0]).collect();
    let x2: Vec<f64> = samples.iter().map(|x| x[1]).collect();
    let grid = linspace(args.grid_min, args.grid_max, args.grid_points);

    let dists = [("x1", x1.as_slice()), ("x2", x2.as_slice())];
    let fes = compare_fes(&grid, &images, &dists, args.kt, DEFAULT_DENSITY_FLOOR)?;
    write_table(&args.output, &fes)?;

    // Normalized densities alongside, for shape comparison
    let mut kde = ComparisonTable::new("x", grid.clone());
    kde.push("ref", normalized_kde(&images, &grid)?)?;
    for (name, data) in dists {
        kde.push(name, normalized_kde(data, &grid)?)?;
    }
    let kde_path = args.output.with_extension("kde.txt");
    write_table(&kde_path, &kde)?;

    println!("FES table written to {}", args.output.display());
    println!("Normalized KDE table written to {}", kde_path.display());
    Ok(())
}
