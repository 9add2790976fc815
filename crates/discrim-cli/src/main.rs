//! Command-line interface for the discriminant calculator

use clap::Parser;
use discrim_core::{CoefficientReader, DiscriminantEngine};
use std::io::{self, Write};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "discrim-cli")]
#[command(about = "Interactive discriminant calculator for quadratic equations", long_about = None)]
struct Args {}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    discrim_utils::init_tracing();

    let _args = Args::parse();

    info!("Starting discrim-cli");

    let mut stdout = io::stdout();
    writeln!(stdout, "=== Discriminant Calculator ===")?;

    let coefficients =
        CoefficientReader::new(io::stdin().lock(), &mut stdout).read_all()?;
    DiscriminantEngine::new(coefficients).report(&mut stdout)?;

    info!("Run complete");

    Ok(())
}
