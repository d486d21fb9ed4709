use std::process;

use clap::Parser;
use log::{error, info, LevelFilter};
use rust_hamiltonian::hamiltonian::HA_TO_EV;
use rust_hamiltonian::io::read_configuration;

#[derive(Parser, Debug)]
#[command(version, about = "Evaluate electronic Hamiltonian terms for a trial wavefunction", long_about = None)]
struct Args {
    /// YAML file with nuclei, electron positions and wavefunction
    #[arg(short, long, default_value = "config.yml")]
    config: String,

    /// Print the result as YAML instead of a table
    #[arg(long)]
    yaml: bool,

    /// Enable debug logging of every term
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp_millis()
        .init();

    let config = match read_configuration(&args.config) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load {}: {}", args.config, e);
            process::exit(1);
        }
    };

    let result = match config.evaluate() {
        Ok(result) => result,
        Err(e) => {
            error!("Evaluation failed: {}", e);
            process::exit(1);
        }
    };
    info!("Evaluated {} electrons", config.electrons.len());

    if args.yaml {
        match serde_yaml::to_string(&result) {
            Ok(text) => print!("{}", text),
            Err(e) => {
                error!("Failed to serialize result: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    println!("Hamiltonian terms");
    println!("----------------------------------------");
    println!("{:<18} {:>14.8}", "-Laplacian(psi)", result.kinetic_laplacian);
    print!("{}", result.energies);
    println!("----------------------------------------");
    println!(
        "Total energy: {:.6} Ha ({:.4} eV)",
        result.energies.total,
        result.energies.total * HA_TO_EV
    );
}
