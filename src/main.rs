mod cli;
mod commands;
mod config;
mod error;
mod export;
mod uberon;
mod utils;
mod vista;

use clap::Parser;

fn main() {
    let args = cli::Args::parse();

    let result = match args.command {
        cli::Commands::Extract {
            output_file,
            bed_dir,
            vista_file,
            liftover_bin,
            chain_file,
            force,
        } => commands::extract::run(
            output_file,
            bed_dir,
            vista_file,
            liftover_bin,
            chain_file,
            force,
        ),
        cli::Commands::Tissues { bed_file } => commands::tissues::run(bed_file),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
