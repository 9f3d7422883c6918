use clap::{CommandFactory, Parser};
use flight_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // No arguments at all: show help rather than a missing-argument error
    if std::env::args_os().len() <= 1 {
        show_help();
        process::exit(0);
    }

    let args = Args::parse();

    match commands::run(args) {
        Ok(_summary) => {
            // Summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information when invoked without arguments
fn show_help() {
    let mut command = Args::command();
    if command.print_long_help().is_err() {
        eprintln!("Usage: flight-processor <INPUT> <OUTPUT>");
    }
    println!();
    println!();
    println!("EXAMPLES:");
    println!("    # Validate flights, rejected rows go to errors.csv beside the output:");
    println!("    flight-processor flights.csv valid.csv");
    println!();
    println!("    # Choose the error file and skip overwrite prompts:");
    println!("    flight-processor flights.csv out/valid.csv --errors out/rejected.csv --yes");
}
