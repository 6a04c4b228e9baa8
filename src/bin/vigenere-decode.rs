use std::io::{Write, stdout};

use clap::Parser;
use vigenere_decode::cli::{Cli, execute};
use vigenere_decode::logger::setup_logger;

fn main() {
    setup_logger();

    // Exits with status 2 and a usage message when an argument is missing
    let cli = Cli::parse();
    log::info!("[main] decoding with {:?} key mode", cli.key_mode());

    if let Err(e) = run(&cli) {
        log::error!("{e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let output = execute(cli)?;

    let mut out = stdout().lock();
    out.write_all(output.as_bytes())?;
    out.flush()?;
    Ok(())
}
