//! ahtone CLI - renders a synthetic vowel "ah" to a WAV file
//!
//! Takes no options: running the binary synthesizes the built-in voice and
//! writes it to `public/sounds/human_ah.wav` under the working directory.

use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

use ahtone_cli::{commands, DEFAULT_OUTPUT_PATH};

/// ahtone - procedural "ah" tone generator
#[derive(Parser)]
#[command(name = "ahtone")]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    match commands::generate::run(Path::new(DEFAULT_OUTPUT_PATH)) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(commands::generate::exit_status_for_error(&e))
        }
    }
}
