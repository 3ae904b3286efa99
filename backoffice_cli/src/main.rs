//! The backoffice administration CLI's entry point.

use backoffice_cli::cli::CliArgs;
use backoffice_cli::logic;
use clap::error::ErrorKind;
use clap::Parser;
use std::env;
use std::process;

/// Exit status is 0 on a reported success, 1 on any validation failure or
/// backend failure.
#[tokio::main]
async fn main() {
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "backoffice=info");
    }
    pretty_env_logger::init();

    // Argument errors exit with status 1, not clap's default of 2.
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            process::exit(code);
        }
    };

    if let Err(e) = logic::run(args).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
