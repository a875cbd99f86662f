use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};

use hospital_db::cli::Args;
use hospital_db::commands::CommandRunner;
use hospital_db::db::DatabaseConfig;
use hospital_db::logging;

fn run(args: Args) -> Result<String, Box<dyn std::error::Error>> {
    let config = DatabaseConfig::resolve(args.db.as_deref())?;
    debug!(?config, "opening database");
    let db = config.connect()?;
    args.command.run(&*db, args.format)
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
