// Entrypoint for the CLI application.
// - Keeps `main` small: read the credential, build an API client and
//   hand both to the selected command handler.
// - A missing credential is the only condition that exits non-zero;
//   remote failures are reported by the handlers and leave exit code 0.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use apollo_cli::api::{read_api_key, ApiClient, API_KEY_FILE, DEFAULT_BASE_URL};
use apollo_cli::cli::{Cli, Commands};
use apollo_cli::commands::{run_company, run_create, run_enrich, run_upload};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // The credential is read once, before any network activity.
    let api_key = match read_api_key(Path::new(API_KEY_FILE)) {
        Ok(key) => key,
        Err(err) => {
            log::error!("Exiting due to missing API key file.");
            eprintln!("Error: {err:#}");
            return ExitCode::from(1);
        }
    };

    let api = match ApiClient::new(DEFAULT_BASE_URL, &api_key) {
        Ok(api) => api,
        Err(err) => {
            log::error!("{err:#}");
            eprintln!("Error: {err:#}");
            return ExitCode::from(1);
        }
    };

    match &cli.command {
        Commands::Company { query } => run_company(&api, query),
        Commands::Create { name, email, company } => run_create(&api, name, email, company),
        Commands::Upload { kind, file } => run_upload(&api, kind, file),
        Commands::Enrich { domains } => run_enrich(&api, domains),
    }

    ExitCode::SUCCESS
}
