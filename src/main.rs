use std::process::ExitCode;

use clap::Parser;
use log::debug;

use paperdl::catalog::PaperApiClient;
use paperdl::cli::Cli;
use paperdl::commands;
use paperdl::config::{self, Environment};
use paperdl::ui;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let env = Environment::from_process();
    let client = PaperApiClient::new(config::api_base_url());

    match commands::download(&cli.request(), &env, &client).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            ui::error(&format!("{}, aborting.", e));
            debug!("{:?}", anyhow::Error::from(e));
            ExitCode::FAILURE
        }
    }
}
