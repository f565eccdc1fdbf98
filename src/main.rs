mod api;
mod cli_messages;
mod commands;
mod config;
mod consts;
mod controller;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod session;
mod ui;
mod view;

use crate::api::{FraudApi, FraudApiClient};
use crate::config::{API_URL_ENV_VAR, Config, get_config_path};
use crate::consts::cli_consts::refresh::stats_refresh_interval;
use crate::environment::Environment;
use crate::logging::init_stderr_logger;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{ArgAction, Parser, Subcommand};
use std::error::Error;
use std::path::Path;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about = "Terminal dashboard for a fraud detection service", long_about = None)]
/// Command-line arguments
struct Args {
    /// Base URL of the fraud detection service. Overrides FRAUDWATCH_API_URL
    /// and the config file.
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard
    Start {
        /// Run without the terminal UI and print events instead
        #[arg(long, action = ArgAction::SetTrue)]
        headless: bool,

        /// Paint the dashboard background
        #[arg(long = "with-background", action = ArgAction::SetTrue)]
        with_background: bool,

        /// Seconds between statistics refreshes
        #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
        refresh_secs: Option<u64>,
    },
    /// Classify a single transaction
    Predict {
        /// Transaction amount
        #[arg(long, value_name = "AMOUNT", allow_hyphen_values = true)]
        amount: String,
    },
    /// Show aggregate statistics
    Stats,
    /// List recorded transactions
    History {
        /// Only the five most recent transactions
        #[arg(long, action = ArgAction::SetTrue)]
        recent: bool,
    },
    /// Delete every recorded transaction on the server
    ClearHistory,
    /// Save the service URL in the config file
    SetServer {
        /// `local` or an http(s):// URL
        #[arg(value_name = "URL")]
        url: String,
    },
    /// Delete the config file
    Reset,
}

fn resolve_environment(config: &Config, flag: Option<&str>) -> Result<Environment, Box<dyn Error>> {
    let env_var = std::env::var(API_URL_ENV_VAR).ok();
    Ok(config.resolve_environment(flag, env_var.as_deref())?)
}

fn load_config(config_path: &Path) -> Config {
    match Config::load_or_default(config_path) {
        Ok(config) => config,
        Err(e) => {
            print_cmd_warn!("Ignoring unreadable config file.", "{}", e);
            Config::default()
        }
    }
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config_path = get_config_path()?;

    match args.command {
        Command::Start {
            headless,
            with_background,
            refresh_secs,
        } => {
            let config = load_config(&config_path);
            let environment = resolve_environment(&config, args.api_url.as_deref())?;
            let stats_interval = refresh_secs
                .or(config.stats_refresh_secs)
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or_else(stats_refresh_interval);
            let session = setup_session(environment, stats_interval)?;
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, with_background).await
            }
        }
        Command::SetServer { url } => match commands::set_server(&url, &config_path) {
            Ok(environment) => {
                print_cmd_success!("Server saved.", "{}", environment.api_url());
                Ok(())
            }
            Err(e) => {
                print_cmd_error!("Failed to save server.", "{}", e);
                Err(e)
            }
        },
        Command::Reset => {
            commands::reset(&config_path)?;
            print_cmd_success!("Configuration cleared.", "{}", config_path.display());
            Ok(())
        }
        command => {
            init_stderr_logger();
            let config = load_config(&config_path);
            let environment = resolve_environment(&config, args.api_url.as_deref())?;
            let api = FraudApiClient::new(environment)?;
            if let Err(e) = run_api_command(&api, command).await {
                print_cmd_error!("Request failed.", "{}", e);
                return Err(e);
            }
            Ok(())
        }
    }
}

/// Commands that only talk to the fraud API.
async fn run_api_command(api: &dyn FraudApi, command: Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Predict { amount } => {
            let panel = commands::predict(api, &amount).await?;
            print_lines(&commands::result_lines(&panel));
        }
        Command::Stats => {
            let panel = commands::stats(api).await?;
            print_lines(&commands::stats_lines(&panel));
        }
        Command::History { recent } => {
            let transactions = commands::history(api).await?;
            if recent {
                print_lines(&commands::recent_lines(&transactions));
            } else {
                print_lines(&commands::history_lines(&transactions));
            }
        }
        Command::ClearHistory => {
            print_cmd_info!("Clearing history.", "{}", api.environment().api_url());
            commands::clear_history(api).await?;
            print_cmd_success!("History cleared.", "{}", api.environment().api_url());
        }
        Command::Start { .. } | Command::SetServer { .. } | Command::Reset => {}
    }
    Ok(())
}
