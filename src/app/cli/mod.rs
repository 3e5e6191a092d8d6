//! CLI Adapter.

use crate::app::api::{self, StartOutcome};
use crate::app::commands::installer::LOGIN_USAGE;
use crate::domain::AppError;
use clap::{Parser, Subcommand};
use log::{LevelFilter, debug, error};

#[derive(Parser, Debug)]
#[command(name = "resoport")]
#[command(version)]
#[command(
    about = "Install, update and launch a portable Resonite through SteamCMD",
    long_about = None
)]
struct Cli {
    /// Show debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Update and validate the installed application
    #[clap(visible_alias = "u")]
    Update,
    /// Save the Steam username and log in through SteamCMD
    Login {
        /// Steam account name
        username: Option<String>,
        /// Steam password (never stored)
        password: Option<String>,
        /// Extra arguments are accepted and ignored
        #[arg(hide = true)]
        _rest: Vec<String>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!("Command: {}", command_name(cli.command.as_ref()));

    let result: Result<(), AppError> = match cli.command {
        None => run_start(),
        Some(Commands::Update) => run_update(),
        Some(Commands::Login { username, password, .. }) => run_login(username, password),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn command_name(command: Option<&Commands>) -> &'static str {
    match command {
        None => "start",
        Some(Commands::Update) => "update",
        Some(Commands::Login { .. }) => "login",
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

fn run_start() -> Result<(), AppError> {
    match api::start()? {
        StartOutcome::Installed => {
            println!("✅ Installed Resonite. Run resoport again to launch it.");
        }
        StartOutcome::Launched => {}
    }
    Ok(())
}

fn run_update() -> Result<(), AppError> {
    api::update()?;
    println!("✅ Resonite is up to date");
    Ok(())
}

fn run_login(username: Option<String>, password: Option<String>) -> Result<(), AppError> {
    let Some(username) = username else {
        error!("No username or password provided. Please provide at least a username.");
        error!("{}", LOGIN_USAGE);
        return Ok(());
    };

    api::login(&username, password.as_deref())?;
    println!("✅ Logged in as {}", username);
    Ok(())
}
