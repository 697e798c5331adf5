//! slotctl - console for the logistics appointment platform

use std::io;

use clap::{CommandFactory, Parser};

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod session;

use cli::{Cli, Commands, GlobalOptions};
use client::{Appointments, Hubs, Partners, Slots};
use error::{Result, describe_error};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", describe_error(&err));
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Login { email, password } => cli::auth::login(&opts, email, password).await,
        Commands::Register {
            name,
            email,
            password,
            role,
        } => cli::auth::register(&opts, name, email, password, role).await,
        Commands::Logout => cli::auth::logout(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Dashboard => cli::dashboard::run(&opts).await,
        Commands::Open { path } => cli::status::open(&opts, &path),
        Commands::Appointment(cmd) => cli::resource::run::<Appointments>(&opts, cmd).await,
        Commands::Partner(cmd) => cli::resource::run::<Partners>(&opts, cmd).await,
        Commands::Hub(cmd) => cli::resource::run::<Hubs>(&opts, cmd).await,
        Commands::Slot(cmd) => cli::resource::run::<Slots>(&opts, cmd).await,
        Commands::Version => {
            println!("slotctl version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "slotctl", &mut io::stdout());
            Ok(())
        }
    }
}
