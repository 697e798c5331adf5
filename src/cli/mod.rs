//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod auth;
pub mod context;
pub mod dashboard;
pub mod resource;
pub mod status;

pub use args::{DataArg, GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// slotctl - console for the logistics appointment platform
#[derive(Parser, Debug)]
#[command(name = "slotctl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "SLOTCTL_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "SLOTCTL_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override session file location
    #[arg(long, global = true, env = "SLOTCTL_SESSION", hide_env = true)]
    pub session: Option<String>,

    /// API base URL (default http://localhost:5000/api/v1)
    #[arg(long, global = true, env = "SLOTCTL_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "SLOTCTL_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store the session
    Login {
        /// Account email (prompted when omitted)
        #[arg(long, short = 'e')]
        email: Option<String>,

        /// Password (prompted when omitted)
        #[arg(long, env = "SLOTCTL_PASSWORD", hide_env = true)]
        password: Option<String>,
    },

    /// Create an account and store the session
    Register {
        /// Display name (prompted when omitted)
        #[arg(long)]
        name: Option<String>,

        /// Account email (prompted when omitted)
        #[arg(long, short = 'e')]
        email: Option<String>,

        /// Password (prompted when omitted)
        #[arg(long, env = "SLOTCTL_PASSWORD", hide_env = true)]
        password: Option<String>,

        /// Requested role
        #[arg(long)]
        role: Option<String>,
    },

    /// Clear the stored session
    Logout,

    /// Show session and API status
    Status,

    /// Overview of partners, hubs, slots and appointments
    Dashboard,

    /// Show which command renders a console page, e.g. `/partners`
    Open {
        /// Page path
        path: String,
    },

    /// Manage appointments
    #[command(subcommand, visible_alias = "appt")]
    Appointment(ResourceCommands),

    /// Manage partners
    #[command(subcommand)]
    Partner(ResourceCommands),

    /// Manage hubs
    #[command(subcommand)]
    Hub(ResourceCommands),

    /// Manage time slots
    #[command(subcommand)]
    Slot(ResourceCommands),

    /// Display version information
    Version,

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   slotctl completion bash > /etc/bash_completion.d/slotctl
  zsh:    slotctl completion zsh > \"${fpath[1]}/_slotctl\"
  fish:   slotctl completion fish > ~/.config/fish/completions/slotctl.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// CRUD subcommands shared by every collection
#[derive(Subcommand, Debug)]
pub enum ResourceCommands {
    /// List all records
    #[command(visible_alias = "ls")]
    List {
        /// Show at most this many records
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Show one record
    Get {
        /// Record ID
        id: String,
    },

    /// Create a record from a JSON payload
    Create {
        /// JSON payload, or @path to a JSON file
        #[arg(long, short = 'd')]
        data: DataArg,
    },

    /// Update a record from a JSON payload
    Update {
        /// Record ID
        id: String,

        /// JSON payload, or @path to a JSON file
        #[arg(long, short = 'd')]
        data: DataArg,
    },

    /// Delete a record
    #[command(visible_alias = "rm")]
    Delete {
        /// Record ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_resource_create() {
        let cli = Cli::try_parse_from([
            "slotctl",
            "hub",
            "create",
            "--data",
            r#"{"name":"North"}"#,
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Hub(ResourceCommands::Create { data }) => {
                assert!(data.0.contains("North"))
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_open() {
        let cli = Cli::try_parse_from(["slotctl", "open", "/hubs"]).unwrap();
        assert!(matches!(cli.command, Commands::Open { ref path } if path == "/hubs"));
    }

    #[test]
    fn test_parse_alias() {
        let cli = Cli::try_parse_from(["slotctl", "appt", "rm", "a-1", "-y"]).unwrap();
        match cli.command {
            Commands::Appointment(ResourceCommands::Delete { id, yes }) => {
                assert_eq!(id, "a-1");
                assert!(yes);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
