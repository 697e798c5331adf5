//! Status command implementation

use colored::Colorize;

use crate::cli::{CommandContext, GlobalOptions};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::session::{Route, SessionStore};

/// Run the status command to display API target and session state
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "slotctl Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    let ctx = CommandContext::new(opts)?;
    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not found, using defaults)".dimmed()
        );
    }

    println!("API URL: {}", ctx.client.base_url().cyan());

    let session_path = ctx.config.resolve_session_path(opts.session_ref())?;
    println!("Session file: {}", session_path.display().to_string().cyan());
    println!();

    let session = ctx.session.session();
    match (&session.token, &session.user) {
        (Some(_), Some(user)) => {
            println!(
                "{} Logged in as {} [{}]",
                "✓".green(),
                user.name.bold(),
                user.initials()
            );
            println!("  Email: {}", user.email);
            if !user.role.is_empty() {
                println!("  Role: {}", user.role);
            }
        }
        (Some(_), None) => {
            println!("{} Token stored but no user profile", "⚠".yellow());
        }
        (None, _) => {
            println!("{} Not logged in", "✗".red());
            println!("  → Run '{}' to sign in", Route::Login.command());
        }
    }
    println!();

    Ok(())
}

/// Resolve `path` to a view and apply the page guard.
///
/// Returns the requested view and the one the session actually lands on.
pub fn navigate(session: &SessionStore, path: &str) -> Result<(Route, Route)> {
    let requested = Route::from_path(path.trim_end_matches('/'))
        .or_else(|| Route::from_path(path))
        .ok_or_else(|| Error::Other(format!("Unknown page '{}'", path)))?;
    Ok((requested, requested.guard(session)))
}

/// Run the open command to show the command behind a console page
pub fn open(opts: &GlobalOptions, path: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let (requested, landed) = navigate(&ctx.session, path)?;

    if landed != requested {
        println!(
            "{} {} redirects to {}",
            "→".dimmed(),
            requested.to_string().cyan(),
            landed.to_string().cyan()
        );
    }
    println!("{}", landed.command());
    Ok(())
}
