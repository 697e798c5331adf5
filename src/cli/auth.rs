//! Login, register and logout commands

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::AuthApi;
use crate::client::models::{AuthResponse, Credentials, RegisterRequest};
use crate::error::Result;
use crate::session::{Route, SessionStore};

/// Store a fresh auth response in the session and return the redirect target
fn store_session(session: &SessionStore, auth: &AuthResponse) -> Result<Route> {
    session.login(&auth.token, &auth.user)?;
    Ok(Route::after_login())
}

/// Authenticate with credentials and persist the resulting session
pub async fn login_with<C: AuthApi + ?Sized>(
    client: &C,
    session: &SessionStore,
    credentials: &Credentials,
) -> Result<(AuthResponse, Route)> {
    let auth = client.login(credentials).await?;
    let route = store_session(session, &auth)?;
    Ok((auth, route))
}

/// Create an account and persist the resulting session
pub async fn register_with<C: AuthApi + ?Sized>(
    client: &C,
    session: &SessionStore,
    request: &RegisterRequest,
) -> Result<(AuthResponse, Route)> {
    let auth = client.register(request).await?;
    let route = store_session(session, &auth)?;
    Ok((auth, route))
}

/// Clear the session and return the redirect target
pub fn logout_with(session: &SessionStore) -> Result<Route> {
    session.logout()?;
    Ok(Route::after_logout())
}

fn prompt_text(prompt: &str) -> Result<String> {
    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact_text()?)
}

fn prompt_password(confirm: bool) -> Result<String> {
    let theme = ColorfulTheme::default();
    let mut prompt = Password::with_theme(&theme).with_prompt("Password");
    if confirm {
        prompt = prompt.with_confirmation("Confirm password", "Passwords do not match");
    }
    Ok(prompt.interact()?)
}

fn print_redirect(route: Route) {
    println!("\n{} {}", "Next:".bold(), route.command().cyan());
}

/// Run the login command
pub async fn login(
    opts: &GlobalOptions,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    if let Some(current) = ctx.session.user() {
        println!(
            "{} Already logged in as {}; the session will be replaced.",
            "⚠".yellow(),
            current.email
        );
    }

    let email = match email {
        Some(e) => e,
        None => prompt_text("Email")?,
    };
    let password = match password {
        Some(p) => p,
        None => prompt_password(false)?,
    };

    let (auth, route) =
        login_with(ctx.client.as_ref(), &ctx.session, &Credentials { email, password }).await?;

    println!(
        "{} Logged in as {} ({})",
        "✓".green(),
        auth.user.name.bold(),
        auth.user.email
    );
    print_redirect(route);
    Ok(())
}

/// Run the register command
pub async fn register(
    opts: &GlobalOptions,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    role: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let name = match name {
        Some(n) => n,
        None => prompt_text("Name")?,
    };
    let email = match email {
        Some(e) => e,
        None => prompt_text("Email")?,
    };
    let password = match password {
        Some(p) => p,
        None => prompt_password(true)?,
    };

    let request = RegisterRequest {
        name,
        email,
        password,
        role,
    };
    let (auth, route) = register_with(ctx.client.as_ref(), &ctx.session, &request).await?;

    println!(
        "{} Account created for {} ({})",
        "✓".green(),
        auth.user.name.bold(),
        auth.user.email
    );
    print_redirect(route);
    Ok(())
}

/// Run the logout command
pub fn logout(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let was_logged_in = ctx.session.is_authenticated();

    let route = logout_with(&ctx.session)?;

    if was_logged_in {
        println!("{} Logged out", "✓".green());
    } else {
        println!("{} No active session", "○".dimmed());
    }
    print_redirect(route);
    Ok(())
}
