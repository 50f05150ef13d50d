//! Session CLI commands
//!
//! `login`, `register` and `logout`. The password is prompted with hidden
//! input when it is not passed on the command line.

use std::io::{self, Write};

use clap::Args;
use tracing::info;

use crate::app::{App, Route};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Credentials, Profile};

/// Arguments for `expense login`
#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email (prompted when omitted)
    #[arg(short, long)]
    pub email: Option<String>,

    /// Account password (prompted when omitted)
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Arguments for `expense register`
#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Account email
    #[arg(short, long)]
    pub email: String,

    /// Account password (prompted when omitted)
    #[arg(short, long)]
    pub password: Option<String>,

    /// First name stored on the account
    #[arg(long)]
    pub first_name: Option<String>,

    /// Last name stored on the account
    #[arg(long)]
    pub last_name: Option<String>,
}

impl RegisterArgs {
    fn profile(&self) -> Profile {
        let defaults = Profile::default();
        Profile {
            first_name: self.first_name.clone().unwrap_or(defaults.first_name),
            last_name: self.last_name.clone().unwrap_or(defaults.last_name),
        }
    }
}

/// Handle `expense login`
pub async fn handle_login(app: &App, args: LoginArgs) -> ExpenseResult<()> {
    app.router().navigate(Route::Login);

    let email = match args.email {
        Some(email) => email,
        None => prompt_string("Email: ")?,
    };
    let password = match args.password {
        Some(password) => password,
        None => prompt_password("Password: ")?,
    };
    let credentials = Credentials::new(email, password);

    let next = app.session_controller().login(&credentials).await?;
    app.router().navigate(next);

    info!(email = %credentials.email, "logged in");
    println!("Logged in as {}", credentials.email);
    Ok(())
}

/// Handle `expense register`
pub async fn handle_register(app: &App, args: RegisterArgs) -> ExpenseResult<()> {
    app.router().navigate(Route::Register);

    let profile = args.profile();
    let password = match args.password {
        Some(password) => password,
        None => prompt_password("Password: ")?,
    };
    let credentials = Credentials::new(args.email, password);

    let next = app
        .session_controller()
        .register(&credentials, &profile)
        .await?;
    app.router().navigate(next);

    println!("Account created for {}", credentials.email);
    println!("Run 'expense login' to sign in.");
    Ok(())
}

/// Handle `expense logout`
pub fn handle_logout(app: &App) -> ExpenseResult<()> {
    let had_session = app.tokens().has_session();
    let next = app.session_controller().logout()?;
    app.router().navigate(next);

    if had_session {
        println!("Logged out.");
    } else {
        println!("Not logged in.");
    }
    Ok(())
}

/// Prompt for a string input
fn prompt_string(prompt: &str) -> ExpenseResult<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

/// Prompt for a password (hidden input)
fn prompt_password(prompt: &str) -> ExpenseResult<String> {
    rpassword::prompt_password(prompt)
        .map_err(|e| ExpenseError::Io(format!("Failed to read password: {}", e)))
}
