use anyhow::Result;
use clap::{Parser, Subcommand};

use expense::app::App;
use expense::cli::{
    handle_add, handle_categories, handle_dashboard, handle_login, handle_logout,
    handle_register, handle_summary, handle_whoami, AddArgs, LoginArgs, RegisterArgs,
    SummaryArgs,
};
use expense::config::{ExpensePaths, Settings};
use expense::logging;

#[derive(Parser)]
#[command(
    name = "expense",
    author = "Kaylee Beyene",
    version,
    about = "Command-line client for a remote expense tracker",
    long_about = "Expense CLI logs in to a remote expense-tracking API, keeps \
                  the session between runs and lets you list, add and \
                  summarize your expenses from the terminal."
)]
struct Cli {
    /// Base URL of the expense API (overrides the configured value)
    #[arg(long, global = true, env = "EXPENSE_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session
    Login(LoginArgs),

    /// Create an account (does not log in)
    Register(RegisterArgs),

    /// Forget the stored session
    Logout,

    /// Show expenses and categories
    #[command(alias = "ls")]
    Dashboard,

    /// Add an expense
    Add(AddArgs),

    /// List categories
    Categories,

    /// Show a spending summary
    Summary(SummaryArgs),

    /// Show the logged-in account
    Whoami,

    /// Show current configuration and paths
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    logging::init(&settings.log_level);

    let app = App::bootstrap(paths, settings, cli.api_url)?;

    match cli.command {
        Some(Commands::Login(args)) => handle_login(&app, args).await?,
        Some(Commands::Register(args)) => handle_register(&app, args).await?,
        Some(Commands::Logout) => handle_logout(&app)?,
        Some(Commands::Dashboard) | None => handle_dashboard(&app).await?,
        Some(Commands::Add(args)) => handle_add(&app, args).await?,
        Some(Commands::Categories) => handle_categories(&app).await?,
        Some(Commands::Summary(args)) => handle_summary(&app, args).await?,
        Some(Commands::Whoami) => handle_whoami(&app).await?,
        Some(Commands::Config) => {
            let settings = app.settings();
            println!("Expense CLI Configuration");
            println!("=========================");
            println!("Data directory: {}", app.paths().base_dir().display());
            println!("Settings file:  {}", app.paths().settings_file().display());
            println!("Session file:   {}", app.paths().session_file().display());
            println!();
            println!("Settings:");
            println!("  API URL:         {}", app.gateway().base_url());
            println!("  Request timeout: {}s", settings.request_timeout_secs);
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Log level:       {}", settings.log_level);
            println!();
            println!(
                "Session: {}",
                if app.tokens().has_session() {
                    "logged in"
                } else {
                    "not logged in"
                }
            );
        }
    }

    Ok(())
}
