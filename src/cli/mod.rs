//! CLI command handlers
//!
//! Each subcommand is a navigation: protected commands go through the
//! router's guard before anything is sent.

pub mod auth;
pub mod expense;
pub mod report;

pub use auth::{handle_login, handle_logout, handle_register, LoginArgs, RegisterArgs};
pub use expense::{handle_add, handle_categories, handle_dashboard, AddArgs};
pub use report::{handle_summary, handle_whoami, SummaryArgs};

use chrono::NaiveDate;

use crate::app::{App, Route};
use crate::dashboard::DashboardSync;
use crate::error::{DashboardError, ExpenseError, ExpenseResult, GatewayError};

/// Navigate to the protected route and mount its view
///
/// Fails without sending anything when no session is held.
pub fn enter_dashboard(app: &App) -> ExpenseResult<DashboardSync> {
    match app.router().navigate(Route::Dashboard) {
        Route::Dashboard => Ok(app.dashboard()),
        _ => Err(ExpenseError::NotLoggedIn),
    }
}

/// Route a rejected session to login, like the dashboard does
pub fn authorized<T>(app: &App, result: Result<T, GatewayError>) -> ExpenseResult<T> {
    match result {
        Err(GatewayError::Unauthorized) => {
            app.router().navigate(Route::Login);
            Err(DashboardError::Unauthorized.into())
        }
        other => Ok(other?),
    }
}

/// Parse a YYYY-MM-DD date
pub fn parse_date(s: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        ExpenseError::Validation(format!("Invalid date '{}': expected YYYY-MM-DD", s))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExpensePaths, Settings};
    use crate::models::Session;
    use tempfile::TempDir;

    fn app(dir: &TempDir) -> App {
        let paths = ExpensePaths::with_base_dir(dir.path().to_path_buf());
        App::bootstrap(paths, Settings::default(), None).unwrap()
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert!(parse_date("03/01/2024").unwrap_err().is_validation());
    }

    #[test]
    fn test_enter_dashboard_requires_session() {
        let temp_dir = TempDir::new().unwrap();
        let app = app(&temp_dir);

        assert!(matches!(
            enter_dashboard(&app),
            Err(ExpenseError::NotLoggedIn)
        ));
        assert_eq!(app.router().current(), Some(Route::Login));

        app.tokens().set(Session::new("T")).unwrap();
        assert!(enter_dashboard(&app).is_ok());
        assert_eq!(app.router().current(), Some(Route::Dashboard));
    }

    #[test]
    fn test_authorized_redirects_on_401() {
        let temp_dir = TempDir::new().unwrap();
        let app = app(&temp_dir);
        app.tokens().set(Session::new("T")).unwrap();
        app.router().navigate(Route::Dashboard);

        let err = authorized::<()>(&app, Err(GatewayError::Unauthorized)).unwrap_err();

        assert!(matches!(
            err,
            ExpenseError::Dashboard(DashboardError::Unauthorized)
        ));
        assert_eq!(app.router().current(), Some(Route::Login));

        assert_eq!(authorized(&app, Ok(7)).unwrap(), 7);
    }
}
