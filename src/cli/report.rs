//! Read-only report commands: `summary` and `whoami`

use clap::Args;

use super::{authorized, enter_dashboard, parse_date};
use crate::app::App;
use crate::display::{format_summary, format_user};
use crate::error::{ExpenseError, ExpenseResult};

/// Arguments for `expense summary`
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// First day to include (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Last day to include (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
}

/// Handle `expense summary`
pub async fn handle_summary(app: &App, args: SummaryArgs) -> ExpenseResult<()> {
    let from = args.from.as_deref().map(parse_date).transpose()?;
    let to = args.to.as_deref().map(parse_date).transpose()?;
    if let (Some(from), Some(to)) = (from, to) {
        if from > to {
            return Err(ExpenseError::Validation(
                "Start date must not be after end date".into(),
            ));
        }
    }

    enter_dashboard(app)?;
    let summary = authorized(app, app.gateway().analytics_summary(from, to).await)?;

    print!("{}", format_summary(&summary, app.settings()));
    Ok(())
}

/// Handle `expense whoami`
pub async fn handle_whoami(app: &App) -> ExpenseResult<()> {
    enter_dashboard(app)?;
    let user = authorized(app, app.gateway().current_user().await)?;

    print!("{}", format_user(&user));
    Ok(())
}
