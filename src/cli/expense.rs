//! Dashboard CLI commands
//!
//! `dashboard`, `add` and `categories` all enter the protected route, run the
//! initial load and render from the loaded state.

use chrono::{Local, NaiveDate};
use clap::Args;

use super::{enter_dashboard, parse_date};
use crate::app::App;
use crate::dashboard::DashboardSync;
use crate::display::{format_category_list, format_expense_details, format_expense_list};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, CategoryId, Money, NewExpense};

/// Arguments for `expense add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount spent (e.g., "12.50")
    pub amount: String,

    /// What the money was spent on
    pub description: String,

    /// Category name or ID (defaults to the first category)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Expense date (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Tag to attach; repeat for several
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,
}

impl AddArgs {
    fn to_new_expense(&self, today: NaiveDate) -> ExpenseResult<NewExpense> {
        let amount = Money::parse(&self.amount)
            .map_err(|e| ExpenseError::Validation(format!("Invalid amount: {}", e)))?;
        let date = match &self.date {
            Some(date) => parse_date(date)?,
            None => today,
        };

        let mut expense = NewExpense::new(amount, self.description.trim(), date);
        expense.tags = self.tags.iter().map(|t| t.trim().to_string()).collect();

        expense
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;
        Ok(expense)
    }
}

/// Choose the category for a new expense
///
/// An explicit identifier must match a loaded category. Without one the
/// first loaded category is used, and with none loaded the expense is
/// uncategorized.
pub fn select_category(
    categories: &[Category],
    identifier: Option<&str>,
) -> ExpenseResult<Option<CategoryId>> {
    match identifier {
        Some(identifier) => categories
            .iter()
            .find(|c| c.id.matches(identifier))
            .or_else(|| categories.iter().find(|c| c.matches(identifier)))
            .map(|c| Some(c.id))
            .ok_or_else(|| ExpenseError::category_not_found(identifier)),
        None => Ok(categories.first().map(|c| c.id)),
    }
}

/// Handle `expense dashboard`
pub async fn handle_dashboard(app: &App) -> ExpenseResult<()> {
    let view = load(app).await?;
    let state = view.snapshot();

    print!(
        "{}",
        format_expense_list(&state.expenses, &state.categories, app.settings())
    );
    println!();
    print!("{}", format_category_list(&state.categories));
    Ok(())
}

/// Handle `expense categories`
pub async fn handle_categories(app: &App) -> ExpenseResult<()> {
    let view = load(app).await?;
    print!("{}", format_category_list(&view.snapshot().categories));
    Ok(())
}

/// Handle `expense add`
pub async fn handle_add(app: &App, args: AddArgs) -> ExpenseResult<()> {
    let mut expense = args.to_new_expense(Local::now().date_naive())?;

    let view = load(app).await?;
    let state = view.snapshot();
    expense.category_id = select_category(&state.categories, args.category.as_deref())?;

    let created = view.create(&expense).await?;
    let state = view.snapshot();

    println!("Added expense:");
    print!(
        "{}",
        format_expense_details(&created, &state.categories, app.settings())
    );
    println!();
    print!(
        "{}",
        format_expense_list(&state.expenses, &state.categories, app.settings())
    );
    Ok(())
}

async fn load(app: &App) -> ExpenseResult<DashboardSync> {
    let view = enter_dashboard(app)?;
    view.load().await?;
    Ok(view)
}
