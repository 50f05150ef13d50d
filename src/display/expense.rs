//! Expense display formatting
//!
//! Formats the dashboard's expense list as a register-style table.

use crate::config::Settings;
use crate::models::{Category, Expense};

/// Format a single expense as a table row
pub fn format_expense_row(expense: &Expense, categories: &[Category], settings: &Settings) -> String {
    let category = expense.category_name(categories).unwrap_or("-");

    format!(
        "{:10} {:24} {:16} {:>12}",
        expense.expense_date.format(&settings.date_format),
        truncate(&expense.description, 24),
        truncate(category, 16),
        expense.amount.format_with_symbol(&settings.currency_symbol)
    )
}

/// Format the expense list, most recent first
pub fn format_expense_list(
    expenses: &[Expense],
    categories: &[Category],
    settings: &Settings,
) -> String {
    if expenses.is_empty() {
        return "No expenses yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:24} {:16} {:>12}\n",
        "Date", "Description", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(65));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, categories, settings));
        output.push('\n');
    }

    output
}

/// Format a newly created expense
pub fn format_expense_details(
    expense: &Expense,
    categories: &[Category],
    settings: &Settings,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!(
        "Date:        {}\n",
        expense.expense_date.format(&settings.date_format)
    ));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!("Description: {}\n", expense.description));

    match expense.category_name(categories) {
        Some(name) => output.push_str(&format!("Category:    {}\n", name)),
        None => output.push_str("Category:    (uncategorized)\n"),
    }

    if !expense.tags.is_empty() {
        output.push_str(&format!("Tags:        {}\n", expense.tags.join(", ")));
    }

    output
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
