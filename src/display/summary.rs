//! Spending summary and account display formatting

use crate::config::Settings;
use crate::models::{AnalyticsSummary, UserAccount};

/// Format the spending summary as a category breakdown table
pub fn format_summary(summary: &AnalyticsSummary, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    let mut output = String::new();

    output.push_str(&format!(
        "Total:         {}\n",
        summary.total_amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!("Expenses:      {}\n", summary.expense_count));
    output.push_str(&format!(
        "Daily average: {}\n",
        summary.average_per_day.format_with_symbol(symbol)
    ));

    if summary.by_category.is_empty() {
        return output;
    }

    output.push('\n');
    output.push_str(&format!(
        "{:24} {:>8} {:>12} {:>7}\n",
        "Category", "Count", "Amount", "Share"
    ));
    output.push_str(&"-".repeat(54));
    output.push('\n');

    for row in &summary.by_category {
        output.push_str(&format!(
            "{:24} {:>8} {:>12} {:>6.1}%\n",
            row.category.to_string(),
            row.expense_count,
            row.total_amount.format_with_symbol(symbol),
            row.percentage
        ));
    }

    output
}

/// Format the logged-in user's account
pub fn format_user(user: &UserAccount) -> String {
    let mut output = String::new();

    output.push_str(&format!("Name:  {}\n", user.full_name()));
    output.push_str(&format!("Email: {}\n", user.email));
    output.push_str(&format!("ID:    {}\n", user.id));
    if let Some(created_at) = user.created_at {
        output.push_str(&format!("Since: {}\n", created_at.format("%Y-%m-%d")));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> AnalyticsSummary {
        serde_json::from_value(serde_json::json!({
            "total_amount": "150.00",
            "expense_count": 3,
            "average_per_day": 4.84,
            "by_category": [{
                "category": {"id": "550e8400-e29b-41d4-a716-446655440000", "name": "Food"},
                "total_amount": "100.00",
                "expense_count": 2,
                "percentage": "66.666"
            }]
        }))
        .unwrap()
    }

    #[test]
    fn test_summary_table() {
        let output = format_summary(&summary(), &Settings::default());

        assert!(output.contains("Total:         $150.00"));
        assert!(output.contains("Daily average: $4.84"));
        let row = output.lines().last().unwrap();
        assert!(row.starts_with("Food"));
        assert!(row.contains("$100.00"));
        assert!(row.ends_with("66.7%"));
    }

    #[test]
    fn test_summary_without_categories() {
        let mut empty = summary();
        empty.by_category.clear();

        let output = format_summary(&empty, &Settings::default());

        assert!(!output.contains("Category"));
        assert_eq!(output.lines().count(), 3);
    }

    #[test]
    fn test_user() {
        let user: UserAccount = serde_json::from_value(serde_json::json!({
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "email": "u@x.com",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "created_at": "2024-01-02T03:04:05"
        }))
        .unwrap();

        let output = format_user(&user);

        assert!(output.contains("Name:  Ada Lovelace"));
        assert!(output.contains("Email: u@x.com"));
        assert!(output.contains("Since: 2024-01-02"));
    }
}
