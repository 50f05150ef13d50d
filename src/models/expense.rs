//! Expense model
//!
//! [`Expense`] is a record as the server returns it, with a server-assigned
//! ID. [`NewExpense`] is what the client submits to create one.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::{CategoryId, ExpenseId, UserId};
use super::money::Money;
use super::serde_ext;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Server-assigned identifier
    pub id: ExpenseId,

    /// Owning category, if any
    #[serde(default)]
    pub category_id: Option<CategoryId>,

    /// Amount spent
    pub amount: Money,

    /// Free-text description
    pub description: String,

    /// Calendar date of the expense
    pub expense_date: NaiveDate,

    #[serde(default, deserialize_with = "serde_ext::null_as_default")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_url: Option<String>,

    /// Category embedded by the server for display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,

    #[serde(
        default,
        deserialize_with = "serde_ext::deserialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(
        default,
        deserialize_with = "serde_ext::deserialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Expense {
    /// Name of the expense's category, from the embedded record or a lookup
    /// in `categories`
    pub fn category_name<'a>(&'a self, categories: &'a [Category]) -> Option<&'a str> {
        if let Some(category) = &self.category {
            return Some(&category.name);
        }
        let id = self.category_id?;
        categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.expense_date, self.amount, self.description
        )
    }
}

/// The fields submitted to create an expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewExpense {
    /// Sent as `null` when unset
    pub category_id: Option<CategoryId>,
    pub amount: Money,
    pub description: String,
    pub expense_date: NaiveDate,
    pub tags: Vec<String>,
}

impl NewExpense {
    /// Create a new expense with no category and no tags
    pub fn new(amount: Money, description: impl Into<String>, expense_date: NaiveDate) -> Self {
        Self {
            category_id: None,
            amount,
            description: description.into(),
            expense_date,
            tags: Vec::new(),
        }
    }

    /// Set the category
    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Validate the expense before it is sent
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }

        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        if self.tags.iter().any(|t| t.trim().is_empty()) {
            return Err(ExpenseValidationError::EmptyTag);
        }

        Ok(())
    }
}

/// Validation errors for new expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount,
    EmptyDescription,
    EmptyTag,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Amount must be positive"),
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::EmptyTag => write!(f, "Tags cannot be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_deserialize_server_expense() {
        let json = r##"{
            "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
            "category_id": "550e8400-e29b-41d4-a716-446655440000",
            "amount": "42.10",
            "description": "Weekly groceries",
            "expense_date": "2024-03-02",
            "receipt_url": null,
            "tags": null,
            "user_id": "6fa459ea-ee8a-3ca4-894e-db77e160355e",
            "category": {
                "id": "550e8400-e29b-41d4-a716-446655440000",
                "name": "Groceries",
                "color": "#22C55E",
                "icon": "cart"
            },
            "created_at": "2024-03-02T18:00:00",
            "updated_at": "2024-03-02T18:00:00"
        }"##;

        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.amount.cents(), 4210);
        assert_eq!(expense.expense_date, date("2024-03-02"));
        assert!(expense.tags.is_empty());
        assert_eq!(expense.category_name(&[]), Some("Groceries"));
    }

    #[test]
    fn test_category_name_falls_back_to_lookup() {
        let category = Category::new(CategoryId::new(), "Transport");
        let expense = Expense {
            id: ExpenseId::new(),
            category_id: Some(category.id),
            amount: Money::from_cents(250),
            description: "Bus".into(),
            expense_date: date("2024-03-01"),
            tags: vec![],
            receipt_url: None,
            category: None,
            user_id: None,
            created_at: None,
            updated_at: None,
        };

        assert_eq!(expense.category_name(&[category]), Some("Transport"));
        assert_eq!(expense.category_name(&[]), None);
    }

    #[test]
    fn test_new_expense_body() {
        let category_id = CategoryId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let new = NewExpense::new(Money::from_cents(1999), "Books", date("2024-03-05"))
            .with_category(category_id);

        let body = serde_json::to_value(&new).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "category_id": "550e8400-e29b-41d4-a716-446655440000",
                "amount": "19.99",
                "description": "Books",
                "expense_date": "2024-03-05",
                "tags": []
            })
        );
    }

    #[test]
    fn test_unset_category_is_sent_as_null() {
        let new = NewExpense::new(Money::from_cents(100), "Coffee", date("2024-03-05"));
        let body = serde_json::to_value(&new).unwrap();
        assert!(body["category_id"].is_null());
    }

    #[test]
    fn test_validation() {
        let mut new = NewExpense::new(Money::from_cents(100), "Coffee", date("2024-03-05"));
        assert!(new.validate().is_ok());

        new.amount = Money::zero();
        assert_eq!(
            new.validate(),
            Err(ExpenseValidationError::NonPositiveAmount)
        );

        new.amount = Money::from_cents(100);
        new.description = "   ".into();
        assert_eq!(
            new.validate(),
            Err(ExpenseValidationError::EmptyDescription)
        );

        new.description = "Coffee".into();
        new.tags = vec!["".into()];
        assert_eq!(new.validate(), Err(ExpenseValidationError::EmptyTag));
    }
}
