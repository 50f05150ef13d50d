//! Read-only reports served by the API: the spending summary and the
//! current user's account

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use super::category::Category;
use super::ids::UserId;
use super::money::Money;
use super::serde_ext;

/// Spending summary over a date range
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalyticsSummary {
    pub total_amount: Money,
    pub expense_count: u64,
    pub average_per_day: Money,
    #[serde(default)]
    pub by_category: Vec<CategorySummary>,
    #[serde(default)]
    pub daily_totals: Vec<DailySummary>,
}

/// Spending within one category
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategorySummary {
    pub category: Category,
    pub total_amount: Money,
    pub expense_count: u64,
    /// Share of the range total, 0-100
    #[serde(deserialize_with = "serde_ext::decimal_f64")]
    pub percentage: f64,
}

/// Spending on one day
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub total_amount: Money,
    pub expense_count: u64,
}

/// The authenticated user's account
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserAccount {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, deserialize_with = "serde_ext::deserialize_opt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl UserAccount {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
