//! Typed wrappers for the remote API endpoints
//!
//! | Endpoint | Auth |
//! |---|---|
//! | `POST /auth/login` | no |
//! | `POST /auth/register` | no |
//! | `GET /expenses` | yes |
//! | `POST /expenses` | yes |
//! | `GET /categories` | yes |
//! | `GET /analytics/summary` | yes |
//! | `GET /users/me` | yes |

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::gateway::Gateway;
use crate::error::GatewayError;
use crate::models::{
    AnalyticsSummary, Category, Credentials, Expense, NewExpense, Profile, Session, UserAccount,
};

pub const LOGIN: &str = "/auth/login";
pub const REGISTER: &str = "/auth/register";
pub const EXPENSES: &str = "/expenses";
pub const CATEGORIES: &str = "/categories";
pub const ANALYTICS_SUMMARY: &str = "/analytics/summary";
pub const CURRENT_USER: &str = "/users/me";

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    email: &'a str,
    password: &'a str,
    first_name: &'a str,
    last_name: &'a str,
}

/// Body of a successful login
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Body of `GET /expenses`
#[derive(Debug, Deserialize)]
pub struct ExpenseListResponse {
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Paging block of the expense list; the client always reads the first page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub pages: u32,
}

impl Gateway {
    /// Exchange credentials for a session
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, GatewayError> {
        let body = LoginRequest {
            email: &credentials.email,
            password: credentials.password(),
        };
        let token: TokenResponse = self.post_public(LOGIN, &body).await?.json()?;

        if token.access_token.is_empty() {
            return Err(GatewayError::Decode("empty access_token".into()));
        }
        Ok(Session::new(token.access_token))
    }

    /// Create an account; does not log in
    pub async fn register(
        &self,
        credentials: &Credentials,
        profile: &Profile,
    ) -> Result<(), GatewayError> {
        let body = RegisterRequest {
            email: &credentials.email,
            password: credentials.password(),
            first_name: &profile.first_name,
            last_name: &profile.last_name,
        };
        self.post_public(REGISTER, &body).await?;
        Ok(())
    }

    /// Expenses in server order
    pub async fn list_expenses(&self) -> Result<Vec<Expense>, GatewayError> {
        let response: ExpenseListResponse = self.get_json(EXPENSES).await?;
        Ok(response.expenses)
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, GatewayError> {
        self.get_json(CATEGORIES).await
    }

    /// Create an expense, returning the server's record
    pub async fn create_expense(&self, expense: &NewExpense) -> Result<Expense, GatewayError> {
        self.post_json(EXPENSES, expense).await
    }

    /// Spending summary; the server defaults to the last 30 days
    pub async fn analytics_summary(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<AnalyticsSummary, GatewayError> {
        let query: Vec<(&str, String)> = [("start_date", start_date), ("end_date", end_date)]
            .into_iter()
            .filter_map(|(key, date)| date.map(|d| (key, d.format("%Y-%m-%d").to_string())))
            .collect();
        self.get_json_with_query(ANALYTICS_SUMMARY, &query).await
    }

    pub async fn current_user(&self) -> Result<UserAccount, GatewayError> {
        self.get_json(CURRENT_USER).await
    }
}
