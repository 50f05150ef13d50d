//! Dashboard data synchronization
//!
//! [`DashboardSync`] owns the protected view's in-memory expense and category
//! lists. The initial load fetches both concurrently and populates them only
//! once both calls have settled. Creating an expense prepends the server's
//! record after the server confirms it, so there is nothing to roll back.
//!
//! Results that settle after [`DashboardSync::unmount`] are discarded.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use crate::api::Gateway;
use crate::app::{Route, Router};
use crate::error::{DashboardError, GatewayError};
use crate::models::{Category, Expense, NewExpense};

/// User-facing message when the initial load fails
pub const LOAD_FAILED_MESSAGE: &str = "Could not load your expenses";

/// User-facing message when creating an expense fails
pub const CREATE_FAILED_MESSAGE: &str = "Could not add the expense";

/// Snapshot of the view's data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    /// Most recent first: local creations ahead of the server's order
    pub expenses: Vec<Expense>,
    pub categories: Vec<Category>,
    /// True until the initial load settles
    pub loading: bool,
    /// True while a creation is in flight
    pub creating: bool,
    /// Message to show the user after a failed load or create
    pub error: Option<String>,
    /// Records created since the last load started, at the head of `expenses`
    created_since_load: usize,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            expenses: Vec::new(),
            categories: Vec::new(),
            loading: true,
            creating: false,
            error: None,
            created_since_load: 0,
        }
    }
}

impl DashboardState {
    /// Replace the list with a server batch, keeping records created while
    /// it was in flight ahead of it
    fn replace_expenses(&mut self, batch: Vec<Expense>) {
        let local = self.created_since_load.min(self.expenses.len());
        let mut expenses: Vec<Expense> = self
            .expenses
            .drain(..local)
            .filter(|created| !batch.iter().any(|e| e.id == created.id))
            .collect();
        expenses.extend(batch);
        self.expenses = expenses;
        self.created_since_load = 0;
    }
}

/// Orchestrates the protected view's data; clones share state
#[derive(Debug, Clone)]
pub struct DashboardSync {
    gateway: Gateway,
    router: Router,
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    state: Mutex<DashboardState>,
    creating: AtomicBool,
    mounted: AtomicBool,
}

/// Holds the create slot; releases it even if the create future is dropped
struct CreateSlot<'a>(&'a AtomicBool);

impl<'a> CreateSlot<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for CreateSlot<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl DashboardSync {
    /// Mount a new view with empty lists and `loading` set
    pub fn new(gateway: Gateway, router: Router) -> Self {
        Self {
            gateway,
            router,
            inner: Arc::new(Inner {
                state: Mutex::new(DashboardState::default()),
                creating: AtomicBool::new(false),
                mounted: AtomicBool::new(true),
            }),
        }
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> DashboardState {
        let mut state = self.state().clone();
        state.creating = self.inner.creating.load(Ordering::SeqCst);
        state
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.mounted.load(Ordering::SeqCst)
    }

    /// Tear the view down; in-flight calls will not touch its state
    pub fn unmount(&self) {
        self.inner.mounted.store(false, Ordering::SeqCst);
    }

    /// Fetch expenses and categories concurrently and populate both lists
    ///
    /// Neither list changes unless both calls succeed. Expenses created while
    /// the load is in flight stay ahead of the loaded batch. A 401 from either
    /// navigates to login (the gateway has already cleared the session).
    /// Any other failure ends `loading` and records a message.
    pub async fn load(&self) -> Result<(), DashboardError> {
        {
            let mut state = self.state();
            state.loading = true;
            state.error = None;
            state.created_since_load = 0;
        }

        let (expenses, categories) = tokio::join!(
            self.gateway.list_expenses(),
            self.gateway.list_categories()
        );

        if !self.is_mounted() {
            debug!("dashboard unmounted during load; discarding results");
            return Err(DashboardError::Unmounted);
        }

        match (expenses, categories) {
            (Ok(expenses), Ok(categories)) => {
                info!(
                    expenses = expenses.len(),
                    categories = categories.len(),
                    "dashboard loaded"
                );
                let mut state = self.state();
                state.replace_expenses(expenses);
                state.categories = categories;
                state.loading = false;
                Ok(())
            }
            (expenses, categories) => {
                let unauthorized = [expenses.as_ref().err(), categories.as_ref().err()]
                    .into_iter()
                    .flatten()
                    .any(GatewayError::is_unauthorized);

                self.state().loading = false;

                if unauthorized {
                    self.router.navigate(Route::Login);
                    return Err(DashboardError::Unauthorized);
                }

                let cause = expenses
                    .err()
                    .or_else(|| categories.err())
                    .map(|e| e.to_string())
                    .unwrap_or_default();
                warn!(error = %cause, "dashboard load failed");
                self.state().error = Some(LOAD_FAILED_MESSAGE.to_string());
                Err(DashboardError::LoadFailed(cause))
            }
        }
    }

    /// Create an expense and prepend the server's record to the list
    ///
    /// Only one creation may be in flight; a second one is refused without
    /// sending. On failure the list is unchanged.
    pub async fn create(&self, expense: &NewExpense) -> Result<Expense, DashboardError> {
        let _slot =
            CreateSlot::acquire(&self.inner.creating).ok_or(DashboardError::CreateInProgress)?;

        let result = self.gateway.create_expense(expense).await;

        if !self.is_mounted() {
            debug!("dashboard unmounted during create; discarding result");
            return Err(DashboardError::Unmounted);
        }

        match result {
            Ok(created) => {
                debug!(id = %created.id, "expense created");
                let mut state = self.state();
                state.expenses.insert(0, created.clone());
                state.created_since_load += 1;
                state.error = None;
                Ok(created)
            }
            Err(GatewayError::Unauthorized) => {
                self.router.navigate(Route::Login);
                Err(DashboardError::Unauthorized)
            }
            Err(e) => {
                warn!(error = %e, "expense creation failed");
                self.state().error = Some(CREATE_FAILED_MESSAGE.to_string());
                Err(DashboardError::CreateFailed(e.to_string()))
            }
        }
    }

    fn state(&self) -> MutexGuard<'_, DashboardState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
