//! Application context
//!
//! [`App`] wires the session store, gateway and router together once at
//! startup and hands them to whatever needs them. There are no globals: two
//! `App`s over different directories are fully independent.

pub mod router;

pub use router::{Route, Router};

use tracing::debug;

use crate::api::Gateway;
use crate::config::{ExpensePaths, Settings};
use crate::dashboard::DashboardSync;
use crate::error::ExpenseResult;
use crate::session::SessionController;
use crate::storage::TokenStore;

/// Everything a command needs to talk to the API
#[derive(Debug, Clone)]
pub struct App {
    paths: ExpensePaths,
    settings: Settings,
    gateway: Gateway,
    router: Router,
}

impl App {
    /// Open the session store and build the gateway
    ///
    /// `api_url` overrides the configured base URL.
    pub fn bootstrap(
        paths: ExpensePaths,
        settings: Settings,
        api_url: Option<String>,
    ) -> ExpenseResult<Self> {
        paths.ensure_directories()?;
        let tokens = TokenStore::open(paths.session_file())?;

        let base_url = api_url.unwrap_or_else(|| settings.api_base_url.clone());
        debug!(base_url = %base_url, "bootstrapping");
        let gateway = Gateway::new(base_url, tokens.clone(), settings.request_timeout())?;
        let router = Router::new(tokens);

        Ok(Self {
            paths,
            settings,
            gateway,
            router,
        })
    }

    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    pub fn tokens(&self) -> &TokenStore {
        self.gateway.tokens()
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn session_controller(&self) -> SessionController {
        SessionController::new(self.gateway.clone())
    }

    /// Mount a fresh dashboard view
    pub fn dashboard(&self) -> DashboardSync {
        DashboardSync::new(self.gateway.clone(), self.router.clone())
    }
}
