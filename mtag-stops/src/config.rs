//! Runtime configuration read from the environment.

use std::path::PathBuf;

use crate::domain::{InvalidRouteName, RouteName};
use crate::lines::all_lines;
use crate::schedule::{DEFAULT_BASE_URL, MtagClientConfig};

/// Route to print when `MTAG_ROUTE` is unset.
const DEFAULT_ROUTE: &str = "A";

/// `MTAG_ROUTE` value selecting every known line.
const ALL_ROUTES: &str = "all";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `MTAG_ROUTE` is not a usable route name
    #[error("MTAG_ROUTE: {0}")]
    Route(#[from] InvalidRouteName),

    /// `MTAG_TIMEOUT_SECS` is not a whole number of seconds
    #[error("MTAG_TIMEOUT_SECS: expected a number of seconds, got {0:?}")]
    Timeout(String),
}

/// Which routes to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteSelection {
    /// One route; any error aborts the run.
    Single(RouteName),
    /// Every known line; failing lines are skipped.
    All,
}

impl RouteSelection {
    /// Concrete route list for this selection.
    pub fn routes(&self) -> Vec<RouteName> {
        match self {
            RouteSelection::Single(route) => vec![route.clone()],
            RouteSelection::All => all_lines(),
        }
    }
}

/// Process configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Routes to fetch (`MTAG_ROUTE`).
    pub routes: RouteSelection,

    /// API base URL (`MTAG_BASE_URL`).
    pub base_url: String,

    /// Request timeout in seconds (`MTAG_TIMEOUT_SECS`).
    pub timeout_secs: u64,

    /// Serve documents from this directory instead of the API
    /// (`MTAG_FIXTURES_DIR`).
    pub fixtures_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let routes = match var("MTAG_ROUTE") {
            Some(v) if v.trim().eq_ignore_ascii_case(ALL_ROUTES) => RouteSelection::All,
            Some(v) => RouteSelection::Single(RouteName::parse(v.trim())?),
            None => RouteSelection::Single(RouteName::parse(DEFAULT_ROUTE)?),
        };

        let base_url = var("MTAG_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = match var("MTAG_TIMEOUT_SECS") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::Timeout(v))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let fixtures_dir = var("MTAG_FIXTURES_DIR").map(PathBuf::from);

        Ok(Self {
            routes,
            base_url,
            timeout_secs,
            fixtures_dir,
        })
    }

    /// Client configuration for the live API.
    pub fn client_config(&self) -> MtagClientConfig {
        MtagClientConfig::new()
            .with_base_url(&self.base_url)
            .with_timeout(self.timeout_secs)
    }
}
