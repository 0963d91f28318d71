//! Offline schedule source backed by JSON files.
//!
//! Loads saved `ficheHoraires` responses from a directory and serves them as
//! if they came from the API. Nothing is ever written back.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info};

use crate::domain::RouteName;

use super::error::ScheduleError;
use super::types::RouteDocument;

/// Schedule source that serves documents from `{ROUTE}.json` files.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    documents: BTreeMap<RouteName, RouteDocument>,
}

impl FixtureSource {
    /// Load every `.json` file in a directory.
    ///
    /// The file stem is the route name (`A.json` serves route `A`). Fails if
    /// the directory cannot be read, a file is not valid JSON, or no files
    /// were found.
    pub fn load(data_dir: impl AsRef<Path>) -> Result<Self, ScheduleError> {
        let data_dir = data_dir.as_ref();
        let mut documents = BTreeMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| ScheduleError::Fixture {
            message: format!("failed to read fixture directory {:?}: {}", data_dir, e),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| ScheduleError::Fixture {
                message: format!("failed to read directory entry: {}", e),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| ScheduleError::Fixture {
                    message: format!("invalid filename: {:?}", path),
                })?;

            let route = RouteName::parse(stem).map_err(|e| ScheduleError::Fixture {
                message: format!("{:?}: {}", path, e),
            })?;

            let json = std::fs::read_to_string(&path).map_err(|e| ScheduleError::Fixture {
                message: format!("failed to read {:?}: {}", path, e),
            })?;

            let document =
                RouteDocument::parse(&json).map_err(|e| ScheduleError::decode(e, &json))?;

            debug!(%route, path = ?path, "loaded fixture");
            documents.insert(route, document);
        }

        if documents.is_empty() {
            return Err(ScheduleError::Fixture {
                message: format!("no fixture files found in {:?}", data_dir),
            });
        }

        info!(routes = documents.len(), dir = ?data_dir, "loaded schedule fixtures");

        Ok(Self { documents })
    }

    /// Get the stored document for a route.
    ///
    /// Mirrors [`MtagClient::fetch`](super::MtagClient::fetch).
    pub async fn fetch(&self, route: &RouteName) -> Result<RouteDocument, ScheduleError> {
        self.documents
            .get(route)
            .cloned()
            .ok_or_else(|| ScheduleError::UnknownRoute(route.to_string()))
    }

    /// Routes with a fixture, sorted by name.
    pub fn available_routes(&self) -> Vec<RouteName> {
        self.documents.keys().cloned().collect()
    }
}
