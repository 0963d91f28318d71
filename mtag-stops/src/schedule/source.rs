//! Choice between the live API and saved fixtures.

use crate::domain::RouteName;

use super::client::MtagClient;
use super::error::ScheduleError;
use super::fixtures::FixtureSource;
use super::types::RouteDocument;

/// Where route documents come from.
#[derive(Debug, Clone)]
pub enum ScheduleSource {
    /// The Mobilités M HTTP API
    Live(MtagClient),
    /// JSON files on disk
    Fixtures(FixtureSource),
}

impl ScheduleSource {
    /// Fetch the schedule document for a route.
    pub async fn fetch(&self, route: &RouteName) -> Result<RouteDocument, ScheduleError> {
        match self {
            ScheduleSource::Live(client) => client.fetch(route).await,
            ScheduleSource::Fixtures(fixtures) => fixtures.fetch(route).await,
        }
    }
}

impl From<MtagClient> for ScheduleSource {
    fn from(client: MtagClient) -> Self {
        ScheduleSource::Live(client)
    }
}

impl From<FixtureSource> for ScheduleSource {
    fn from(fixtures: FixtureSource) -> Self {
        ScheduleSource::Fixtures(fixtures)
    }
}
