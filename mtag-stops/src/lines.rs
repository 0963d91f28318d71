//! Lines of the SEM network and multi-line retrieval.

use tracing::{error, info};

use crate::domain::{RouteName, Station};
use crate::schedule::{ScheduleError, ScheduleSource, extract_stations};

/// Tram lines.
pub const TRAM_LINES: [&str; 5] = ["A", "B", "C", "D", "E"];

/// Main bus lines (Chrono and Proximo).
pub const BUS_LINES: [&str; 11] = [
    "C1", "C2", "C3", "C4", "C5", "C6", "12", "13", "14", "15", "16",
];

/// Every known line, trams first.
pub fn all_lines() -> Vec<RouteName> {
    TRAM_LINES
        .iter()
        .chain(BUS_LINES.iter())
        .filter_map(|name| RouteName::parse(name).ok())
        .collect()
}

/// Stations extracted for one line.
#[derive(Debug, Clone)]
pub struct LineStations {
    pub route: RouteName,
    pub stations: Vec<Station>,
}

/// Fetch one route and extract its stations.
///
/// The document is fully extracted before anything is returned.
pub async fn fetch_stations(
    source: &ScheduleSource,
    route: &RouteName,
) -> Result<Vec<Station>, ScheduleError> {
    let doc = source.fetch(route).await?;
    let stations = extract_stations(&doc)?;
    info!(%route, stations = stations.len(), "extracted route");
    Ok(stations)
}

/// Fetch several routes one after another.
///
/// A route that fails to fetch or extract is logged and left out; the others
/// are still returned, in input order. If routes were requested and every one
/// of them failed, the result is [`ScheduleError::NoLinesFetched`].
pub async fn fetch_lines(
    source: &ScheduleSource,
    routes: &[RouteName],
) -> Result<Vec<LineStations>, ScheduleError> {
    let mut lines = Vec::with_capacity(routes.len());

    for route in routes {
        match fetch_stations(source, route).await {
            Ok(stations) => lines.push(LineStations {
                route: route.clone(),
                stations,
            }),
            Err(e) => error!(%route, "skipping line: {e}"),
        }
    }

    info!(
        requested = routes.len(),
        fetched = lines.len(),
        "finished fetching lines"
    );

    if lines.is_empty() && !routes.is_empty() {
        return Err(ScheduleError::NoLinesFetched {
            requested: routes.len(),
        });
    }

    Ok(lines)
}
