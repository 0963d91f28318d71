//! Projection from raw schedule documents to domain stations.
//!
//! The document is walked as a generic JSON tree and every field the domain
//! needs is checked explicitly. Any miss aborts the whole extraction with a
//! [`ScheduleError::Schema`] naming where it happened; entries are never
//! skipped or defaulted.

use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::{ParentStation, Station};

use super::error::ScheduleError;
use super::types::RouteDocument;

/// Key of the stop-entry list inside each direction object.
const STOPS_KEY: &str = "arrets";

/// Key of the optional parent station inside a stop entry.
const PARENT_KEY: &str = "parentStation";

/// Extract every stop entry of a route document, in order.
///
/// Directions are visited in document order, then each direction's entries in
/// list order. The result length is the total number of entries across all
/// directions; documents with no directions, or only empty ones, give an
/// empty vector.
pub fn extract_stations(doc: &RouteDocument) -> Result<Vec<Station>, ScheduleError> {
    let directions = doc
        .as_value()
        .as_object()
        .ok_or_else(|| ScheduleError::Schema("document is not an object".to_string()))?;

    let mut stations = Vec::new();

    for (direction_id, direction) in directions {
        let direction = direction.as_object().ok_or_else(|| {
            ScheduleError::Schema(format!("direction {direction_id:?} is not an object"))
        })?;

        let entries = direction
            .get(STOPS_KEY)
            .ok_or_else(|| {
                ScheduleError::Schema(format!(
                    "direction {direction_id:?}: missing key {STOPS_KEY:?}"
                ))
            })?
            .as_array()
            .ok_or_else(|| {
                ScheduleError::Schema(format!(
                    "direction {direction_id:?}: {STOPS_KEY:?} is not a list"
                ))
            })?;

        stations.reserve(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            let at = EntryPath {
                direction: direction_id,
                index,
            };
            stations.push(convert_stop_entry(entry, &at)?);
        }
    }

    debug!(
        directions = directions.len(),
        stations = stations.len(),
        "extracted stations"
    );

    Ok(stations)
}

/// Location of a stop entry, for error messages.
struct EntryPath<'a> {
    direction: &'a str,
    index: usize,
}

impl EntryPath<'_> {
    fn error(&self, detail: impl std::fmt::Display) -> ScheduleError {
        ScheduleError::Schema(format!(
            "direction {:?}, stop {}: {}",
            self.direction, self.index, detail
        ))
    }
}

/// Convert a single stop entry into a station.
fn convert_stop_entry(entry: &Value, at: &EntryPath<'_>) -> Result<Station, ScheduleError> {
    let entry = entry
        .as_object()
        .ok_or_else(|| at.error("entry is not an object"))?;

    let stop_id = require_str(entry, "stopId", at)?;
    let stop_name = require_str(entry, "stopName", at)?;
    let name = require_str(entry, "name", at)?;
    let city = require_str(entry, "city", at)?;
    let latitude = require_f64(entry, "lat", at)?;
    let longitude = require_f64(entry, "lon", at)?;

    // Absent, null and `{}` all mean "no parent".
    let parent_station = match entry.get(PARENT_KEY) {
        None | Some(Value::Null) => None,
        Some(Value::Object(parent)) if parent.is_empty() => None,
        Some(parent) => Some(convert_parent(parent, at)?),
    };

    Ok(Station::new(
        stop_id,
        stop_name,
        name,
        city,
        latitude,
        longitude,
        parent_station,
    ))
}

fn convert_parent(parent: &Value, at: &EntryPath<'_>) -> Result<ParentStation, ScheduleError> {
    let parent = parent
        .as_object()
        .ok_or_else(|| at.error(format!("{PARENT_KEY:?} is not an object")))?;

    Ok(ParentStation {
        name: require_str(parent, "name", at)?.to_string(),
        lat: require_f64(parent, "lat", at)?,
        lon: require_f64(parent, "lon", at)?,
    })
}

fn require<'v>(
    obj: &'v Map<String, Value>,
    key: &str,
    at: &EntryPath<'_>,
) -> Result<&'v Value, ScheduleError> {
    obj.get(key)
        .ok_or_else(|| at.error(format!("missing key {key:?}")))
}

fn require_str<'v>(
    obj: &'v Map<String, Value>,
    key: &str,
    at: &EntryPath<'_>,
) -> Result<&'v str, ScheduleError> {
    require(obj, key, at)?
        .as_str()
        .ok_or_else(|| at.error(format!("key {key:?} is not a string")))
}

fn require_f64(
    obj: &Map<String, Value>,
    key: &str,
    at: &EntryPath<'_>,
) -> Result<f64, ScheduleError> {
    require(obj, key, at)?
        .as_f64()
        .ok_or_else(|| at.error(format!("key {key:?} is not a number")))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    /// Stop ids for each direction of a generated document.
    fn directions_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
        prop::collection::vec(prop::collection::vec("[A-Z]{3}:[0-9]{1,4}", 0..8), 0..5)
    }

    fn build_document(directions: &[Vec<String>]) -> RouteDocument {
        let mut map = Map::new();
        for (i, ids) in directions.iter().enumerate() {
            let arrets: Vec<Value> = ids
                .iter()
                .map(|id| {
                    json!({
                        "stopId": id,
                        "stopName": format!("Stop {id}"),
                        "name": id,
                        "city": "Grenoble",
                        "lat": 45.0,
                        "lon": 5.0
                    })
                })
                .collect();
            map.insert(format!("dir{i}"), json!({ "arrets": arrets }));
        }
        RouteDocument::from(Value::Object(map))
    }

    proptest! {
        #[test]
        fn length_is_sum_of_directions(directions in directions_strategy()) {
            let doc = build_document(&directions);
            let stations = extract_stations(&doc).unwrap();
            let expected: usize = directions.iter().map(Vec::len).sum();
            prop_assert_eq!(stations.len(), expected);
        }

        #[test]
        fn stop_ids_round_trip_in_order(directions in directions_strategy()) {
            let doc = build_document(&directions);
            let stations = extract_stations(&doc).unwrap();
            let expected: Vec<&str> = directions.iter().flatten().map(String::as_str).collect();
            let actual: Vec<&str> = stations.iter().map(Station::stop_id).collect();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn extraction_is_deterministic(directions in directions_strategy()) {
            let doc = build_document(&directions);
            prop_assert_eq!(extract_stations(&doc).unwrap(), extract_stations(&doc).unwrap());
        }
    }
}
