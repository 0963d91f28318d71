//! Raw schedule document.

use serde_json::Value;

/// A decoded `ficheHoraires` response, not yet validated.
///
/// The expected shape maps direction ids to direction objects, each with an
/// `arrets` list of stop entries:
///
/// ```json
/// {
///   "0": { "arrets": [ { "stopId": "SEM:0910", "stopName": "...", ... } ] },
///   "1": { "arrets": [ ... ] }
/// }
/// ```
///
/// Nothing checks that shape until [`extract_stations`] runs. Key order of
/// the source document is preserved.
///
/// [`extract_stations`]: super::extract_stations
#[derive(Debug, Clone, PartialEq)]
pub struct RouteDocument(Value);

impl RouteDocument {
    /// Decode a document from a JSON string.
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json).map(RouteDocument)
    }

    /// The underlying JSON tree.
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for RouteDocument {
    fn from(value: Value) -> Self {
        RouteDocument(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_any_json() {
        // No shape checks at this layer.
        assert!(RouteDocument::parse("[1, 2, 3]").is_ok());
        assert!(RouteDocument::parse("{}").is_ok());
        assert!(RouteDocument::parse("\"text\"").is_ok());
    }

    #[test]
    fn parse_rejects_invalid_json() {
        assert!(RouteDocument::parse("<html>").is_err());
        assert!(RouteDocument::parse("").is_err());
    }

    #[test]
    fn preserves_direction_order() {
        let doc = RouteDocument::parse(r#"{"1": {}, "0": {}}"#).unwrap();
        let keys: Vec<&String> = doc.as_value().as_object().unwrap().keys().collect();
        assert_eq!(keys, ["1", "0"]);
    }
}
