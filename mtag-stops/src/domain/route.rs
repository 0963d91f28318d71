//! Route identifier type.

use std::fmt;

/// Error returned when parsing an invalid route name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid route name: {reason}")]
pub struct InvalidRouteName {
    reason: &'static str,
}

/// A SEM route identifier such as `A`, `C1` or `12`.
///
/// The name is interpolated verbatim into the schedule URL, so callers are
/// responsible for percent-encoding anything unusual. The only guarantee this
/// type makes is that the name is not blank; it is otherwise kept exactly as
/// given.
///
/// # Examples
///
/// ```
/// use mtag_stops::domain::RouteName;
///
/// let a = RouteName::parse("A").unwrap();
/// assert_eq!(a.as_str(), "A");
///
/// // The name is kept verbatim
/// assert_eq!(RouteName::parse("C1").unwrap().as_str(), "C1");
///
/// // Blank names are rejected
/// assert!(RouteName::parse("").is_err());
/// assert!(RouteName::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteName(String);

impl RouteName {
    /// Parse a route name. Blank input is rejected; anything else is kept
    /// verbatim.
    pub fn parse(s: &str) -> Result<Self, InvalidRouteName> {
        if s.trim().is_empty() {
            return Err(InvalidRouteName {
                reason: "must not be empty",
            });
        }

        Ok(RouteName(s.to_string()))
    }

    /// Returns the route name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteName({})", self.0)
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
