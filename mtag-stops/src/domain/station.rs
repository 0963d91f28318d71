//! Stop records extracted from a route schedule.

use std::fmt;

/// A grouping station (usually a hub) that a stop belongs to.
///
/// This is a plain nested value copied out of the stop entry. It is not a
/// link to another [`Station`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParentStation {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl fmt::Display for ParentStation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parent Station: {} ({}, {})",
            self.name,
            Coord(self.lat),
            Coord(self.lon)
        )
    }
}

/// One stop served by a route in one direction.
///
/// Stations are immutable once built. The same physical stop shows up once per
/// direction that serves it, so `stop_id` is only unique within a single
/// direction's list.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    stop_id: String,
    stop_name: String,
    name: String,
    city: String,
    latitude: f64,
    longitude: f64,
    parent_station: Option<ParentStation>,
}

impl Station {
    /// Create a station from its required fields and optional parent.
    pub fn new(
        stop_id: impl Into<String>,
        stop_name: impl Into<String>,
        name: impl Into<String>,
        city: impl Into<String>,
        latitude: f64,
        longitude: f64,
        parent_station: Option<ParentStation>,
    ) -> Self {
        Self {
            stop_id: stop_id.into(),
            stop_name: stop_name.into(),
            name: name.into(),
            city: city.into(),
            latitude,
            longitude,
            parent_station,
        }
    }

    pub fn stop_id(&self) -> &str {
        &self.stop_id
    }

    /// Full display name, usually prefixed with the city.
    pub fn stop_name(&self) -> &str {
        &self.stop_name
    }

    /// Short name as printed on the line's schedule.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn parent_station(&self) -> Option<&ParentStation> {
        self.parent_station.as_ref()
    }
}

/// Renders as two lines: the stop itself, then its parent station indented
/// by a tab.
impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}) -> ({}, {})",
            self.stop_name,
            self.name,
            self.city,
            Coord(self.longitude),
            Coord(self.latitude)
        )?;
        match &self.parent_station {
            Some(parent) => write!(f, "\n\t{parent}"),
            None => f.write_str("\n\tNo parent station"),
        }
    }
}

/// Coordinate formatter.
///
/// Uses the shortest round-trip representation but always keeps a fractional
/// digit, so `1.0` prints as `1.0` rather than `1`. Magnitudes below `1e-4` or
/// from `1e16` up switch to exponent form with a signed, two-digit exponent
/// (`1e-05`, `1.5e+16`).
struct Coord(f64);

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if !v.is_finite() {
            return write!(f, "{v}");
        }

        let magnitude = v.abs();
        if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
            // `{:e}` gives e.g. "1.5e16" or "1e-5".
            let exp_form = format!("{v:e}");
            let (mantissa, exponent) = exp_form
                .split_once('e')
                .unwrap_or((exp_form.as_str(), "0"));
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            return write!(f, "{mantissa}e{sign}{digits:0>2}");
        }

        if v.fract() == 0.0 {
            write!(f, "{v:.1}")
        } else {
            write!(f, "{v}")
        }
    }
}
