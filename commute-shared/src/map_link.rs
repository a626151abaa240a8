//! Extracts coordinates from links pasted out of web map services.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

const NUMBER: &str = r"-?\d{1,3}(?:\.\d+)?";

/// Path form used by most map services: `.../@6.4541,3.3947,15z`.
static AT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"@({NUMBER}),({NUMBER})")).expect("static pattern compiles")
});

/// A `lat,lng` pair standing on its own.
static PAIR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^\s*({NUMBER})\s*,\s*({NUMBER})\s*$")).expect("static pattern compiles")
});

/// Fragment form: `#map=15/6.4541/3.3947`.
static FRAGMENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"map=\d+/({NUMBER})/({NUMBER})")).expect("static pattern compiles")
});

/// Query parameters carrying a `lat,lng` pair, in lookup order.
const PAIR_PARAMS: [&str; 4] = ["q", "query", "ll", "destination"];

/// A WGS84 position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, MapLinkError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(MapLinkError::OutOfRange {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapLinkError {
    #[error("paste a map link or a \"lat, lng\" pair")]
    Empty,
    #[error("no coordinates found in the link")]
    NoCoordinates,
    #[error("coordinates {latitude}, {longitude} are out of range")]
    OutOfRange { latitude: f64, longitude: f64 },
}

/// Finds the position a map link points at.
///
/// Accepts `@lat,lng` path segments, `q`/`query`/`ll`/`destination` query
/// parameters, `mlat`/`mlon` pairs, `#map=zoom/lat/lng` fragments and bare
/// `lat,lng` text.
pub fn parse_map_link(input: &str) -> Result<Coordinates, MapLinkError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(MapLinkError::Empty);
    }

    if let Some(captures) = AT_PATTERN.captures(trimmed) {
        return from_captures(&captures);
    }

    if let Ok(url) = Url::parse(trimmed)
        && let Some(found) = from_url(&url)
    {
        return found;
    }

    if let Some(captures) = PAIR_PATTERN.captures(trimmed) {
        return from_captures(&captures);
    }

    Err(MapLinkError::NoCoordinates)
}

fn from_url(url: &Url) -> Option<Result<Coordinates, MapLinkError>> {
    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    let param = |name: &str| {
        pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    };

    for name in PAIR_PARAMS {
        if let Some(captures) = param(name).and_then(|value| PAIR_PATTERN.captures(value)) {
            return Some(from_captures(&captures));
        }
    }

    if let (Some(lat), Some(lng)) = (param("mlat"), param("mlon"))
        && let (Ok(latitude), Ok(longitude)) = (lat.trim().parse(), lng.trim().parse())
    {
        return Some(Coordinates::new(latitude, longitude));
    }

    url.fragment()
        .and_then(|fragment| FRAGMENT_PATTERN.captures(fragment))
        .map(|captures| from_captures(&captures))
}

fn from_captures(captures: &Captures<'_>) -> Result<Coordinates, MapLinkError> {
    let number = |index: usize| {
        captures
            .get(index)
            .and_then(|found| found.as_str().parse::<f64>().ok())
            .ok_or(MapLinkError::NoCoordinates)
    };
    Coordinates::new(number(1)?, number(2)?)
}
