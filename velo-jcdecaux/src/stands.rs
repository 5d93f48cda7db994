use serde::{Deserialize, Serialize};

/// Bike and dock counts inside a JCDecaux stands structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availabilities {
    pub bikes: u32,
    pub stands: u32,
    #[serde(default)]
    pub mechanical_bikes: u32,
    #[serde(default)]
    pub electrical_bikes: u32,
}

/// One JCDecaux stands block: `{"availabilities": {...}, "capacity": n}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stands {
    pub availabilities: Availabilities,
    pub capacity: u32,
}

impl Stands {
    /// Parse a serialized stands cell from the history file.
    ///
    /// Malformed or empty input is a missing value, not an error; the
    /// caller decides whether to skip the row.
    pub fn parse(raw: &str) -> Option<Stands> {
        serde_json::from_str(raw).ok()
    }
}

/// WGS84 station coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    /// Parse a serialized position cell; `None` when the cell is malformed.
    pub fn parse(raw: &str) -> Option<Position> {
        serde_json::from_str(raw).ok()
    }
}
