//! TimestampedGeoJson document for the time-slider map renderer.
//!
//! One feature per (station, grid time) pair: a point at the station with a
//! timestamp and a style carrying the gradient color. The renderer owns the
//! slider itself (period, playback); this module only produces the feature
//! collection it animates.

use crate::color::Rgb;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Time format expected in feature properties.
pub const FEATURE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> FeatureCollection {
        FeatureCollection {
            kind: "FeatureCollection",
            features,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub geometry: Geometry,
    pub properties: Properties,
}

#[derive(Debug, Serialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// `[longitude, latitude]`, GeoJSON axis order
    pub coordinates: [f64; 2],
}

#[derive(Debug, Serialize)]
pub struct Properties {
    pub time: String,
    pub style: Style,
    pub icon: &'static str,
    pub popup: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    pub color: String,
    pub fill_color: String,
    pub fill_opacity: f64,
    pub radius: u32,
}

/// Build one colored map point for a station at one grid time.
pub fn bike_feature(
    name: &str,
    latitude: f64,
    longitude: f64,
    time: NaiveDateTime,
    bikes: u32,
    color: Rgb,
) -> Feature {
    let hex = color.to_hex();
    Feature {
        kind: "Feature",
        geometry: Geometry {
            kind: "Point",
            coordinates: [longitude, latitude],
        },
        properties: Properties {
            time: time.format(FEATURE_TIME_FORMAT).to_string(),
            style: Style {
                color: hex.clone(),
                fill_color: hex,
                fill_opacity: 0.7,
                radius: 8,
            },
            icon: "circle",
            popup: format!("{}<br>Bikes available: {}", name, bikes),
        },
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::color::color_for;

    #[test]
    fn test_feature_shape() {
        let time =
            NaiveDateTime::parse_from_str("2024-06-01T08:15:00", FEATURE_TIME_FORMAT).unwrap();
        let feature = bike_feature(
            "00029 - VALADE",
            43.6078,
            1.4419,
            time,
            0,
            color_for(0.0, 0.0, 10.0),
        );
        let json = serde_json::to_value(&feature).unwrap();

        assert_eq!(json["type"], "Feature");
        assert_eq!(json["geometry"]["type"], "Point");
        // GeoJSON puts longitude first
        assert_eq!(json["geometry"]["coordinates"][0], 1.4419);
        assert_eq!(json["geometry"]["coordinates"][1], 43.6078);
        assert_eq!(json["properties"]["time"], "2024-06-01T08:15:00");
        assert_eq!(json["properties"]["style"]["color"], "#a50026");
        assert_eq!(json["properties"]["style"]["fillColor"], "#a50026");
        assert_eq!(json["properties"]["style"]["fillOpacity"], 0.7);
        assert_eq!(json["properties"]["style"]["radius"], 8);
        assert_eq!(json["properties"]["icon"], "circle");
        assert_eq!(
            json["properties"]["popup"],
            "00029 - VALADE<br>Bikes available: 0"
        );
    }

    #[test]
    fn test_collection_shape() {
        let collection = FeatureCollection::new(Vec::new());
        let json = serde_json::to_value(&collection).unwrap();
        assert_eq!(json["type"], "FeatureCollection");
        assert_eq!(json["features"].as_array().unwrap().len(), 0);
    }
}
