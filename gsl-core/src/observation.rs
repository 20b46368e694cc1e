use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Date format used by the eBird observation exports: "YYYY-MM-DD".
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A GeoJSON feature collection as exported by the observation pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: FeatureProperties,
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureProperties {
    pub observation_date: Option<String>,
    pub species_reported: Option<String>,
}

/// Point geometry. Coordinates are `[longitude, latitude]` and are carried
/// through untouched for the projection collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Geometry {
    pub coordinates: [f64; 2],
}

/// A single bird observation checklist entry.
#[derive(Debug, Clone)]
pub struct Observation {
    pub date: NaiveDate,
    pub species_count: u32,
    /// `[longitude, latitude]` of the checklist location.
    pub coordinates: [f64; 2],
}

impl Observation {
    /// Parse a GeoJSON document into observations.
    ///
    /// A document that is not valid JSON is an error for the caller to log;
    /// individual features with a missing or unparsable date or count are
    /// silently dropped, never zeroed.
    pub fn from_geojson_str(body: &str) -> anyhow::Result<Vec<Observation>> {
        let collection: FeatureCollection = serde_json::from_str(body)?;
        Ok(Observation::from_features(&collection.features))
    }

    /// Fallibly convert features, keeping only the ones that parse.
    pub fn from_features(features: &[Feature]) -> Vec<Observation> {
        features
            .iter()
            .filter_map(|feature| feature.try_into().ok())
            .collect()
    }
}

impl TryFrom<&Feature> for Observation {
    type Error = ();

    fn try_from(feature: &Feature) -> Result<Self, Self::Error> {
        let date_str = feature.properties.observation_date.as_deref().ok_or(())?;
        let date = NaiveDate::parse_from_str(date_str, DATE_FORMAT).map_err(|_| ())?;
        let species_count = feature
            .properties
            .species_reported
            .as_deref()
            .ok_or(())?
            .trim()
            .parse::<u32>()
            .map_err(|_| ())?;
        let coordinates = feature.geometry.as_ref().ok_or(())?.coordinates;
        Ok(Observation {
            date,
            species_count,
            coordinates,
        })
    }
}

impl PartialEq for Observation {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date && self.coordinates == other.coordinates
    }
}

impl PartialOrd for Observation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.date.cmp(&other.date))
    }
}

#[cfg(test)]
mod tests {
    use super::Observation;
    use chrono::NaiveDate;

    const GEOJSON: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"observation_date": "2004-03-14", "species_reported": "12"},
                "geometry": {"type": "Point", "coordinates": [-112.2146, 40.7]}
            },
            {
                "type": "Feature",
                "properties": {"observation_date": "not-a-date", "species_reported": "3"},
                "geometry": {"type": "Point", "coordinates": [-111.9, 40.5]}
            },
            {
                "type": "Feature",
                "properties": {"observation_date": "2004-03-15", "species_reported": "many"},
                "geometry": {"type": "Point", "coordinates": [-111.9, 40.5]}
            },
            {
                "type": "Feature",
                "properties": {"species_reported": "7"},
                "geometry": {"type": "Point", "coordinates": [-111.9, 40.5]}
            }
        ]
    }"#;

    #[test]
    fn test_invalid_features_are_dropped() {
        let observations = Observation::from_geojson_str(GEOJSON).unwrap();
        assert_eq!(observations.len(), 1);
        assert_eq!(
            observations[0].date,
            NaiveDate::from_ymd_opt(2004, 3, 14).unwrap()
        );
        assert_eq!(observations[0].species_count, 12);
        assert_eq!(observations[0].coordinates, [-112.2146, 40.7]);
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(Observation::from_geojson_str("not json").is_err());
    }

    #[test]
    fn test_empty_collection() {
        let observations = Observation::from_geojson_str(r#"{"features": []}"#).unwrap();
        assert!(observations.is_empty());
    }
}
