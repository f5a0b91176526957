//! Single-event detail decoding.
//!
//! Coordinates are resolved from a fixed list of sources, highest priority
//! first:
//!
//! 1. `geometry.coordinates` (`[lon, lat, depth]`)
//! 2. `properties.latitude` / `properties.longitude`
//! 3. first `dyfi` product
//! 4. first `ground-failure` product
//!
//! When no source has a usable value the field is [`Resolved::Unknown`].

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::error::CatalogError;

/// Where a resolved coordinate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateSource {
    Geometry,
    Properties,
    Dyfi,
    GroundFailure,
}

/// A value resolved through a fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolved<T> {
    Known { value: T, source: CoordinateSource },
    Unknown,
}

impl<T: Copy> Resolved<T> {
    pub fn value(&self) -> Option<T> {
        match self {
            Resolved::Known { value, .. } => Some(*value),
            Resolved::Unknown => None,
        }
    }
}

/// Decoded per-event detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DetailRecord {
    pub id: String,
    pub title: Option<String>,
    pub place: Option<String>,
    pub magnitude: Option<f64>,
    pub significance: Option<i64>,
    /// Epoch milliseconds.
    pub occurred_at: Option<i64>,
    pub tsunami: bool,
    pub felt: Option<i64>,
    pub alert: Option<String>,
    pub latitude: Resolved<f64>,
    pub longitude: Resolved<f64>,
}

impl DetailRecord {
    pub fn occurred_at_utc(&self) -> Option<DateTime<Utc>> {
        self.occurred_at.and_then(DateTime::from_timestamp_millis)
    }
}

/// Number that the catalog sometimes encodes as a string (product properties).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Number(f64),
    Text(String),
}

impl LooseNumber {
    fn as_f64(&self) -> Option<f64> {
        let value = match self {
            LooseNumber::Number(n) => Some(*n),
            LooseNumber::Text(s) => s.trim().parse().ok(),
        };
        value.filter(|n: &f64| n.is_finite())
    }
}

#[derive(Debug, Default, Deserialize)]
struct LatLon {
    #[serde(default)]
    latitude: Option<LooseNumber>,
    #[serde(default)]
    longitude: Option<LooseNumber>,
}

#[derive(Debug, Deserialize)]
struct Product {
    #[serde(default)]
    properties: LatLon,
}

#[derive(Debug, Default, Deserialize)]
struct Products {
    #[serde(default)]
    dyfi: Vec<Product>,
    #[serde(default, rename = "ground-failure", alias = "groundFailure")]
    ground_failure: Vec<Product>,
}

#[derive(Debug, Default, Deserialize)]
struct DetailProperties {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    place: Option<String>,
    #[serde(default)]
    mag: Option<f64>,
    #[serde(default)]
    sig: Option<i64>,
    #[serde(default)]
    time: Option<i64>,
    #[serde(default)]
    tsunami: Option<i64>,
    #[serde(default)]
    felt: Option<i64>,
    #[serde(default)]
    alert: Option<String>,
    #[serde(flatten)]
    position: LatLon,
    #[serde(default)]
    products: Option<Products>,
}

#[derive(Debug, Default, Deserialize)]
struct Geometry {
    #[serde(default)]
    coordinates: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct DetailFeature {
    id: String,
    #[serde(default)]
    properties: Option<DetailProperties>,
    #[serde(default)]
    geometry: Option<Geometry>,
}

/// Event lookups return a bare feature; some mirrors wrap it in a collection.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EventBody {
    Collection { features: Vec<DetailFeature> },
    Feature(DetailFeature),
}

/// Decode an event lookup body for `id`.
///
/// # Errors
///
/// `CatalogError::NotFound` for an empty collection, `CatalogError::Parse`
/// when the body is not a feature.
pub fn decode_detail(id: &str, body: &[u8]) -> Result<DetailRecord, CatalogError> {
    let body: EventBody = serde_json::from_slice(body).map_err(|e| CatalogError::Parse(e.to_string()))?;

    let feature = match body {
        EventBody::Feature(feature) => feature,
        EventBody::Collection { features } => features
            .into_iter()
            .next()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?,
    };

    Ok(DetailRecord::from(feature))
}

impl From<DetailFeature> for DetailRecord {
    fn from(feature: DetailFeature) -> Self {
        let props = feature.properties.unwrap_or_default();
        let coordinates = feature.geometry.map(|g| g.coordinates).unwrap_or_default();
        let products = props.products.unwrap_or_default();

        let candidates = |axis: Axis| {
            let geometry = coordinates.get(axis.geometry_index()).copied().flatten();
            [
                (CoordinateSource::Geometry, geometry),
                (CoordinateSource::Properties, axis.pick(&props.position)),
                (CoordinateSource::Dyfi, products.dyfi.first().and_then(|p| axis.pick(&p.properties))),
                (
                    CoordinateSource::GroundFailure,
                    products.ground_failure.first().and_then(|p| axis.pick(&p.properties)),
                ),
            ]
        };

        let latitude = resolve(candidates(Axis::Latitude));
        let longitude = resolve(candidates(Axis::Longitude));

        DetailRecord {
            id: feature.id,
            title: props.title,
            place: props.place,
            magnitude: props.mag,
            significance: props.sig,
            occurred_at: props.time,
            tsunami: props.tsunami.is_some_and(|t| t != 0),
            felt: props.felt,
            alert: props.alert,
            latitude,
            longitude,
        }
    }
}

#[derive(Clone, Copy)]
enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    fn geometry_index(self) -> usize {
        match self {
            Axis::Longitude => 0,
            Axis::Latitude => 1,
        }
    }

    fn pick(self, position: &LatLon) -> Option<f64> {
        let raw = match self {
            Axis::Latitude => position.latitude.as_ref(),
            Axis::Longitude => position.longitude.as_ref(),
        };
        raw.and_then(LooseNumber::as_f64)
    }
}

fn resolve(candidates: [(CoordinateSource, Option<f64>); 4]) -> Resolved<f64> {
    candidates
        .into_iter()
        .find_map(|(source, value)| value.map(|value| Resolved::Known { value, source }))
        .unwrap_or(Resolved::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_EVENT: &str = r#"{
        "type": "Feature",
        "id": "us7000abcd",
        "properties": {
            "title": "M 6.1 - 20 km SW of Town",
            "place": "20 km SW of Town",
            "mag": 6.1,
            "sig": 720,
            "time": 1700000000000,
            "tsunami": 1,
            "felt": 312,
            "alert": "yellow"
        },
        "geometry": {"type": "Point", "coordinates": [142.37, 38.29, 24.0]}
    }"#;

    #[test]
    fn test_decode_full_event() {
        let record = decode_detail("us7000abcd", FULL_EVENT.as_bytes()).unwrap();
        assert_eq!(record.id, "us7000abcd");
        assert_eq!(record.title.as_deref(), Some("M 6.1 - 20 km SW of Town"));
        assert_eq!(record.significance, Some(720));
        assert!(record.tsunami);
        assert_eq!(record.felt, Some(312));
        assert_eq!(record.alert.as_deref(), Some("yellow"));
        assert_eq!(record.latitude, Resolved::Known { value: 38.29, source: CoordinateSource::Geometry });
        assert_eq!(record.longitude, Resolved::Known { value: 142.37, source: CoordinateSource::Geometry });
        assert!(record.occurred_at_utc().is_some());
    }

    #[test]
    fn test_fallback_to_properties() {
        let json = r#"{
            "id": "nc1",
            "properties": {"tsunami": 0, "latitude": 37.5, "longitude": "-122.1"},
            "geometry": null
        }"#;
        let record = decode_detail("nc1", json.as_bytes()).unwrap();
        assert!(!record.tsunami);
        assert_eq!(record.latitude, Resolved::Known { value: 37.5, source: CoordinateSource::Properties });
        assert_eq!(record.longitude, Resolved::Known { value: -122.1, source: CoordinateSource::Properties });
    }

    #[test]
    fn test_fallback_to_products_in_priority_order() {
        let json = r#"{
            "id": "ak1",
            "properties": {
                "products": {
                    "dyfi": [{"properties": {"latitude": "61.2"}}],
                    "ground-failure": [{"properties": {"latitude": "1.0", "longitude": "-149.9"}}]
                }
            }
        }"#;
        let record = decode_detail("ak1", json.as_bytes()).unwrap();
        assert_eq!(record.latitude, Resolved::Known { value: 61.2, source: CoordinateSource::Dyfi });
        assert_eq!(record.longitude, Resolved::Known { value: -149.9, source: CoordinateSource::GroundFailure });
    }

    #[test]
    fn test_unknown_when_no_source() {
        let json = r#"{"id": "x1", "properties": {"products": {"dyfi": [{"properties": {"latitude": "n/a"}}]}}}"#;
        let record = decode_detail("x1", json.as_bytes()).unwrap();
        assert_eq!(record.latitude, Resolved::Unknown);
        assert_eq!(record.longitude, Resolved::Unknown);
        assert_eq!(record.latitude.value(), None);
    }

    #[test]
    fn test_null_geometry_entry_falls_through() {
        let json = r#"{"id": "x2", "properties": {"latitude": 10.0}, "geometry": {"coordinates": [5.0, null]}}"#;
        let record = decode_detail("x2", json.as_bytes()).unwrap();
        assert_eq!(record.latitude, Resolved::Known { value: 10.0, source: CoordinateSource::Properties });
        assert_eq!(record.longitude, Resolved::Known { value: 5.0, source: CoordinateSource::Geometry });
    }

    #[test]
    fn test_empty_collection_is_not_found() {
        let json = r#"{"type": "FeatureCollection", "features": []}"#;
        let result = decode_detail("gone", json.as_bytes());
        assert!(matches!(result, Err(CatalogError::NotFound(id)) if id == "gone"));
    }

    #[test]
    fn test_garbage_is_parse_error() {
        let result = decode_detail("x", b"<html>oops</html>");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_resolved_serialization() {
        let known = Resolved::Known { value: 1.5, source: CoordinateSource::Dyfi };
        assert_eq!(
            serde_json::to_value(known).unwrap(),
            serde_json::json!({"status": "known", "value": 1.5, "source": "dyfi"})
        );
        assert_eq!(serde_json::to_value(Resolved::<f64>::Unknown).unwrap(), serde_json::json!({"status": "unknown"}));
    }
}
