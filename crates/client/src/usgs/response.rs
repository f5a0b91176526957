//! Catalog response types and normalization.

use std::collections::HashSet;

use quakewatch_core::Earthquake;
use serde::Deserialize;

/// Raw GeoJSON feature collection from the catalog.
#[derive(Debug, Default, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// Individual raw feature.
#[derive(Debug, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub properties: Option<Properties>,
}

/// Core feature properties. Every field may be null.
#[derive(Debug, Default, Deserialize)]
pub struct Properties {
    #[serde(default)]
    pub place: Option<String>,
    #[serde(default)]
    pub mag: Option<f64>,
    #[serde(default)]
    pub sig: Option<i64>,
    #[serde(default)]
    pub time: Option<i64>,
}

/// Convert raw features to earthquakes in first-seen order.
///
/// A feature whose id was already emitted is dropped; the first occurrence
/// wins and is never merged with or overwritten by later ones. Features
/// without an id are skipped.
pub fn normalize(features: Vec<Feature>) -> Vec<Earthquake> {
    let mut seen = HashSet::with_capacity(features.len());
    let mut earthquakes = Vec::with_capacity(features.len());
    let mut duplicates = 0usize;

    for feature in features {
        let Some(id) = feature.id else {
            tracing::debug!("skipping feature without id");
            continue;
        };

        if !seen.insert(id.clone()) {
            duplicates += 1;
            continue;
        }

        let props = feature.properties.unwrap_or_default();
        earthquakes.push(Earthquake {
            id,
            place: props.place,
            magnitude: props.mag,
            significance: props.sig,
            occurred_at: props.time,
        });
    }

    if duplicates > 0 {
        tracing::debug!(duplicates, kept = earthquakes.len(), "dropped duplicate feature ids");
    }

    earthquakes
}
