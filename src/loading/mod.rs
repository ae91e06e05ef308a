//! This module is responsible for turning routed geometry delivered by the
//! routing backend (a GeoJSON `FeatureCollection` with per-feature street
//! properties) into the segment records the direction pipeline consumes.

use geojson::FeatureCollection;

use crate::error::Error;
use crate::model::RouteSegment;

/// Parse a GeoJSON string from the routing backend into routed segments.
pub fn segments_from_geojson(input: &str) -> Result<Vec<RouteSegment>, Error> {
    let collection: FeatureCollection = input.parse()?;
    segments_from_feature_collection(collection)
}

/// Extract routed segments from an already-parsed `FeatureCollection`.
///
/// Feature order is the travel order and is preserved. Each feature must
/// carry `heading` and `distance` properties; everything else defaults.
pub fn segments_from_feature_collection(
    collection: FeatureCollection,
) -> Result<Vec<RouteSegment>, Error> {
    let mut segments = Vec::with_capacity(collection.features.len());
    for (index, feature) in collection.features.into_iter().enumerate() {
        let properties = feature
            .properties
            .ok_or_else(|| Error::InvalidData(format!("feature {index} has no properties")))?;
        let segment: RouteSegment =
            serde_json::from_value(serde_json::Value::Object(properties))
                .map_err(|e| Error::InvalidData(format!("feature {index}: {e}")))?;
        if !segment.distance.is_finite() || segment.distance < 0.0 {
            return Err(Error::InvalidData(format!(
                "feature {index} has invalid distance {}",
                segment.distance
            )));
        }
        segments.push(segment);
    }
    log::debug!("loaded {} routed segments", segments.len());
    Ok(segments)
}
