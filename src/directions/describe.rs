//! Human descriptions for ways that carry no street name.

use crate::model::RoadMetadata;

/// Describe an unnamed way from its OSM tags and containing park, e.g.
/// "an alley" or "a path inside Lincoln Park".
///
/// Rules are evaluated in source order, first match wins. The sidewalk rule
/// is only reachable when `footway` is not `crossing`, since the crossing
/// rule above it also matches on `footway`.
pub fn describe_unnamed_street(metadata: &RoadMetadata) -> String {
    let tag = |key: &str| metadata.osm_tags.get(key).map(String::as_str);

    let mut description = if tag("highway") == Some("service") && tag("service") == Some("alley") {
        "an alley"
    } else if tag("highway") == Some("service") {
        "an access road"
    } else if tag("footway") == Some("crossing") {
        "a crosswalk"
    } else if tag("highway") == Some("footway") && tag("footway") == Some("sidewalk") {
        "a sidewalk"
    } else if metadata.park_name.is_some() {
        // Inside a park with no more specific description, call it a path
        "a path"
    } else {
        "an unknown street"
    }
    .to_string();

    if let Some(park_name) = &metadata.park_name {
        description.push_str(" inside ");
        description.push_str(park_name);
    }

    description
}
