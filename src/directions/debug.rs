//! Compact metadata summaries for the debug/inspector view.

use itertools::Itertools;

use crate::model::RoadMetadata;

/// Render a way's metadata as a single bracketed line, e.g.
/// `[OSM ID: 42, Park: Grant Park, Tags: {highway=service}]`.
///
/// Absent fields are skipped, as is the uninteresting `oneway` value "NO".
/// Tags are sorted by key so the output is stable.
pub fn format_metadata_summary(metadata: &RoadMetadata) -> String {
    let mut parts: Vec<String> = Vec::new();

    match metadata.osm_id {
        Some(osm_id) => parts.push(format!("OSM ID: {osm_id}")),
        None => parts.push("OSM ID: unknown".to_string()),
    }
    if let Some(tag_id) = metadata.tag_id {
        parts.push(format!("Tag ID: {tag_id}"));
    }
    if let Some(park_name) = &metadata.park_name {
        parts.push(format!("Park: {park_name}"));
    }
    if let Some(oneway) = metadata.oneway.as_deref().filter(|&v| v != "NO") {
        parts.push(format!("Oneway: {oneway}"));
    }
    if let Some(rule) = &metadata.rule {
        parts.push(format!("Rule: {rule}"));
    }
    if let Some(priority) = metadata.priority {
        parts.push(format!("Priority: {priority}"));
    }
    if let Some(maxspeed) = metadata.maxspeed_forward {
        parts.push(format!("Max Speed Fwd: {maxspeed}"));
    }
    if let Some(maxspeed) = metadata.maxspeed_backward {
        parts.push(format!("Max Speed Back: {maxspeed}"));
    }
    if !metadata.osm_tags.is_empty() {
        let tags = metadata
            .osm_tags
            .iter()
            .sorted_by(|a, b| a.0.cmp(b.0))
            .map(|(key, value)| format!("{key}={value}"))
            .join(", ");
        parts.push(format!("Tags: {{{tags}}}"));
    }

    format!("[{}]", parts.join(", "))
}
