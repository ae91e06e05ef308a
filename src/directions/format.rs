//! Rendering directions as user-facing instruction text.

use crate::model::Direction;

const METERS_PER_MILE: f64 = 1609.344;
const METERS_PER_FOOT: f64 = 0.3048;
/// Distances below this many miles read better in feet.
const FEET_CUTOFF_MILES: f64 = 0.09;

/// Format an ordered direction list as instruction strings, one per
/// direction. The last instruction gains the destination suffix.
pub fn format_directions(directions: &[Direction]) -> Vec<String> {
    let mut lines: Vec<String> = directions
        .iter()
        .enumerate()
        .map(|(index, direction)| {
            if index == 0 {
                format!(
                    "Head {} on {} for {}",
                    direction.cardinal.name(),
                    direction.effective_name,
                    format_distance(direction.distance)
                )
            } else {
                format!(
                    "{} onto {} and head {} for {}",
                    direction.maneuver.display_text(),
                    direction.effective_name,
                    direction.cardinal.name(),
                    format_distance(direction.distance)
                )
            }
        })
        .collect();

    if let Some(last) = lines.last_mut() {
        last.push_str(" until you reach your destination");
    }

    lines
}

/// Pair each direction with its instruction text, consuming the list.
pub fn directions_with_text(directions: Vec<Direction>) -> Vec<(Direction, String)> {
    let lines = format_directions(&directions);
    directions.into_iter().zip(lines).collect()
}

/// Format a distance in meters as feet below the cutoff, tenths of a mile
/// above it.
pub fn format_distance(meters: f64) -> String {
    let miles = meters / METERS_PER_MILE;
    if miles < FEET_CUTOFF_MILES {
        let feet = (meters / METERS_PER_FOOT).round();
        let unit = if feet == 1.0 { "foot" } else { "feet" };
        format!("{feet:.0} {unit}")
    } else {
        let rounded_miles = (miles * 10.0).round() / 10.0;
        let unit = if rounded_miles == 1.0 { "mile" } else { "miles" };
        format!("{rounded_miles} {unit}")
    }
}
