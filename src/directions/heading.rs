//! Heading-based maneuver and cardinal classification.

use crate::error::Error;
use crate::model::{Cardinal, Maneuver};

/// Result of classifying one segment's heading against the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub maneuver: Maneuver,
    pub cardinal: Cardinal,
}

/// Reduce a heading into `[0, 360)`.
///
/// Non-finite headings are an input contract violation by the routing
/// backend and abort direction synthesis.
pub fn normalize_heading(heading: f64, index: usize) -> Result<f64, Error> {
    if !heading.is_finite() {
        return Err(Error::NonFiniteHeading { index, heading });
    }
    Ok(heading.rem_euclid(360.0))
}

/// Classify a segment heading against the previous segment's heading.
///
/// The cardinal comes from the heading alone; the maneuver from the turn
/// angle between the two. The first segment of a route has no previous
/// heading and always reads as `Continue`. Both headings must already be
/// normalized into `[0, 360)`.
pub fn classify(heading: f64, previous_heading: Option<f64>) -> Classification {
    let cardinal = cardinal_for(nearest_45(heading));
    let maneuver = match previous_heading {
        None => Maneuver::Continue,
        Some(previous) => maneuver_for(nearest_45((heading - previous).rem_euclid(360.0))),
    };
    Classification { maneuver, cardinal }
}

/// Round an angle to the nearest 45-degree bucket, wrapping 360 back to 0.
fn nearest_45(angle: f64) -> u16 {
    ((angle / 45.0).round() as u16 * 45) % 360
}

fn maneuver_for(angle: u16) -> Maneuver {
    match angle {
        0 => Maneuver::Continue,
        45 => Maneuver::TurnSlightRight,
        90 => Maneuver::TurnRight,
        135 => Maneuver::SharpRight,
        180 => Maneuver::TurnAround,
        225 => Maneuver::SharpLeft,
        270 => Maneuver::TurnLeft,
        315 => Maneuver::TurnSlightLeft,
        other => {
            log::warn!("turn angle {other} escaped the 45-degree buckets, treating as Continue");
            Maneuver::Continue
        }
    }
}

fn cardinal_for(angle: u16) -> Cardinal {
    match angle {
        0 => Cardinal::North,
        45 => Cardinal::Northeast,
        90 => Cardinal::East,
        135 => Cardinal::Southeast,
        180 => Cardinal::South,
        225 => Cardinal::Southwest,
        270 => Cardinal::West,
        315 => Cardinal::Northwest,
        other => {
            log::warn!("heading bucket {other} has no cardinal, treating as north");
            Cardinal::North
        }
    }
}
