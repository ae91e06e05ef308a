//! Data model for turn-by-turn direction synthesis
//!
//! Contains the routed-segment input records delivered by the routing
//! backend and the direction records produced for the UI.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Calmness classification of a routed way, used by the UI for
/// routing preference and display styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalmnessType {
    /// Off-street bike path
    Path,
    /// Mellow side street
    Street,
    /// Main street, often with bike lanes
    Route,
    #[default]
    #[serde(other)]
    Other,
}

/// One of eight turn actions derived from the heading change between
/// consecutive segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Maneuver {
    Continue,
    TurnSlightRight,
    TurnRight,
    SharpRight,
    TurnAround,
    SharpLeft,
    TurnLeft,
    TurnSlightLeft,
}

impl Maneuver {
    /// English instruction text for this maneuver.
    pub fn display_text(self) -> &'static str {
        match self {
            Self::Continue => "Continue",
            Self::TurnSlightRight => "Turn slightly to the right",
            Self::TurnRight => "Turn right",
            Self::SharpRight => "Take a sharp right turn",
            Self::TurnAround => "Turn around",
            Self::SharpLeft => "Take a sharp left turn",
            Self::TurnLeft => "Turn left",
            Self::TurnSlightLeft => "Turn slightly to the left",
        }
    }

    pub fn is_slight_turn(self) -> bool {
        matches!(self, Self::TurnSlightLeft | Self::TurnSlightRight)
    }
}

/// One of eight compass points derived from a segment's absolute heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cardinal {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
}

impl Cardinal {
    /// Lowercase English name, as it appears inside instruction text.
    pub fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::Northeast => "northeast",
            Self::East => "east",
            Self::Southeast => "southeast",
            Self::South => "south",
            Self::Southwest => "southwest",
            Self::West => "west",
            Self::Northwest => "northwest",
        }
    }
}

/// OSM-derived road metadata carried on every routed segment, kept around
/// for the debug/inspector view.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadMetadata {
    pub osm_id: Option<i64>,
    pub tag_id: Option<i64>,
    pub oneway: Option<String>,
    pub rule: Option<String>,
    pub priority: Option<f64>,
    pub maxspeed_forward: Option<f64>,
    pub maxspeed_backward: Option<f64>,
    pub osm_tags: HashMap<String, String>,
    pub park_name: Option<String>,
}

/// One atomic piece of routed geometry between two waypoints, in travel
/// order from source to destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSegment {
    /// Street name; absent for unnamed ways.
    #[serde(default)]
    pub name: Option<String>,
    /// Direction of travel in degrees, `[0, 360)`.
    pub heading: f64,
    /// Length in meters.
    pub distance: f64,
    #[serde(rename = "type", default)]
    pub calmness: CalmnessType,
    #[serde(flatten)]
    pub metadata: RoadMetadata,
}

/// One user-facing navigation instruction, formed by merging one or more
/// consecutive segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Direction {
    pub maneuver: Maneuver,
    pub cardinal: Cardinal,
    /// Accumulated meters across all merged segments.
    pub distance: f64,
    /// Heading of the segment that started this instruction.
    pub heading: f64,
    /// Street name, backfilled from constituent segments where possible.
    pub name: Option<String>,
    /// Display name: the street name, or a synthesized description for
    /// unnamed ways.
    pub effective_name: String,
    pub calmness: CalmnessType,
    /// Representative metadata for single-record debug display.
    pub metadata: RoadMetadata,
    /// Metadata of every merged segment, in merge order.
    pub constituent_metadata: Vec<RoadMetadata>,
    /// Indices of the original segments merged into this instruction.
    pub feature_indices: Vec<usize>,
}
