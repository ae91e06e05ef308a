//! Turn-by-turn direction synthesis for a calm-route bicycle map.
//!
//! Takes the ordered routed segments produced by the routing backend, each
//! with a heading, distance, optional street name, and OSM road metadata,
//! and folds them into a minimal sequence of human-readable navigation
//! instructions. Map rendering, geocoding, and route computation live in
//! external collaborators; this crate is the pure in-process transformation
//! between them.

pub mod directions;
pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;

pub use directions::{
    Classification, classify, describe_unnamed_street, directions_list, directions_with_text,
    format_directions, format_distance, format_metadata_summary, normalize_heading,
};
pub use error::Error;
pub use loading::{segments_from_feature_collection, segments_from_geojson};
pub use model::{CalmnessType, Cardinal, Direction, Maneuver, RoadMetadata, RouteSegment};
