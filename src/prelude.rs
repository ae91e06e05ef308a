// Re-export key components
pub use crate::directions::{
    directions_list, directions_with_text, format_directions, format_distance,
};
pub use crate::error::Error;
pub use crate::loading::{segments_from_feature_collection, segments_from_geojson};

// Core types for the direction pipeline
pub use crate::model::{CalmnessType, Cardinal, Direction, Maneuver, RoadMetadata, RouteSegment};
