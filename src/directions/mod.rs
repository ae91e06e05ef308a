//! The direction-synthesis pipeline: classify headings, describe unnamed
//! ways, merge segments into instructions, format them for display.

mod debug;
mod describe;
mod format;
mod heading;
mod merge;

pub use debug::format_metadata_summary;
pub use describe::describe_unnamed_street;
pub use format::{directions_with_text, format_directions, format_distance};
pub use heading::{Classification, classify, normalize_heading};
pub use merge::directions_list;
