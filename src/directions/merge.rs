//! Merging routed segments into user-facing directions.
//!
//! A single left-to-right fold over the segment sequence. Each segment
//! either starts a new direction (a turn, or a street-name change) or is
//! absorbed into the last one (straight continuations, and slight turns
//! that stay on the same named street).

use crate::error::Error;
use crate::model::{Direction, Maneuver, RouteSegment};

use super::describe::describe_unnamed_street;
use super::heading::{Classification, classify, normalize_heading};

/// Accumulator threaded through the fold.
#[derive(Debug, Default)]
struct MergeState {
    directions: Vec<Direction>,
    previous_heading: Option<f64>,
    previous_effective_name: Option<String>,
}

/// Convert an ordered segment sequence into an ordered direction list.
///
/// Every input segment lands in exactly one direction's `feature_indices`,
/// in order; the output is non-empty whenever the input is. Fails only on
/// a non-finite heading, which is a broken input contract.
pub fn directions_list(segments: &[RouteSegment]) -> Result<Vec<Direction>, Error> {
    let mut state = MergeState::default();
    for (index, segment) in segments.iter().enumerate() {
        state.step(index, segment)?;
    }
    log::debug!(
        "merged {} segments into {} directions",
        segments.len(),
        state.directions.len()
    );
    Ok(state.directions)
}

impl MergeState {
    fn step(&mut self, index: usize, segment: &RouteSegment) -> Result<(), Error> {
        let heading = normalize_heading(segment.heading, index)?;
        let classification = classify(heading, self.previous_heading);
        let effective_name = segment
            .name
            .clone()
            .unwrap_or_else(|| describe_unnamed_street(&segment.metadata));

        if self.starts_new_direction(classification.maneuver, &effective_name, segment) {
            self.directions.push(seed_direction(
                index,
                segment,
                heading,
                classification,
                effective_name.clone(),
            ));
        } else if let Some(last) = self.directions.last_mut() {
            merge_into(last, index, segment, &effective_name);
        }

        self.previous_heading = Some(heading);
        self.previous_effective_name = Some(effective_name);
        Ok(())
    }

    fn starts_new_direction(
        &self,
        maneuver: Maneuver,
        effective_name: &str,
        segment: &RouteSegment,
    ) -> bool {
        let same_street = self.previous_effective_name.as_deref() == Some(effective_name);
        // Only real street names collapse a slight turn; a synthesized
        // description matching the previous one is not evidence of the
        // same street.
        let collapse_slight_turn =
            maneuver.is_slight_turn() && same_street && segment.name.is_some();

        let name_changed = self
            .previous_effective_name
            .as_deref()
            .is_some_and(|previous| previous != effective_name);
        let turn_required = maneuver != Maneuver::Continue || self.previous_heading.is_none();

        (name_changed || turn_required) && !collapse_slight_turn
    }
}

fn seed_direction(
    index: usize,
    segment: &RouteSegment,
    heading: f64,
    classification: Classification,
    effective_name: String,
) -> Direction {
    Direction {
        maneuver: classification.maneuver,
        cardinal: classification.cardinal,
        distance: segment.distance,
        heading,
        name: segment.name.clone(),
        effective_name,
        calmness: segment.calmness,
        metadata: segment.metadata.clone(),
        constituent_metadata: vec![segment.metadata.clone()],
        feature_indices: vec![index],
    }
}

fn merge_into(last: &mut Direction, index: usize, segment: &RouteSegment, effective_name: &str) {
    last.distance += segment.distance;
    last.constituent_metadata.push(segment.metadata.clone());
    last.feature_indices.push(index);

    match &segment.name {
        // Sometimes only some ways of a street are named, so backfill the
        // name once a named way shows up.
        Some(name) if last.name.is_none() => {
            last.name = Some(name.clone());
            last.effective_name = effective_name.to_string();
        }
        // While the direction stays unnamed, the latest unnamed way's
        // metadata is the one shown in the inspector.
        None if last.name.is_none() => {
            last.metadata = segment.metadata.clone();
            last.effective_name = effective_name.to_string();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RoadMetadata;

    fn named(name: &str, heading: f64, distance: f64) -> RouteSegment {
        RouteSegment {
            name: Some(name.to_string()),
            heading,
            distance,
            calmness: Default::default(),
            metadata: RoadMetadata::default(),
        }
    }

    fn unnamed(heading: f64, distance: f64, metadata: RoadMetadata) -> RouteSegment {
        RouteSegment {
            name: None,
            heading,
            distance,
            calmness: Default::default(),
            metadata,
        }
    }

    fn tagged(osm_id: i64, tags: &[(&str, &str)]) -> RoadMetadata {
        RoadMetadata {
            osm_id: Some(osm_id),
            osm_tags: tags
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ..RoadMetadata::default()
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(directions_list(&[]).unwrap().is_empty());
    }

    #[test]
    fn first_direction_is_always_continue() {
        let directions = directions_list(&[named("Elm St", 90.0, 100.0)]).unwrap();
        assert_eq!(directions.len(), 1);
        assert_eq!(directions[0].maneuver, Maneuver::Continue);
        assert_eq!(directions[0].effective_name, "Elm St");
    }

    #[test]
    fn straight_continuation_on_same_street_merges() {
        let directions = directions_list(&[
            named("Elm St", 0.0, 100.0),
            named("Elm St", 10.0, 50.0),
        ])
        .unwrap();
        assert_eq!(directions.len(), 1);
        assert_eq!(directions[0].distance, 150.0);
        assert_eq!(directions[0].feature_indices, vec![0, 1]);
    }

    #[test]
    fn slight_turn_on_same_named_street_collapses() {
        let directions = directions_list(&[
            named("Elm St", 0.0, 100.0),
            named("Elm St", 40.0, 50.0),
        ])
        .unwrap();
        assert_eq!(directions.len(), 1);
        assert_eq!(directions[0].distance, 150.0);
    }

    #[test]
    fn slight_turn_on_matching_unnamed_ways_does_not_collapse() {
        let directions = directions_list(&[
            unnamed(0.0, 100.0, RoadMetadata::default()),
            unnamed(40.0, 50.0, RoadMetadata::default()),
        ])
        .unwrap();
        // both describe as "an unknown street", but the slight turn still splits
        assert_eq!(directions.len(), 2);
    }

    #[test]
    fn right_turn_starts_a_new_direction() {
        let directions = directions_list(&[
            named("Elm St", 0.0, 160.0),
            named("Oak Ave", 90.0, 80.0),
        ])
        .unwrap();
        assert_eq!(directions.len(), 2);
        assert_eq!(directions[1].maneuver, Maneuver::TurnRight);
        assert_eq!(directions[1].effective_name, "Oak Ave");
        assert_eq!(directions[1].feature_indices, vec![1]);
    }

    #[test]
    fn name_change_without_turn_starts_a_new_direction() {
        let directions = directions_list(&[
            named("Elm St", 0.0, 100.0),
            named("Oak Ave", 0.0, 100.0),
        ])
        .unwrap();
        assert_eq!(directions.len(), 2);
        assert_eq!(directions[1].maneuver, Maneuver::Continue);
    }

    #[test]
    fn unnamed_then_named_splits_on_effective_name_change() {
        // the unnamed stub resolves to "an unknown street"; the named way
        // continues straight but under a different effective name
        let directions = directions_list(&[
            unnamed(0.0, 30.0, tagged(1, &[])),
            named("Elm St", 0.0, 100.0),
        ])
        .unwrap();
        assert_eq!(directions.len(), 2);
    }

    #[test]
    fn merge_backfills_name_into_an_unnamed_direction() {
        let mut direction = seed_direction(
            0,
            &unnamed(0.0, 100.0, tagged(1, &[])),
            0.0,
            classify(0.0, None),
            "an unknown street".to_string(),
        );
        merge_into(&mut direction, 1, &named("Main St", 0.0, 50.0), "Main St");

        assert_eq!(direction.distance, 150.0);
        assert_eq!(direction.name.as_deref(), Some("Main St"));
        assert_eq!(direction.effective_name, "Main St");
        assert_eq!(direction.feature_indices, vec![0, 1]);
        assert_eq!(direction.constituent_metadata.len(), 2);
    }

    #[test]
    fn merge_does_not_overwrite_an_existing_name() {
        let mut direction = seed_direction(
            0,
            &named("Main St", 0.0, 100.0),
            0.0,
            classify(0.0, None),
            "Main St".to_string(),
        );
        let late = unnamed(0.0, 25.0, tagged(9, &[("highway", "service")]));
        merge_into(&mut direction, 1, &late, "an access road");

        assert_eq!(direction.name.as_deref(), Some("Main St"));
        assert_eq!(direction.effective_name, "Main St");
        assert_eq!(direction.metadata, RoadMetadata::default());
    }

    #[test]
    fn merged_unnamed_ways_keep_latest_metadata() {
        let first = tagged(1, &[("highway", "service")]);
        let second = tagged(2, &[("highway", "service")]);
        let directions = directions_list(&[
            unnamed(0.0, 30.0, first),
            unnamed(0.0, 20.0, second.clone()),
        ])
        .unwrap();
        // both describe as "an access road", straight ahead, so they merge
        assert_eq!(directions.len(), 1);
        assert_eq!(directions[0].metadata, second);
        assert_eq!(directions[0].constituent_metadata.len(), 2);
        assert_eq!(directions[0].effective_name, "an access road");
    }

    #[test]
    fn feature_indices_partition_the_input() {
        let segments = vec![
            named("Elm St", 0.0, 100.0),
            named("Elm St", 40.0, 50.0),
            named("Oak Ave", 90.0, 80.0),
            unnamed(90.0, 10.0, tagged(7, &[("footway", "crossing")])),
            named("Oak Ave", 90.0, 60.0),
            named("Main St", 180.0, 200.0),
        ];
        let directions = directions_list(&segments).unwrap();

        let mut seen: Vec<usize> = Vec::new();
        for direction in &directions {
            seen.extend(&direction.feature_indices);
        }
        assert_eq!(seen, (0..segments.len()).collect::<Vec<_>>());
    }

    #[test]
    fn distance_is_conserved() {
        let segments = vec![
            named("Elm St", 0.0, 12.5),
            named("Elm St", 40.0, 7.25),
            named("Oak Ave", 90.0, 80.0),
            named("Oak Ave", 270.0, 3.0),
        ];
        let directions = directions_list(&segments).unwrap();
        let input: f64 = segments.iter().map(|s| s.distance).sum();
        let output: f64 = directions.iter().map(|d| d.distance).sum();
        assert_eq!(input, output);
    }

    #[test]
    fn non_finite_heading_is_rejected() {
        let result = directions_list(&[named("Elm St", f64::NAN, 10.0)]);
        assert!(matches!(
            result,
            Err(Error::NonFiniteHeading { index: 0, .. })
        ));
    }

    #[test]
    fn zero_heading_on_second_segment_is_a_real_previous_heading() {
        // heading 0.0 must not be mistaken for "no previous heading"
        let directions = directions_list(&[
            named("Elm St", 0.0, 100.0),
            named("Elm St", 0.0, 100.0),
        ])
        .unwrap();
        assert_eq!(directions.len(), 1);
    }
}
