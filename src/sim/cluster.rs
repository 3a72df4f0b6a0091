//! Win condition
//!
//! The board is sorted when, for every color with at least two ducks, each of
//! those ducks has a same-colored duck strictly within the cluster radius.
//! Colors with a single duck are satisfied trivially.

use std::collections::BTreeMap;

use super::state::Duck;
use crate::palette::DuckColor;

/// Whether every color group is clustered
pub fn is_sorted(ducks: &[Duck], cluster_radius: f64) -> bool {
    group_by_color(ducks)
        .values()
        .all(|group| group_is_clustered(group, cluster_radius))
}

/// Colors whose ducks are not all clustered yet, in palette order
pub fn unsorted_colors(ducks: &[Duck], cluster_radius: f64) -> Vec<DuckColor> {
    group_by_color(ducks)
        .into_iter()
        .filter(|(_, group)| !group_is_clustered(group, cluster_radius))
        .map(|(color, _)| color)
        .collect()
}

fn group_by_color(ducks: &[Duck]) -> BTreeMap<DuckColor, Vec<&Duck>> {
    let mut groups: BTreeMap<DuckColor, Vec<&Duck>> = BTreeMap::new();
    for duck in ducks {
        groups.entry(duck.color).or_default().push(duck);
    }
    groups
}

fn group_is_clustered(group: &[&Duck], cluster_radius: f64) -> bool {
    if group.len() < 2 {
        return true;
    }
    group.iter().enumerate().all(|(i, duck)| {
        group
            .iter()
            .enumerate()
            .any(|(j, other)| i != j && duck.distance_to(other) < cluster_radius)
    })
}
