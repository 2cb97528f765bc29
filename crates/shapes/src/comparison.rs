//! Batch measurement and side-by-side summaries.

use serde::{Deserialize, Serialize};

use crate::result::{measure_with_id, ShapeResult};
use crate::shape::Shape;

/// Measure every shape, ids are the positions in the batch.
///
/// A failing shape yields an error result in its slot and never aborts the batch.
pub fn measure_all(shapes: &[Shape]) -> Vec<ShapeResult> {
    shapes
        .iter()
        .enumerate()
        .map(|(i, shape)| measure_with_id(shape, i.to_string()))
        .collect()
}

/// Extremes over a set of results, as indices into that set.
///
/// Failed results are counted but never selected. Volume extremes only
/// consider solids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    pub count: usize,
    pub failed: usize,
    pub largest_area: Option<usize>,
    pub smallest_area: Option<usize>,
    pub largest_perimeter: Option<usize>,
    pub smallest_perimeter: Option<usize>,
    pub largest_volume: Option<usize>,
    pub smallest_volume: Option<usize>,
    pub total_area: f64,
    pub total_volume: f64,
}

impl ComparisonSummary {
    pub fn of(results: &[ShapeResult]) -> Self {
        let ok: Vec<(usize, &ShapeResult)> = results
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_ok())
            .collect();

        let areas: Vec<(usize, f64)> = ok.iter().map(|(i, r)| (*i, r.area)).collect();
        let perimeters: Vec<(usize, f64)> = ok.iter().map(|(i, r)| (*i, r.perimeter)).collect();
        let volumes: Vec<(usize, f64)> = ok
            .iter()
            .filter_map(|(i, r)| r.volume.map(|v| (*i, v)))
            .collect();

        Self {
            count: results.len(),
            failed: results.len() - ok.len(),
            largest_area: extreme(&areas, |a, b| a > b),
            smallest_area: extreme(&areas, |a, b| a < b),
            largest_perimeter: extreme(&perimeters, |a, b| a > b),
            smallest_perimeter: extreme(&perimeters, |a, b| a < b),
            largest_volume: extreme(&volumes, |a, b| a > b),
            smallest_volume: extreme(&volumes, |a, b| a < b),
            total_area: areas.iter().map(|(_, a)| a).sum(),
            total_volume: volumes.iter().map(|(_, v)| v).sum(),
        }
    }
}

/// First index whose value beats every other under `better`; ties keep the earliest
fn extreme(values: &[(usize, f64)], better: impl Fn(f64, f64) -> bool) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for &(i, v) in values {
        match best {
            Some((_, b)) if !better(v, b) => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}
