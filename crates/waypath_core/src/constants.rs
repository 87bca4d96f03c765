use crate::graph::Weight;

pub(crate) const INVALID_NODE: usize = usize::MAX;

/// Costs closer than this are considered equal when comparing routes.
pub const COST_EPSILON: Weight = 1e-9;

/// Stand-in for the weight of a zero-cost edge when its inverse is needed.
pub(crate) const MIN_EDGE_WEIGHT: Weight = 1e-9;

pub(crate) const EARTH_RADIUS_KILOMETERS: f64 = 6_371.0;

pub(crate) const DEFAULT_AVERAGE_SPEED_KMH: f64 = 60.0;
