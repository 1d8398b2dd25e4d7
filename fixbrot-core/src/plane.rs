use serde::{Deserialize, Serialize};

use crate::fixed::Fixed;

/// A point in the complex plane, both components in Q14 fixed point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaneCoordinate {
    pub re: Fixed,
    pub im: Fixed,
}

impl PlaneCoordinate {
    pub fn new(re: Fixed, im: Fixed) -> Self {
        Self { re, im }
    }
}
