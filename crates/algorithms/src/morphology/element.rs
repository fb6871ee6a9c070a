//! Predefined structuring element shapes
//!
//! Common neighborhood shapes expressed as coordinate sets centered on the
//! origin, ready for [`coordinates_to_raster`](super::coordinates_to_raster).

use pixmorph_core::{Error, Result};

use super::conversion::CoordinateSet;

/// Shape of a predefined structuring element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementShape {
    /// Square element of given radius (side = 2*radius + 1)
    Square(usize),
    /// Cross (plus-shaped) element of given radius
    Cross(usize),
    /// Disk element of given radius
    Disk(usize),
}

impl Default for ElementShape {
    fn default() -> Self {
        ElementShape::Square(1)
    }
}

impl ElementShape {
    /// Validate the shape, returning an error for a zero radius
    pub fn validate(&self) -> Result<()> {
        if self.radius() == 0 {
            return Err(Error::invalid_argument(
                "radius",
                0,
                "structuring element radius must be at least 1",
            ));
        }
        Ok(())
    }

    /// Get the radius of the structuring element
    pub fn radius(&self) -> usize {
        match self {
            ElementShape::Square(r) | ElementShape::Cross(r) | ElementShape::Disk(r) => *r,
        }
    }

    /// Compute the `(row, col)` offsets of all active cells around `(0, 0)`
    pub fn coordinates(&self) -> Result<CoordinateSet> {
        self.validate()?;
        let r = self.radius() as isize;
        let window = (-r..=r).flat_map(|dr| (-r..=r).map(move |dc| (dr, dc)));

        let coordinates: CoordinateSet = match self {
            ElementShape::Square(_) => window.collect(),
            ElementShape::Cross(_) => window.filter(|&(dr, dc)| dr == 0 || dc == 0).collect(),
            ElementShape::Disk(_) => window
                .filter(|&(dr, dc)| dr * dr + dc * dc <= r * r)
                .collect(),
        };
        Ok(coordinates)
    }
}
