//! Structuring elements for mathematical morphology
//!
//! A structuring element has two interchangeable forms:
//! - **Coordinate set**: `(row, col)` offsets relative to an origin
//! - **Raster form**: minimal bounding binary raster plus an origin offset
//!
//! The conversions between them are pure functions; no type caches both.

mod conversion;
mod element;

pub use conversion::{
    coordinates_from_array, coordinates_to_raster, raster_to_coordinates, CoordinateSet,
    ElementRaster, Origin,
};
pub use element::ElementShape;
