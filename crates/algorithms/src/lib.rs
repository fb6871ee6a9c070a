//! # Pixmorph Algorithms
//!
//! Pure pixel-mapping and structuring element algorithms for 8-bit
//! grayscale images.
//!
//! ## Available Algorithm Categories
//!
//! - **intensity**: Lookup tables, histogram equalization, gamma correction, bit planes
//! - **histogram**: Histograms, CDFs, histogram matching (specification)
//! - **morphology**: Structuring element coordinate/raster conversion and shapes

pub mod histogram;
pub mod intensity;
pub mod morphology;

mod maybe_rayon;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::histogram::{
        match_cdfs, match_histogram, match_histogram_dyn, matching_lut, Cdf, CdfSearch,
        Histogram, HistogramMatch, MatchParams, MatchReference,
    };
    pub use crate::intensity::{
        bit_planes, equalization_lut, equalize_histogram, gamma_correct, gamma_lut,
        reconstruct_from_bit_planes, BitPlanes, Equalize, GammaCorrection, GammaParams, Lut,
    };
    pub use crate::morphology::{
        coordinates_from_array, coordinates_to_raster, raster_to_coordinates, CoordinateSet,
        ElementRaster, ElementShape, Origin,
    };
    pub use pixmorph_core::prelude::*;
}
