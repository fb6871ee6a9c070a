//! 256-entry intensity lookup tables

use std::ops::Index;

use pixmorph_core::{GrayImage, Raster, INTENSITY_LEVELS};

use crate::maybe_rayon::*;

/// Maximum intensity of an 8-bit image, as `f64`.
pub(crate) const MAX_INTENSITY: f64 = (INTENSITY_LEVELS - 1) as f64;

/// Lookup table mapping each source intensity to an output intensity.
///
/// Applying a LUT is a per-pixel index operation, so every intensity
/// transform in this crate reduces to building one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lut([u8; INTENSITY_LEVELS]);

impl Lut {
    /// Wrap an existing table
    pub fn new(table: [u8; INTENSITY_LEVELS]) -> Self {
        Self(table)
    }

    /// Table mapping every intensity to itself
    pub fn identity() -> Self {
        Self::from_fn(|i| i as u8)
    }

    /// Build a table by evaluating `f` for each intensity `0..256`
    pub fn from_fn(f: impl FnMut(usize) -> u8) -> Self {
        Self(std::array::from_fn(f))
    }

    /// Underlying table
    pub fn as_array(&self) -> &[u8; INTENSITY_LEVELS] {
        &self.0
    }

    /// Whether `lut[i] <= lut[i + 1]` holds for every `i`
    pub fn is_monotone(&self) -> bool {
        self.0.windows(2).all(|w| w[0] <= w[1])
    }

    /// Whether the table maps every intensity to itself
    pub fn is_identity(&self) -> bool {
        self.0.iter().enumerate().all(|(i, &v)| v as usize == i)
    }

    /// Remap every pixel of `image` through the table.
    ///
    /// The output is a newly allocated image of the same shape. Rows are
    /// processed in parallel when the `parallel` feature is enabled.
    pub fn apply(&self, image: &GrayImage) -> GrayImage {
        let (rows, cols) = image.shape();
        let mut data = image.data().to_owned();
        if rows == 0 || cols == 0 {
            return Raster::from_array(data);
        }

        let table = &self.0;
        match data.as_slice_mut() {
            Some(pixels) => pixels.par_chunks_mut(cols).for_each(|row| {
                for v in row.iter_mut() {
                    *v = table[*v as usize];
                }
            }),
            None => data.mapv_inplace(|v| table[v as usize]),
        }
        Raster::from_array(data)
    }
}

impl Default for Lut {
    fn default() -> Self {
        Self::identity()
    }
}

impl Index<u8> for Lut {
    type Output = u8;

    fn index(&self, intensity: u8) -> &u8 {
        &self.0[intensity as usize]
    }
}

/// Round to the nearest integer with ties to even, clamped to `[0, 255]`.
///
/// `127.5` rounds to `128`, `126.5` rounds to `126`.
pub(crate) fn round_half_even(value: f64) -> u8 {
    value.round_ties_even().clamp(0.0, MAX_INTENSITY) as u8
}
