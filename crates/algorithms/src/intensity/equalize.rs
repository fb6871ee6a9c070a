//! Histogram equalization
//!
//! Spreads the intensity distribution of an image over the full `[0, 255]`
//! range by remapping each intensity through its scaled cumulative count.

use pixmorph_core::{Algorithm, Error, GrayImage, Result};
use tracing::{debug, trace};

use super::lut::{round_half_even, Lut, MAX_INTENSITY};
use crate::histogram::Histogram;

/// Histogram equalization algorithm
#[derive(Debug, Clone, Default)]
pub struct Equalize;

impl Algorithm for Equalize {
    type Input = GrayImage;
    type Output = GrayImage;
    type Params = ();
    type Error = Error;

    fn name(&self) -> &'static str {
        "Equalize"
    }

    fn description(&self) -> &'static str {
        "Global histogram equalization through a cumulative-count lookup table"
    }

    fn execute(&self, input: Self::Input, _params: Self::Params) -> Result<Self::Output> {
        equalize_histogram(&input)
    }
}

/// Build the equalization lookup table of an image.
///
/// `lut[i] = round((L - 1) / N * cumsum(hist)[i])` with `L = 256` and `N` the
/// pixel count. Rounding resolves `.5` ties to the even neighbour, so an image
/// with half its pixels at 0 maps 0 to `round(127.5) = 128`. The table is
/// non-decreasing because it is built from a cumulative sum.
///
/// # Errors
/// [`Error::Domain`] if the image has no pixels.
pub fn equalization_lut(image: &GrayImage) -> Result<Lut> {
    let histogram = Histogram::from_image(image);
    let total = histogram.total();
    if total == 0 {
        let (rows, cols) = image.shape();
        return Err(Error::Domain(format!(
            "cannot equalize a {}x{} image with no pixels",
            rows, cols
        )));
    }

    let coefficient = MAX_INTENSITY / total as f64;
    let cumulative = histogram.cumulative();
    let lut = Lut::from_fn(|i| round_half_even(coefficient * cumulative[i] as f64));
    trace!(coefficient, lut_min = lut[0u8], "equalization lut built");
    Ok(lut)
}

/// Equalize the histogram of a grayscale image.
///
/// The output has the same shape as the input; each pixel is replaced by
/// `equalization_lut(image)[pixel]`.
///
/// # Errors
/// [`Error::Domain`] if the image has no pixels.
pub fn equalize_histogram(image: &GrayImage) -> Result<GrayImage> {
    let (rows, cols) = image.shape();
    debug!(rows, cols, "equalize_histogram");
    let lut = equalization_lut(image)?;
    Ok(lut.apply(image))
}
