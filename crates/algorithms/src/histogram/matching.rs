//! Histogram matching (specification)
//!
//! Maps each source intensity to the reference intensity whose cumulative
//! probability is nearest:
//!
//! `mapping[i] = argmin_j |source_cdf[i] - reference_cdf[j]|`
//!
//! with ties broken by the smallest `j`.

use ndarray::{ArrayViewD, Ix2};
use pixmorph_core::{Algorithm, Error, GrayImage, Raster, Result, INTENSITY_LEVELS};
use tracing::{debug, trace};

use super::distribution::{Cdf, Histogram};
use crate::intensity::Lut;

/// Target distribution for histogram matching
#[derive(Debug, Clone, Copy)]
pub enum MatchReference<'a> {
    /// Target histogram given as 256 non-negative weights
    Weights(&'a [f64]),
    /// Reference image whose histogram is the target
    Image(&'a GrayImage),
}

impl MatchReference<'_> {
    /// Normalized CDF of the reference distribution
    pub fn cdf(&self) -> Result<Cdf> {
        match self {
            MatchReference::Weights(weights) => Cdf::from_weights(weights),
            MatchReference::Image(image) => Histogram::from_image(image).cdf(),
        }
    }
}

impl<'a> From<&'a GrayImage> for MatchReference<'a> {
    fn from(image: &'a GrayImage) -> Self {
        MatchReference::Image(image)
    }
}

impl<'a> From<&'a [f64]> for MatchReference<'a> {
    fn from(weights: &'a [f64]) -> Self {
        MatchReference::Weights(weights)
    }
}

/// Strategy for the nearest-CDF search.
///
/// Both strategies produce identical mappings; the two-pointer walk relies on
/// both CDFs being non-decreasing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CdfSearch {
    /// Merge walk over both CDFs with a binary search on ties, O(L log L)
    #[default]
    TwoPointer,
    /// Full scan of the reference CDF for every source intensity, O(L^2)
    Exhaustive,
}

/// Parameters for histogram matching
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchParams {
    /// Nearest-CDF search strategy
    pub search: CdfSearch,
}

/// Histogram matching algorithm against a reference image
#[derive(Debug, Clone, Default)]
pub struct HistogramMatch;

impl Algorithm for HistogramMatch {
    /// Source image and reference image
    type Input = (GrayImage, GrayImage);
    type Output = GrayImage;
    type Params = MatchParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "HistogramMatch"
    }

    fn description(&self) -> &'static str {
        "Histogram specification by nearest cumulative probability"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        let (image, reference) = input;
        match_histogram(&image, MatchReference::Image(&reference), params)
    }
}

/// Align a source CDF to a target CDF.
///
/// Returns the LUT `mapping[i] = argmin_j |source[i] - target[j]|`, ties
/// resolved to the smallest `j`.
pub fn match_cdfs(source: &Cdf, target: &Cdf, search: CdfSearch) -> Lut {
    match search {
        CdfSearch::TwoPointer => nearest_two_pointer(source.values(), target.values()),
        CdfSearch::Exhaustive => nearest_exhaustive(source.values(), target.values()),
    }
}

fn nearest_exhaustive(source: &[f64; INTENSITY_LEVELS], target: &[f64; INTENSITY_LEVELS]) -> Lut {
    Lut::from_fn(|i| {
        let s = source[i];
        let mut best = 0;
        let mut best_distance = (s - target[0]).abs();
        for (j, &t) in target.iter().enumerate().skip(1) {
            let distance = (s - t).abs();
            if distance < best_distance {
                best = j;
                best_distance = distance;
            }
        }
        best as u8
    })
}

fn nearest_two_pointer(source: &[f64; INTENSITY_LEVELS], target: &[f64; INTENSITY_LEVELS]) -> Lut {
    // Distances are compared exactly as the full scan computes them. Below the
    // boundary `|s - t|` is non-increasing in `t`, above it non-decreasing, so
    // the first minimum is either the first cell above the boundary or the
    // first cell below it that ties with the last one below it.
    let mut upper = 0;
    let mut mapping = [0u8; INTENSITY_LEVELS];
    for (out, &s) in mapping.iter_mut().zip(source.iter()) {
        // The boundary never moves left as the source CDF grows
        while upper < INTENSITY_LEVELS && target[upper] <= s {
            upper += 1;
        }

        let nearest = match upper.checked_sub(1) {
            None => 0,
            Some(last) => {
                let below = (s - target[last]).abs();
                if upper < INTENSITY_LEVELS && (s - target[upper]).abs() < below {
                    upper
                } else {
                    target[..upper].partition_point(|&t| (s - t).abs() > below)
                }
            }
        };
        *out = nearest as u8;
    }
    Lut::new(mapping)
}

/// Build the histogram-matching LUT of `image` against `reference`.
///
/// # Errors
/// - [`Error::Domain`] if the source or reference image has no pixels
/// - [`Error::InvalidArgument`] if the reference weights are malformed
pub fn matching_lut(
    image: &GrayImage,
    reference: MatchReference<'_>,
    params: MatchParams,
) -> Result<Lut> {
    let source = Histogram::from_image(image).cdf()?;
    let target = reference.cdf()?;
    let lut = match_cdfs(&source, &target, params.search);
    trace!(search = ?params.search, monotone = lut.is_monotone(), "matching lut built");
    Ok(lut)
}

/// Match the histogram of `image` to a reference distribution.
///
/// The reference is either a 256-entry target histogram or a reference
/// image. The output has the shape of `image`.
///
/// # Errors
/// - [`Error::Domain`] if the source or reference image has no pixels
/// - [`Error::InvalidArgument`] if the reference weights are malformed
///
/// # Example
/// ```
/// use pixmorph_algorithms::histogram::{match_histogram, MatchParams, MatchReference};
/// use pixmorph_core::Raster;
///
/// let image = Raster::from_rows(&[[10u8, 20], [30, 40]]).unwrap();
/// let matched = match_histogram(&image, MatchReference::Image(&image), MatchParams::default()).unwrap();
/// assert_eq!(matched, image);
/// ```
pub fn match_histogram(
    image: &GrayImage,
    reference: MatchReference<'_>,
    params: MatchParams,
) -> Result<GrayImage> {
    debug!(
        rows = image.rows(),
        cols = image.cols(),
        search = ?params.search,
        "match_histogram"
    );
    let lut = matching_lut(image, reference, params)?;
    Ok(lut.apply(image))
}

/// Match against a reference of dynamic rank.
///
/// A rank-1 array is a target histogram (exactly 256 weights); a rank-2 array
/// is a reference image whose values must be integers in `[0, 255]`.
///
/// # Errors
/// [`Error::InvalidArgument`] for any other rank or malformed values, plus
/// the errors of [`match_histogram`].
pub fn match_histogram_dyn(
    image: &GrayImage,
    reference: ArrayViewD<'_, f64>,
    params: MatchParams,
) -> Result<GrayImage> {
    match reference.ndim() {
        1 => {
            let weights: Vec<f64> = reference.iter().copied().collect();
            match_histogram(image, MatchReference::Weights(&weights), params)
        }
        2 => {
            let view = reference
                .into_dimensionality::<Ix2>()
                .map_err(|e| Error::Other(e.to_string()))?;
            if let Some(&bad) = view
                .iter()
                .find(|v| v.fract() != 0.0 || !(0.0..=255.0).contains(*v))
            {
                return Err(Error::invalid_argument(
                    "reference",
                    bad,
                    "reference image values must be integers in [0, 255]",
                ));
            }
            let reference_image = Raster::from_array(view.mapv(|v| v as u8));
            match_histogram(image, MatchReference::Image(&reference_image), params)
        }
        rank => Err(Error::invalid_argument(
            "reference",
            format!("rank {}", rank),
            "reference must be a histogram (rank 1) or an image (rank 2)",
        )),
    }
}
