//! Raster-to-RGBA rendering using color schemes.

use crate::scheme::{evaluate, ColorScheme, Rgb};
use pixmorph_core::raster::{Raster, RasterElement};

/// Parameters for colormap rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ColormapParams {
    /// Color scheme to use.
    pub scheme: ColorScheme,
    /// Value mapped to the start of the scheme. Values below are clamped.
    pub min: f64,
    /// Value mapped to the end of the scheme. Values above are clamped.
    pub max: f64,
}

impl ColormapParams {
    /// Create params with the given scheme over the unit range; use
    /// [`auto_params`] to detect the range from data.
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme,
            min: 0.0,
            max: 1.0,
        }
    }

    /// Create params with explicit min/max range.
    pub fn with_range(scheme: ColorScheme, min: f64, max: f64) -> Self {
        Self { scheme, min, max }
    }
}

/// Auto-detect min/max from a raster, returning `ColormapParams` ready to use.
///
/// A constant raster gets a unit-wide range starting at its value, so it
/// renders at the start of the scheme.
pub fn auto_params<T: RasterElement>(raster: &Raster<T>, scheme: ColorScheme) -> ColormapParams {
    let stats = raster.statistics();
    let min = stats.min.and_then(RasterElement::to_f64);
    let max = stats.max.and_then(RasterElement::to_f64);

    match (min, max) {
        (Some(min), Some(max)) if min.is_finite() && max.is_finite() => {
            if (max - min).abs() < f64::EPSILON {
                ColormapParams::with_range(scheme, min, min + 1.0)
            } else {
                ColormapParams::with_range(scheme, min, max)
            }
        }
        // Empty raster or non-finite data
        _ => ColormapParams::new(scheme),
    }
}

/// Convert a raster to an RGBA pixel buffer.
///
/// Returns a `Vec<u8>` of length `rows * cols * 4` in row-major order.
/// Non-finite values render as transparent black.
pub fn raster_to_rgba<T: RasterElement>(raster: &Raster<T>, params: &ColormapParams) -> Vec<u8> {
    let range = params.max - params.min;
    let inv_range = if range.abs() > f64::EPSILON {
        1.0 / range
    } else {
        1.0
    };

    let mut rgba = Vec::with_capacity(raster.len() * 4);

    // `iter()` walks in logical row-major order regardless of memory layout
    for val in raster.data().iter() {
        match val.to_f64() {
            Some(v) if v.is_finite() => {
                let t = (v - params.min) * inv_range;
                let Rgb { r, g, b } = evaluate(params.scheme, t);
                rgba.extend_from_slice(&[r, g, b, 255]);
            }
            _ => rgba.extend_from_slice(&[0, 0, 0, 0]),
        }
    }

    rgba
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn raster_to_rgba_basic() {
        let r = Raster::from_rows(&[[0.0f64, 0.5], [1.0, f64::NAN]]).unwrap();

        let params = ColormapParams::with_range(ColorScheme::Grayscale, 0.0, 1.0);
        let rgba = raster_to_rgba(&r, &params);

        assert_eq!(rgba.len(), 16); // 4 pixels * 4 bytes
        // pixel (0,0) = 0.0 -> black, opaque
        assert_eq!(&rgba[0..4], &[0, 0, 0, 255]);
        // pixel (0,1) = 0.5 -> gray, opaque
        assert_eq!(&rgba[4..8], &[128, 128, 128, 255]);
        // pixel (1,0) = 1.0 -> white, opaque
        assert_eq!(&rgba[8..12], &[255, 255, 255, 255]);
        // pixel (1,1) = NaN -> transparent
        assert_eq!(&rgba[12..16], &[0, 0, 0, 0]);
    }

    #[test]
    fn binary_raster_with_auto_range() {
        let r = Raster::from_rows(&[[0u8, 1], [1, 0]]).unwrap();
        let params = auto_params(&r, ColorScheme::GrayscaleReversed);
        let rgba = raster_to_rgba(&r, &params);
        // Set cells are black on white
        assert_eq!(&rgba[0..4], &[255, 255, 255, 255]);
        assert_eq!(&rgba[4..8], &[0, 0, 0, 255]);
    }

    #[test]
    fn auto_params_range() {
        let r = Raster::from_rows(&[[10u8, 50, 100]]).unwrap();
        let params = auto_params(&r, ColorScheme::Hot);
        assert_relative_eq!(params.min, 10.0);
        assert_relative_eq!(params.max, 100.0);
        assert_eq!(params.scheme, ColorScheme::Hot);
    }

    #[test]
    fn auto_params_empty_raster() {
        let r: Raster<u8> = Raster::new(0, 3);
        let params = auto_params(&r, ColorScheme::Grayscale);
        assert_eq!(params, ColormapParams::new(ColorScheme::Grayscale));
    }

    #[test]
    fn auto_params_constant_raster() {
        let r = Raster::filled(2, 2, 42u8);
        let params = auto_params(&r, ColorScheme::Grayscale);
        assert_relative_eq!(params.min, 42.0);
        assert_relative_eq!(params.max, 43.0);
    }
}
