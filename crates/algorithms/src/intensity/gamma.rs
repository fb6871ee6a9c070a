//! Gamma (power-law) correction
//!
//! `s = 255 * (r / 255)^gamma`. `gamma < 1` brightens, `gamma > 1` darkens.

use std::borrow::Cow;

use pixmorph_core::{Algorithm, Error, GrayImage, Result};
use tracing::debug;

use super::lut::{round_half_even, Lut, MAX_INTENSITY};

/// Parameters for gamma correction
#[derive(Debug, Clone, Copy)]
pub struct GammaParams {
    /// Exponent of the response curve, must be non-negative
    pub gamma: f64,
}

impl Default for GammaParams {
    fn default() -> Self {
        Self { gamma: 1.0 }
    }
}

/// Gamma correction algorithm
#[derive(Debug, Clone, Default)]
pub struct GammaCorrection;

impl Algorithm for GammaCorrection {
    type Input = GrayImage;
    type Output = GrayImage;
    type Params = GammaParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "GammaCorrection"
    }

    fn description(&self) -> &'static str {
        "Power-law intensity transform through a lookup table"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        validate_gamma(params.gamma)?;
        if params.gamma == 1.0 {
            return Ok(input);
        }
        Ok(gamma_lut(params.gamma)?.apply(&input))
    }
}

fn validate_gamma(gamma: f64) -> Result<()> {
    if gamma.is_nan() || gamma < 0.0 {
        return Err(Error::invalid_argument(
            "gamma",
            gamma,
            "gamma must be a non-negative number",
        ));
    }
    Ok(())
}

/// Build the gamma lookup table: `lut[i] = round(255 * (i / 255)^gamma)`.
///
/// # Errors
/// [`Error::InvalidArgument`] if `gamma` is negative or NaN.
pub fn gamma_lut(gamma: f64) -> Result<Lut> {
    validate_gamma(gamma)?;
    Ok(Lut::from_fn(|i| {
        round_half_even(MAX_INTENSITY * (i as f64 / MAX_INTENSITY).powf(gamma))
    }))
}

/// Gamma-correct a grayscale image.
///
/// With `gamma == 1.0` the input is returned as [`Cow::Borrowed`] without
/// allocating; callers must not assume they received a copy. Any other
/// exponent produces a new image.
///
/// # Errors
/// [`Error::InvalidArgument`] if `gamma` is negative or NaN.
pub fn gamma_correct(image: &GrayImage, gamma: f64) -> Result<Cow<'_, GrayImage>> {
    debug!(rows = image.rows(), cols = image.cols(), gamma, "gamma_correct");
    validate_gamma(gamma)?;
    if gamma == 1.0 {
        return Ok(Cow::Borrowed(image));
    }
    Ok(Cow::Owned(gamma_lut(gamma)?.apply(image)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixmorph_core::Raster;

    fn sample() -> GrayImage {
        Raster::from_rows(&[[0u8, 64, 128], [192, 230, 255]]).unwrap()
    }

    #[test]
    fn test_unit_gamma_aliases_input() {
        let image = sample();
        let out = gamma_correct(&image, 1.0).unwrap();
        assert!(matches!(out, Cow::Borrowed(_)));
        assert!(std::ptr::eq(&*out, &image));
        assert_eq!(*out, image);
    }

    #[test]
    fn test_unit_gamma_lut_is_identity() {
        assert!(gamma_lut(1.0).unwrap().is_identity());
    }

    #[test]
    fn test_gamma_below_one_brightens() {
        let image = sample();
        let out = gamma_correct(&image, 0.5).unwrap();
        for (&src, &dst) in image.data().iter().zip(out.data().iter()) {
            assert!(dst >= src, "{} -> {}", src, dst);
        }
        // 255 * sqrt(64 / 255) = 127.75...
        assert_eq!(out.get(0, 1).unwrap(), 128);
    }

    #[test]
    fn test_gamma_above_one_darkens() {
        let image = sample();
        let out = gamma_correct(&image, 2.0).unwrap();
        for (&src, &dst) in image.data().iter().zip(out.data().iter()) {
            assert!(dst <= src, "{} -> {}", src, dst);
        }
        // 255 * (128 / 255)^2 = 64.25...
        assert_eq!(out.get(0, 2).unwrap(), 64);
    }

    #[test]
    fn test_endpoints_fixed() {
        for gamma in [0.1, 0.4, 2.2, 5.0] {
            let lut = gamma_lut(gamma).unwrap();
            assert_eq!(lut[0u8], 0);
            assert_eq!(lut[255u8], 255);
            assert!(lut.is_monotone());
        }
    }

    #[test]
    fn test_zero_gamma_saturates() {
        // x^0 == 1 for every x, including 0
        let lut = gamma_lut(0.0).unwrap();
        assert!(lut.as_array().iter().all(|&v| v == 255));
    }

    #[test]
    fn test_negative_gamma_rejected() {
        let image = sample();
        assert!(matches!(
            gamma_correct(&image, -0.1),
            Err(Error::InvalidArgument { name: "gamma", .. })
        ));
        assert!(gamma_lut(f64::NAN).is_err());
    }

    #[test]
    fn test_algorithm_trait() {
        let image = sample();
        let same = GammaCorrection.execute_default(image.clone()).unwrap();
        assert_eq!(same, image);

        let darker = GammaCorrection
            .execute(image.clone(), GammaParams { gamma: 2.0 })
            .unwrap();
        assert_eq!(darker.get(0, 2).unwrap(), 64);
        assert!(GammaCorrection
            .execute(image, GammaParams { gamma: -1.0 })
            .is_err());
    }
}
