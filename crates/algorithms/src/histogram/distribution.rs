//! Intensity histograms and cumulative distributions

use std::ops::Index;

use pixmorph_core::{Error, GrayImage, Result, INTENSITY_LEVELS};

/// Pixel counts per intensity of an 8-bit image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; INTENSITY_LEVELS],
}

impl Histogram {
    /// Count the intensities of an image
    pub fn from_image(image: &GrayImage) -> Self {
        let mut counts = [0u64; INTENSITY_LEVELS];
        for &v in image.data().iter() {
            counts[v as usize] += 1;
        }
        Self { counts }
    }

    /// Wrap precomputed counts
    pub fn from_counts(counts: [u64; INTENSITY_LEVELS]) -> Self {
        Self { counts }
    }

    /// Raw counts
    pub fn counts(&self) -> &[u64; INTENSITY_LEVELS] {
        &self.counts
    }

    /// Total number of counted pixels
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Running sum of the counts
    pub fn cumulative(&self) -> [u64; INTENSITY_LEVELS] {
        let mut cumulative = [0u64; INTENSITY_LEVELS];
        let mut sum = 0u64;
        for (out, &count) in cumulative.iter_mut().zip(self.counts.iter()) {
            sum += count;
            *out = sum;
        }
        cumulative
    }

    /// Counts normalized to sum to 1.
    ///
    /// # Errors
    /// [`Error::Domain`] if the histogram is empty.
    pub fn density(&self) -> Result<[f64; INTENSITY_LEVELS]> {
        let total = self.nonzero_total()?;
        Ok(std::array::from_fn(|i| self.counts[i] as f64 / total))
    }

    /// Normalized cumulative distribution, ending at exactly 1.
    ///
    /// Computed as cumulative count over total so that two histograms with
    /// the same counts yield bit-identical CDFs.
    ///
    /// # Errors
    /// [`Error::Domain`] if the histogram is empty.
    pub fn cdf(&self) -> Result<Cdf> {
        let total = self.nonzero_total()?;
        let cumulative = self.cumulative();
        Ok(Cdf(std::array::from_fn(|i| cumulative[i] as f64 / total)))
    }

    fn nonzero_total(&self) -> Result<f64> {
        match self.total() {
            0 => Err(Error::Domain(
                "histogram of an image with no pixels has no distribution".into(),
            )),
            total => Ok(total as f64),
        }
    }
}

impl Index<u8> for Histogram {
    type Output = u64;

    fn index(&self, intensity: u8) -> &u64 {
        &self.counts[intensity as usize]
    }
}

/// Cumulative distribution over the 256 intensities, normalized to `[0, 1]`
/// and non-decreasing.
#[derive(Debug, Clone, PartialEq)]
pub struct Cdf([f64; INTENSITY_LEVELS]);

impl Cdf {
    /// Derive a CDF from a target histogram of 256 non-negative weights.
    ///
    /// The weights are cumulatively summed and divided by their total.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if there are not exactly 256 weights, a
    /// weight is negative or not finite, or the total is zero or overflows.
    pub fn from_weights(weights: &[f64]) -> Result<Self> {
        if weights.len() != INTENSITY_LEVELS {
            return Err(Error::invalid_argument(
                "reference",
                format!("length {}", weights.len()),
                format!("target histogram must have {} entries", INTENSITY_LEVELS),
            ));
        }
        if let Some((i, &w)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(Error::invalid_argument(
                "reference",
                format!("weight[{}] = {}", i, w),
                "target histogram weights must be finite and non-negative",
            ));
        }

        let mut cumulative = [0.0f64; INTENSITY_LEVELS];
        let mut sum = 0.0;
        for (out, &w) in cumulative.iter_mut().zip(weights) {
            sum += w;
            *out = sum;
        }
        if sum <= 0.0 || !sum.is_finite() {
            return Err(Error::invalid_argument(
                "reference",
                format!("total weight {}", sum),
                "target histogram must have a positive finite total",
            ));
        }
        Ok(Self(cumulative.map(|c| c / sum)))
    }

    /// Wrap explicit CDF values.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if a value lies outside `[0, 1]` or the
    /// sequence decreases.
    pub fn from_values(values: [f64; INTENSITY_LEVELS]) -> Result<Self> {
        if values.iter().any(|v| !(0.0..=1.0).contains(v)) {
            return Err(Error::invalid_argument(
                "cdf",
                "out of range",
                "cdf values must lie in [0, 1]",
            ));
        }
        let cdf = Self(values);
        if !cdf.is_monotone() {
            return Err(Error::invalid_argument(
                "cdf",
                "decreasing",
                "cdf values must be non-decreasing",
            ));
        }
        Ok(cdf)
    }

    /// Underlying values
    pub fn values(&self) -> &[f64; INTENSITY_LEVELS] {
        &self.0
    }

    /// Whether `cdf[i] <= cdf[i + 1]` holds for every `i`
    pub fn is_monotone(&self) -> bool {
        self.0.windows(2).all(|w| w[0] <= w[1])
    }
}

impl Index<usize> for Cdf {
    type Output = f64;

    fn index(&self, intensity: usize) -> &f64 {
        &self.0[intensity]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pixmorph_core::Raster;

    #[test]
    fn test_histogram_counts() {
        let image = Raster::from_rows(&[[0u8, 0], [255, 255]]).unwrap();
        let hist = Histogram::from_image(&image);
        assert_eq!(hist[0u8], 2);
        assert_eq!(hist[255u8], 2);
        assert_eq!(hist[128u8], 0);
        assert_eq!(hist.total(), 4);

        let cumulative = hist.cumulative();
        assert_eq!(cumulative[0], 2);
        assert_eq!(cumulative[254], 2);
        assert_eq!(cumulative[255], 4);
    }

    #[test]
    fn test_density_sums_to_one() {
        let image = Raster::from_fn(7, 9, |(r, c)| (r * 13 + c * 5) as u8);
        let density = Histogram::from_image(&image).density().unwrap();
        assert_relative_eq!(density.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cdf_monotone_and_ends_at_one() {
        let image = Raster::from_fn(7, 9, |(r, c)| (r * 13 + c * 5) as u8);
        let cdf = Histogram::from_image(&image).cdf().unwrap();
        assert!(cdf.is_monotone());
        assert_eq!(cdf[255], 1.0);
    }

    #[test]
    fn test_empty_histogram_is_domain_error() {
        let hist = Histogram::from_counts([0; INTENSITY_LEVELS]);
        assert!(matches!(hist.cdf(), Err(Error::Domain(_))));
        assert!(matches!(hist.density(), Err(Error::Domain(_))));
    }

    #[test]
    fn test_cdf_from_weights() {
        let mut weights = vec![0.0; INTENSITY_LEVELS];
        weights[10] = 1.0;
        weights[20] = 3.0;
        let cdf = Cdf::from_weights(&weights).unwrap();
        assert_eq!(cdf[9], 0.0);
        assert_relative_eq!(cdf[10], 0.25);
        assert_relative_eq!(cdf[19], 0.25);
        assert_eq!(cdf[20], 1.0);
        assert_eq!(cdf[255], 1.0);
    }

    #[test]
    fn test_cdf_from_weights_wrong_length() {
        assert!(matches!(
            Cdf::from_weights(&[1.0; 255]),
            Err(Error::InvalidArgument { name: "reference", .. })
        ));
        assert!(Cdf::from_weights(&[1.0]).is_err());
    }

    #[test]
    fn test_cdf_from_weights_invalid_values() {
        let mut weights = vec![1.0; INTENSITY_LEVELS];
        weights[3] = -1.0;
        assert!(Cdf::from_weights(&weights).is_err());
        weights[3] = f64::NAN;
        assert!(Cdf::from_weights(&weights).is_err());
        assert!(Cdf::from_weights(&[0.0; INTENSITY_LEVELS]).is_err());
        // Finite weights whose total overflows
        assert!(Cdf::from_weights(&[f64::MAX; INTENSITY_LEVELS]).is_err());
    }

    #[test]
    fn test_cdf_from_values_validation() {
        let ramp: [f64; INTENSITY_LEVELS] = std::array::from_fn(|i| i as f64 / 255.0);
        assert!(Cdf::from_values(ramp).is_ok());

        let mut decreasing = ramp;
        decreasing[100] = 0.0;
        assert!(Cdf::from_values(decreasing).is_err());

        let mut too_big = ramp;
        too_big[255] = 1.5;
        assert!(Cdf::from_values(too_big).is_err());
    }
}
