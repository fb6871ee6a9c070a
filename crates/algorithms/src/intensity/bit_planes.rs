//! Bit-plane decomposition
//!
//! Plane `k` isolates bit `k` (0 = least significant) of every pixel.

use pixmorph_core::{Algorithm, Error, GrayImage, Raster, Result};
use tracing::debug;

/// Number of bit planes in an 8-bit image.
pub const BIT_DEPTH: usize = 8;

/// Bit-plane decomposition algorithm
#[derive(Debug, Clone, Default)]
pub struct BitPlanes;

impl Algorithm for BitPlanes {
    type Input = GrayImage;
    type Output = [GrayImage; BIT_DEPTH];
    type Params = ();
    type Error = Error;

    fn name(&self) -> &'static str {
        "BitPlanes"
    }

    fn description(&self) -> &'static str {
        "Split an 8-bit image into eight binary planes, least significant first"
    }

    fn execute(&self, input: Self::Input, _params: Self::Params) -> Result<Self::Output> {
        Ok(bit_planes(&input))
    }
}

/// Decompose an image into its eight bit planes.
///
/// `planes[k]` has the shape of `image` and holds `(pixel >> k) & 1`, so
/// `sum_k planes[k] << k` reproduces the image exactly.
pub fn bit_planes(image: &GrayImage) -> [GrayImage; BIT_DEPTH] {
    debug!(rows = image.rows(), cols = image.cols(), "bit_planes");
    std::array::from_fn(|k| Raster::from_array(image.data().mapv(|v| (v >> k) & 1)))
}

/// Rebuild an image from its eight bit planes.
///
/// # Errors
/// - [`Error::SizeMismatch`] if the planes do not share one shape
/// - [`Error::InvalidArgument`] if a plane holds a value other than 0 or 1
pub fn reconstruct_from_bit_planes(planes: &[GrayImage; BIT_DEPTH]) -> Result<GrayImage> {
    let (rows, cols) = planes[0].shape();
    let mut image: GrayImage = Raster::new(rows, cols);

    for (k, plane) in planes.iter().enumerate() {
        image.ensure_same_shape(plane)?;
        if let Some(&bad) = plane.data().iter().find(|&&v| v > 1) {
            return Err(Error::invalid_argument(
                "planes",
                format!("plane {} contains {}", k, bad),
                "bit planes must be binary",
            ));
        }
        image
            .data_mut()
            .zip_mut_with(plane.data(), |acc, &bit| *acc |= bit << k);
    }

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pixel_five() {
        // 5 = 0b0000_0101
        let image = Raster::filled(1, 1, 5u8);
        let planes = bit_planes(&image);
        let bits: Vec<u8> = planes.iter().map(|p| p.get(0, 0).unwrap()).collect();
        assert_eq!(bits, vec![1, 0, 1, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_planes_are_binary_and_shaped() {
        let image = Raster::from_fn(5, 7, |(r, c)| (r * 37 + c * 11) as u8);
        for plane in bit_planes(&image) {
            assert_eq!(plane.shape(), (5, 7));
            assert!(plane.data().iter().all(|&v| v <= 1));
        }
    }

    #[test]
    fn test_msb_plane_thresholds_at_128() {
        let image = Raster::from_rows(&[[0u8, 127, 128, 255]]).unwrap();
        let planes = bit_planes(&image);
        assert_eq!(planes[7], Raster::from_rows(&[[0u8, 0, 1, 1]]).unwrap());
    }

    #[test]
    fn test_reconstruction() {
        let image = Raster::from_fn(16, 16, |(r, c)| (r * 16 + c) as u8);
        let planes = bit_planes(&image);
        assert_eq!(reconstruct_from_bit_planes(&planes).unwrap(), image);
    }

    #[test]
    fn test_reconstruction_rejects_non_binary() {
        let image = Raster::filled(2, 2, 3u8);
        let mut planes = bit_planes(&image);
        planes[2].set(1, 1, 2).unwrap();
        assert!(matches!(
            reconstruct_from_bit_planes(&planes),
            Err(Error::InvalidArgument { name: "planes", .. })
        ));
    }

    #[test]
    fn test_reconstruction_rejects_shape_mismatch() {
        let image = Raster::filled(2, 2, 3u8);
        let mut planes = bit_planes(&image);
        planes[4] = Raster::new(3, 2);
        assert!(matches!(
            reconstruct_from_bit_planes(&planes),
            Err(Error::SizeMismatch { .. })
        ));
    }

    #[test]
    fn test_algorithm_trait() {
        let image = Raster::filled(2, 3, 0b1000_0001u8);
        let planes = BitPlanes.execute_default(image).unwrap();
        assert!(planes[0].data().iter().all(|&v| v == 1));
        assert!(planes[3].data().iter().all(|&v| v == 0));
        assert!(planes[7].data().iter().all(|&v| v == 1));
    }
}
