//! Intensity transformations for 8-bit grayscale images
//!
//! Point operations that remap every pixel through a 256-entry lookup table:
//! - **Lut**: lookup table construction and application
//! - **Equalization**: histogram equalization (CDF-derived LUT)
//! - **Gamma**: power-law response curve
//! - **Bit planes**: per-bit decomposition and reconstruction

mod bit_planes;
mod equalize;
mod gamma;
mod lut;

pub use bit_planes::{bit_planes, reconstruct_from_bit_planes, BitPlanes, BIT_DEPTH};
pub use equalize::{equalization_lut, equalize_histogram, Equalize};
pub use gamma::{gamma_correct, gamma_lut, GammaCorrection, GammaParams};
pub use lut::Lut;
