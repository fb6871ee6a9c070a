//! # Pixmorph Colormap
//!
//! Color mapping, raster-to-RGBA rendering and drawable descriptions.
//!
//! Nothing here draws. [`ImagePlot`] bundles a raster with its styling
//! (subplot position, title, axis mode, color scheme, interpolation) and can
//! render itself to an RGBA buffer; the caller hands that to whatever
//! rendering surface it owns.
//!
//! ## Usage
//!
//! ```
//! use pixmorph_colormap::{ImagePlot, SubplotPosition};
//! use pixmorph_core::Raster;
//!
//! let image = Raster::from_rows(&[[0u8, 255]]).unwrap();
//! let plot = ImagePlot::new(image)
//!     .with_position(SubplotPosition::Code(121))
//!     .with_title("original");
//! plot.validate().unwrap();
//! assert_eq!(plot.to_rgba().len(), 8);
//! ```

mod plot;
mod render;
mod scheme;

pub use plot::{AxisMode, ImagePlot, Interpolation, SubplotPosition};
pub use render::{auto_params, raster_to_rgba, ColormapParams};
pub use scheme::{evaluate, ColorScheme, ColorStop, Rgb};
