//! Drawable descriptions of rasters.
//!
//! An [`ImagePlot`] owns everything a renderer needs to show one image in
//! one subplot. There is no implicit "current figure": a caller collects
//! plots and lays them out on its own surface.

use pixmorph_core::{Error, Raster, RasterElement, Result};
use tracing::debug;

use crate::render::{auto_params, raster_to_rgba, ColormapParams};
use crate::scheme::ColorScheme;

/// Placement of a plot inside a grid of subplots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubplotPosition {
    /// Three-digit shorthand `RCI`: `R` rows, `C` columns, 1-based index `I`
    Code(u16),
    /// Explicit grid with a 1-based index, counted row by row
    Grid { rows: usize, cols: usize, index: usize },
}

impl SubplotPosition {
    /// Resolve to `(rows, cols, index)`.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if the code is not three non-zero digits
    /// or the index falls outside `1..=rows * cols`.
    pub fn resolve(&self) -> Result<(usize, usize, usize)> {
        let (rows, cols, index) = match *self {
            SubplotPosition::Code(code) => {
                if !(111..=999).contains(&code) {
                    return Err(Error::invalid_argument(
                        "position",
                        code,
                        "subplot code must have three digits",
                    ));
                }
                let code = code as usize;
                (code / 100, code / 10 % 10, code % 10)
            }
            SubplotPosition::Grid { rows, cols, index } => (rows, cols, index),
        };

        if rows == 0 || cols == 0 || index == 0 || index > rows * cols {
            return Err(Error::invalid_argument(
                "position",
                format!("({}, {}, {})", rows, cols, index),
                "subplot index must lie in 1..=rows*cols",
            ));
        }
        Ok((rows, cols, index))
    }

    /// Zero-based `(row, col)` cell of the grid
    pub fn cell(&self) -> Result<(usize, usize)> {
        let (_, cols, index) = self.resolve()?;
        Ok(((index - 1) / cols, (index - 1) % cols))
    }
}

/// Axis decoration mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AxisMode {
    /// No axis lines, ticks or labels
    #[default]
    Off,
    /// Axis lines, ticks and labels shown
    On,
    /// Equal scaling of both axes
    Equal,
    /// Limits fitted tightly to the data
    Tight,
}

/// Resampling used when the renderer scales the pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpolation {
    Nearest,
    Bilinear,
    Bicubic,
}

/// Self-contained description of an image to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePlot<T: RasterElement> {
    /// Pixels to draw
    pub raster: Raster<T>,
    /// Subplot placement; `None` fills the whole surface
    pub position: Option<SubplotPosition>,
    /// Title shown above the image
    pub title: Option<String>,
    /// Axis decoration
    pub axis: AxisMode,
    /// Color scheme and value range
    pub colormap: ColormapParams,
    /// Resampling hint; `None` leaves the choice to the renderer
    pub interpolation: Option<Interpolation>,
    /// Raster position to highlight, e.g. a structuring element origin.
    /// May lie outside the raster.
    pub marker: Option<(isize, isize)>,
}

impl<T: RasterElement> ImagePlot<T> {
    /// Grayscale plot with the value range taken from the data and no axis
    pub fn new(raster: Raster<T>) -> Self {
        let colormap = auto_params(&raster, ColorScheme::Grayscale);
        Self {
            raster,
            position: None,
            title: None,
            axis: AxisMode::Off,
            colormap,
            interpolation: None,
            marker: None,
        }
    }

    pub fn with_position(mut self, position: SubplotPosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_axis(mut self, axis: AxisMode) -> Self {
        self.axis = axis;
        self
    }

    /// Switch color scheme, keeping the current value range
    pub fn with_scheme(mut self, scheme: ColorScheme) -> Self {
        self.colormap.scheme = scheme;
        self
    }

    /// Fix the value range instead of deriving it from the data
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.colormap.min = min;
        self.colormap.max = max;
        self
    }

    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = Some(interpolation);
        self
    }

    pub fn with_marker(mut self, row: isize, col: isize) -> Self {
        self.marker = Some((row, col));
        self
    }

    /// Check the description before handing it to a renderer.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] for an invalid subplot position or an
    /// empty/non-finite value range.
    pub fn validate(&self) -> Result<()> {
        if let Some(position) = self.position {
            position.resolve()?;
        }
        let ColormapParams { min, max, .. } = self.colormap;
        if !min.is_finite() || !max.is_finite() || max <= min {
            return Err(Error::invalid_argument(
                "range",
                format!("[{}, {}]", min, max),
                "color range must be finite with max > min",
            ));
        }
        Ok(())
    }

    /// Render the pixels to a row-major RGBA buffer
    pub fn to_rgba(&self) -> Vec<u8> {
        let (rows, cols) = self.raster.shape();
        debug!(rows, cols, scheme = %self.colormap.scheme, "render image plot");
        raster_to_rgba(&self.raster, &self.colormap)
    }
}

impl ImagePlot<u8> {
    /// Binary plot of a structuring element raster with its origin marked.
    ///
    /// Set cells are drawn dark on a light background over the fixed range
    /// `[0, 1]`, with nearest-neighbour resampling to keep cells crisp.
    pub fn element(raster: Raster<u8>, origin: (isize, isize)) -> Self {
        ImagePlot::new(raster)
            .with_scheme(ColorScheme::GrayscaleReversed)
            .with_range(0.0, 1.0)
            .with_interpolation(Interpolation::Nearest)
            .with_axis(AxisMode::Equal)
            .with_marker(origin.0, origin.1)
    }
}
