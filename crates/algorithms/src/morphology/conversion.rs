//! Conversion between coordinate-set and raster forms of a structuring element

use std::borrow::Borrow;
use std::collections::BTreeSet;

use ndarray::ArrayView2;
use pixmorph_core::{Error, Raster, Result};
use tracing::debug;

/// Set of `(row, col)` offsets relative to an origin.
pub type CoordinateSet = BTreeSet<(isize, isize)>;

/// Raster position of the coordinate `(0, 0)`.
///
/// The origin may lie outside the bounds of the raster it anchors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Origin {
    pub row: isize,
    pub col: isize,
}

impl Origin {
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }
}

impl From<(isize, isize)> for Origin {
    fn from((row, col): (isize, isize)) -> Self {
        Self { row, col }
    }
}

/// Raster form of a structuring element: a minimal bounding binary raster
/// (cells 0 or 1) and the origin that anchors it.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementRaster {
    pub raster: Raster<u8>,
    pub origin: Origin,
}

impl ElementRaster {
    /// Coordinate-set form of this element
    pub fn coordinates(&self) -> Result<CoordinateSet> {
        raster_to_coordinates(&self.raster, self.origin)
    }

    /// Raster dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.raster.shape()
    }
}

/// Collect the non-zero cells of `raster` as coordinates relative to `origin`.
///
/// Each cell `(row, col)` becomes `(row - origin.row, col - origin.col)`.
///
/// # Errors
/// [`Error::InvalidArgument`] if an offset does not fit in `isize`, which
/// only happens for origins near `isize::MIN` or `isize::MAX`.
pub fn raster_to_coordinates(raster: &Raster<u8>, origin: Origin) -> Result<CoordinateSet> {
    raster
        .data()
        .indexed_iter()
        .filter(|&(_, &v)| v != 0)
        .map(|((row, col), _)| {
            // ndarray keeps every axis length within isize
            let row = (row as isize).checked_sub(origin.row);
            let col = (col as isize).checked_sub(origin.col);
            row.zip(col).ok_or_else(|| {
                Error::invalid_argument(
                    "origin",
                    format!("({}, {})", origin.row, origin.col),
                    "cell offsets relative to the origin overflow isize",
                )
            })
        })
        .collect()
}

/// Build the minimal bounding raster of a coordinate set.
///
/// The origin is `(-row_min, -col_min)`, so the most negative coordinate on
/// each axis lands at raster index 0. Duplicate coordinates are harmless.
///
/// # Errors
/// [`Error::InvalidArgument`] if `coordinates` is empty or its extent on an
/// axis does not fit in a raster.
///
/// # Example
/// ```
/// use pixmorph_algorithms::morphology::{coordinates_to_raster, Origin};
///
/// let plus: [(isize, isize); 5] = [(-1, 0), (0, -1), (0, 0), (1, 0), (0, 1)];
/// let element = coordinates_to_raster(&plus).unwrap();
/// assert_eq!(element.origin, Origin::new(1, 1));
/// assert_eq!(element.shape(), (3, 3));
/// ```
pub fn coordinates_to_raster<I>(coordinates: I) -> Result<ElementRaster>
where
    I: IntoIterator,
    I::Item: Borrow<(isize, isize)>,
{
    let coordinates: Vec<(isize, isize)> =
        coordinates.into_iter().map(|c| *c.borrow()).collect();

    let Some(&(first_row, first_col)) = coordinates.first() else {
        return Err(Error::invalid_argument(
            "coordinates",
            "[]",
            "structuring element must contain at least one coordinate",
        ));
    };

    let (mut row_min, mut row_max) = (first_row, first_row);
    let (mut col_min, mut col_max) = (first_col, first_col);
    for &(row, col) in &coordinates[1..] {
        row_min = row_min.min(row);
        row_max = row_max.max(row);
        col_min = col_min.min(col);
        col_max = col_max.max(col);
    }

    let too_wide = || {
        Error::invalid_argument(
            "coordinates",
            format!(
                "rows {}..={}, cols {}..={}",
                row_min, row_max, col_min, col_max
            ),
            "coordinate extent does not fit a raster",
        )
    };
    let origin = row_min
        .checked_neg()
        .zip(col_min.checked_neg())
        .map(|(row, col)| Origin::new(row, col))
        .ok_or_else(too_wide)?;
    let rows = axis_extent(row_min, row_max).ok_or_else(too_wide)?;
    let cols = axis_extent(col_min, col_max).ok_or_else(too_wide)?;
    if rows.checked_mul(cols).is_none_or(|cells| cells > isize::MAX as usize) {
        return Err(too_wide());
    }
    debug!(count = coordinates.len(), rows, cols, "coordinates_to_raster");

    let mut raster: Raster<u8> = Raster::new(rows, cols);
    let data = raster.data_mut();
    for &(row, col) in &coordinates {
        // Both differences lie in 0..extent, which fits
        data[[(row - row_min) as usize, (col - col_min) as usize]] = 1;
    }

    Ok(ElementRaster { raster, origin })
}

/// Number of cells spanned by `min..=max`, if it fits in `usize`
fn axis_extent(min: isize, max: isize) -> Option<usize> {
    max.checked_sub(min)
        .and_then(|span| span.checked_add(1))
        .and_then(|len| usize::try_from(len).ok())
}

/// Read an `N x 2` array of `(row, col)` coordinates into a set.
///
/// # Errors
/// [`Error::InvalidArgument`] if the array does not have exactly two columns.
pub fn coordinates_from_array(array: ArrayView2<'_, isize>) -> Result<CoordinateSet> {
    if array.ncols() != 2 {
        return Err(Error::invalid_argument(
            "coordinates",
            format!("{}x{} array", array.nrows(), array.ncols()),
            "coordinate arrays must have shape N x 2",
        ));
    }
    Ok(array.rows().into_iter().map(|r| (r[0], r[1])).collect())
}
