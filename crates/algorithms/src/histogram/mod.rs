//! Histograms and histogram matching
//!
//! - **Distribution**: 256-bin intensity histograms and normalized CDFs
//! - **Matching**: histogram specification by nearest cumulative probability

mod distribution;
mod matching;

pub use distribution::{Cdf, Histogram};
pub use matching::{
    match_cdfs, match_histogram, match_histogram_dyn, matching_lut, CdfSearch, HistogramMatch,
    MatchParams, MatchReference,
};
